// src/lib.rs

//! Stepline: asynchronous, type-safe step pipelines.
//!
//! A pipeline is an ordered list of named steps over a shared context
//! (`ContextData<T>`). Every step can carry `before`, `on` and `after`
//! handlers; a handler either lets the run continue, stops it, or fails it.
//! Pipelines for different context types live side by side in a
//! `PipelineRegistry`, which dispatches on the context's type.
//!
//! ```text
//!   sanitize ──▶ validate ──▶ persist
//!     before/on/after per step, first error wins
//! ```

pub mod core;
pub mod error;
pub mod pipeline;
pub mod registry;

pub use crate::core::context_data::ContextData;
pub use crate::core::control::{PipelineControl, PipelineResult};
pub use crate::core::handler::Handler;
pub use crate::core::step::{SkipCondition, StepDef};
pub use crate::error::{StepError, StepResult};
pub use crate::pipeline::definition::Pipeline;
pub use crate::registry::PipelineRegistry;
