// stepline/src/core/handler.rs

use crate::core::context_data::ContextData;
use crate::core::control::PipelineControl;
use std::future::Future;
use std::pin::Pin;

/// Boxed future produced by a handler.
pub type HandlerFuture<Err> = Pin<Box<dyn Future<Output = Result<PipelineControl, Err>> + Send>>;

/// A step handler.
///
/// It receives a clone of the run's `ContextData<TData>`, so it may read and
/// write shared state, and resolves to a `PipelineControl` or an error.
///
/// Lock guards taken on the context are blocking and must be dropped before
/// any `.await` inside the handler.
pub type Handler<TData, Err> = Box<dyn Fn(ContextData<TData>) -> HandlerFuture<Err> + Send + Sync>;
