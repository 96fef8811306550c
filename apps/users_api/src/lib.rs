// users_api/src/lib.rs

//! Users REST API: registration, login, listing and avatar updates.
//!
//! Requests flow route → controller → service → `stepline` pipeline
//! (sanitize, validate, persist) → repository. `factories` wires it all.

pub mod config;
pub mod domain;
pub mod errors;
pub mod factories;
pub mod infra;
pub mod models;
pub mod pipelines;
pub mod sanitizers;
pub mod services;
pub mod state;
pub mod telemetry;
pub mod validators;
pub mod web;

pub use config::AppConfig;
pub use errors::{AppError, Result};
pub use state::AppState;
