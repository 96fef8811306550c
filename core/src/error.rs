// stepline/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Failures raised by the engine itself, as opposed to the errors
/// produced by user handlers.
#[derive(Debug, Error)]
pub enum StepError {
  #[error("Step not found: {step_name}")]
  StepNotFound { step_name: String },

  #[error("Step already defined: {step_name}")]
  DuplicateStep { step_name: String },

  #[error("Handler missing for non-optional step: {step_name}")]
  HandlerMissing { step_name: String },

  #[error("Context type mismatch (expected {expected_type})")]
  TypeMismatch { expected_type: String },

  #[error("No pipeline registered for context type {type_name}")]
  NotRegistered { type_name: String },

  #[error("Handler failed: {source}")]
  Handler {
    #[source]
    source: AnyhowError,
  },
}

impl From<AnyhowError> for StepError {
  fn from(err: AnyhowError) -> Self {
    match err.downcast::<StepError>() {
      Ok(step_err) => step_err,
      Err(source) => StepError::Handler { source },
    }
  }
}

pub type StepResult<T, E = StepError> = std::result::Result<T, E>;
