// stepline/src/pipeline/definition.rs

//! The `Pipeline<TData, Err>` struct and its construction.

use crate::core::handler::Handler;
use crate::core::step::{SkipCondition, StepDef};
use crate::error::{StepError, StepResult};
use std::collections::HashMap;

/// An ordered set of named steps over `ContextData<TData>`.
///
/// `Err` is what handlers fail with. It must absorb engine failures
/// (`From<StepError>`) so that a missing handler or an unknown context type
/// surfaces through the same channel as a handler error.
pub struct Pipeline<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<StepError> + Send + Sync + 'static,
{
  pub(crate) steps: Vec<StepDef<TData>>,

  pub(crate) before: HashMap<String, Vec<Handler<TData, Err>>>,
  pub(crate) on: HashMap<String, Vec<Handler<TData, Err>>>,
  pub(crate) after: HashMap<String, Vec<Handler<TData, Err>>>,
}

impl<TData, Err> Pipeline<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<StepError> + Send + Sync + 'static,
{
  /// Builds a pipeline from `(name, optional, skip_if)` tuples.
  pub fn new(step_defs: &[(&str, bool, Option<SkipCondition<TData>>)]) -> StepResult<Self> {
    Self::from_steps(step_defs.iter().map(|(name, optional, skip_if)| StepDef {
      name: (*name).to_string(),
      optional: *optional,
      skip_if: skip_if.clone(),
    }))
  }

  pub fn from_steps(step_defs: impl IntoIterator<Item = StepDef<TData>>) -> StepResult<Self> {
    let mut pipeline = Self {
      steps: Vec::new(),
      before: HashMap::new(),
      on: HashMap::new(),
      after: HashMap::new(),
    };
    for step_def in step_defs {
      pipeline.push_step(step_def)?;
    }
    Ok(pipeline)
  }

  /// Appends a step at the end of the pipeline.
  pub fn push_step(&mut self, step_def: StepDef<TData>) -> StepResult<()> {
    if self.has_step(&step_def.name) {
      return Err(StepError::DuplicateStep {
        step_name: step_def.name,
      });
    }
    self.steps.push(step_def);
    Ok(())
  }

  pub fn has_step(&self, step_name: &str) -> bool {
    self.steps.iter().any(|s| s.name == step_name)
  }

  pub fn step_names(&self) -> Vec<&str> {
    self.steps.iter().map(|s| s.name.as_str()).collect()
  }

  pub(crate) fn ensure_step_exists(&self, step_name: &str) -> StepResult<()> {
    if self.has_step(step_name) {
      Ok(())
    } else {
      Err(StepError::StepNotFound {
        step_name: step_name.to_string(),
      })
    }
  }
}
