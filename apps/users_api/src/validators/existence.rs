// users_api/src/validators/existence.rs

//! Checks that need the repository.

use super::{labels, IdValidator, Validator};
use crate::domain::UserRepository;
use crate::errors::{AppError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{event, Level};

/// Rejects an email that already belongs to a user.
#[derive(Clone)]
pub struct EmailAvailableValidator {
  repository: Arc<dyn UserRepository>,
}

impl EmailAvailableValidator {
  pub fn new(repository: Arc<dyn UserRepository>) -> Self {
    Self { repository }
  }
}

#[async_trait]
impl Validator<str> for EmailAvailableValidator {
  async fn validate(&self, email: &str) -> Result<()> {
    if self.repository.find_by_email(email).await?.is_some() {
      event!(Level::DEBUG, %email, "Email already registered.");
      return Err(AppError::DuplicateResource(labels::EMAIL.to_string()));
    }
    Ok(())
  }
}

/// Rejects an id that no user has.
#[derive(Clone)]
pub struct IdRegisteredValidator {
  repository: Arc<dyn UserRepository>,
}

impl IdRegisteredValidator {
  pub fn new(repository: Arc<dyn UserRepository>) -> Self {
    Self { repository }
  }
}

#[async_trait]
impl Validator<str> for IdRegisteredValidator {
  async fn validate(&self, id: &str) -> Result<()> {
    let id = IdValidator::parse(id)?;
    if self.repository.find_by_id(id).await?.is_none() {
      event!(Level::DEBUG, %id, "No user with this id.");
      return Err(AppError::UnregisteredParam(labels::ID.to_string()));
    }
    Ok(())
  }
}
