// users_api/src/validators/mod.rs

//! Validation runs after sanitization and fails fast: presence first, then
//! format, then checks that need the repository.

pub mod auth;
pub mod avatar;
pub mod create_user;
pub mod existence;
pub mod fields;

pub use auth::AuthValidator;
pub use avatar::UpdateAvatarValidator;
pub use create_user::CreateUserValidator;
pub use existence::{EmailAvailableValidator, IdRegisteredValidator};
pub use fields::{
  AvatarUrlValidator, BirthdateValidator, EmailValidator, IdValidator, NameValidator, PasswordValidator,
  PhoneValidator,
};

use crate::errors::{AppError, Result};
use async_trait::async_trait;

pub mod labels {
  pub const NAME: &str = "Nome";
  pub const EMAIL: &str = "Email";
  pub const PHONE: &str = "Telefone";
  pub const BIRTHDATE: &str = "Data de nascimento";
  pub const PASSWORD: &str = "Senha";
  pub const ID: &str = "Id";
  pub const AVATAR_URL: &str = "URL do avatar";
}

/// Synchronous, I/O-free check of a single field.
pub trait FieldValidator: Send + Sync {
  fn validate(&self, value: &str) -> Result<()>;
}

#[async_trait]
pub trait Validator<T: ?Sized + Sync>: Send + Sync {
  async fn validate(&self, input: &T) -> Result<()>;
}

/// The field's value, or `MissingParam(label)` when absent or empty.
pub(crate) fn require<'a>(value: &'a Option<String>, label: &str) -> Result<&'a str> {
  match value.as_deref() {
    Some(v) if !v.is_empty() => Ok(v),
    _ => Err(AppError::missing(label)),
  }
}
