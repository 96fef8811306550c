// users_api/src/infra/argon2_hash_provider.rs

//! Password hashing with Argon2id.

use crate::domain::HashProvider;
use crate::errors::{AppError, Result};
use argon2::{
  password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
  Algorithm, Argon2, Params, Version,
};
use rand_core::OsRng;
use tracing::{debug, error, instrument};

#[derive(Clone, Default)]
pub struct Argon2HashProvider {
  argon2: Argon2<'static>,
}

impl Argon2HashProvider {
  /// Default Argon2id parameters.
  pub fn new() -> Self {
    Self::default()
  }

  /// Custom cost parameters, e.g. cheaper ones for test runs.
  pub fn with_params(params: Params) -> Self {
    Self {
      argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
    }
  }
}

impl HashProvider for Argon2HashProvider {
  #[instrument(name = "Argon2HashProvider::hash", skip_all, err(Display))]
  fn hash(&self, plain: &str) -> Result<String> {
    if plain.is_empty() {
      error!("Password hashing failed: password cannot be empty.");
      return Err(AppError::server("Password cannot be empty for hashing."));
    }

    let salt = SaltString::generate(&mut OsRng);
    match self.argon2.hash_password(plain.as_bytes(), &salt) {
      Ok(hash) => {
        debug!("Password hashed successfully.");
        Ok(hash.to_string())
      }
      Err(argon_err) => {
        error!(error = %argon_err, "Argon2 password hashing failed.");
        Err(AppError::server(format!("Password hashing failed: {}", argon_err)))
      }
    }
  }

  #[instrument(name = "Argon2HashProvider::compare", skip_all, err(Display), fields(hash_len = hashed.len()))]
  fn compare(&self, plain: &str, hashed: &str) -> Result<bool> {
    if plain.is_empty() {
      return Ok(false);
    }
    let parsed_hash = PasswordHash::new(hashed).map_err(|parse_err| {
      error!(error = %parse_err, "Failed to parse stored password hash.");
      AppError::server(format!("Invalid stored password hash: {}", parse_err))
    })?;

    match self.argon2.verify_password(plain.as_bytes(), &parsed_hash) {
      Ok(()) => Ok(true),
      Err(argon2::password_hash::Error::Password) => {
        debug!("Password mismatch.");
        Ok(false)
      }
      Err(other_err) => {
        error!(error = %other_err, "Argon2 password verification failed.");
        Err(AppError::server(format!("Password verification failed: {}", other_err)))
      }
    }
  }
}
