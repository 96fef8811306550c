// users_api/src/validators/auth.rs

use super::{labels, require, EmailValidator, FieldValidator, Validator};
use crate::errors::Result;
use crate::sanitizers::AuthInput;
use async_trait::async_trait;

/// Shape checks only. Whether the credentials match is the login
/// pipeline's business, and it answers both failures the same way.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthValidator {
  email: EmailValidator,
}

#[async_trait]
impl Validator<AuthInput> for AuthValidator {
  async fn validate(&self, input: &AuthInput) -> Result<()> {
    let email = require(&input.email, labels::EMAIL)?;
    require(&input.password, labels::PASSWORD)?;
    self.email.validate(email)
  }
}
