// users_api/src/sanitizers/auth.rs

use super::{known_object, trimmed, trimmed_lower, Sanitizer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const FIELDS: [&str; 2] = ["email", "password"];

/// Login credentials after normalization.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthInput {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub password: Option<String>,
}

impl std::fmt::Debug for AuthInput {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("AuthInput")
      .field("email", &self.email)
      .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
      .finish()
  }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AuthSanitizer;

impl Sanitizer for AuthSanitizer {
  type Output = AuthInput;

  fn sanitize(&self, raw: &Value) -> AuthInput {
    let Some(obj) = known_object(raw, &FIELDS) else {
      return AuthInput::default();
    };
    AuthInput {
      email: trimmed_lower(obj, "email"),
      password: trimmed(obj, "password"),
    }
  }
}
