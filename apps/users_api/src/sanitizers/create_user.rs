// users_api/src/sanitizers/create_user.rs

use super::{known_object, trimmed, trimmed_lower, Sanitizer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const FIELDS: [&str; 5] = ["name", "email", "phone", "birthdate", "password"];

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserInput {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub phone: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub birthdate: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub password: Option<String>,
}

impl std::fmt::Debug for CreateUserInput {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("CreateUserInput")
      .field("name", &self.name)
      .field("email", &self.email)
      .field("phone", &self.phone)
      .field("birthdate", &self.birthdate)
      .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
      .finish()
  }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CreateUserSanitizer;

impl Sanitizer for CreateUserSanitizer {
  type Output = CreateUserInput;

  fn sanitize(&self, raw: &Value) -> CreateUserInput {
    let Some(obj) = known_object(raw, &FIELDS) else {
      return CreateUserInput::default();
    };
    CreateUserInput {
      name: trimmed(obj, "name"),
      email: trimmed_lower(obj, "email"),
      phone: trimmed(obj, "phone"),
      birthdate: trimmed(obj, "birthdate"),
      password: trimmed(obj, "password"),
    }
  }
}
