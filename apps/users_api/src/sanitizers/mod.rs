// users_api/src/sanitizers/mod.rs

//! Input normalization. Sanitizers never reject: they trim, case-fold and
//! fill in absent fields so that validation sees a predictable shape.
//!
//! Raw input that is not a JSON object, or an object carrying none of the
//! known fields, sanitizes to the empty value (every field `None`, serialized
//! as `{}`). Otherwise every known field is present, absent ones as `""`.

pub mod auth;
pub mod avatar;
pub mod create_user;

pub use auth::{AuthInput, AuthSanitizer};
pub use avatar::{AvatarInput, AvatarSanitizer};
pub use create_user::{CreateUserInput, CreateUserSanitizer};

use serde_json::{Map, Value};

pub trait Sanitizer: Send + Sync {
  type Output;

  fn sanitize(&self, raw: &Value) -> Self::Output;
}

/// The object behind `raw`, provided it mentions at least one of `keys`.
pub(crate) fn known_object<'a>(raw: &'a Value, keys: &[&str]) -> Option<&'a Map<String, Value>> {
  let obj = raw.as_object()?;
  keys.iter().any(|key| obj.contains_key(*key)).then_some(obj)
}

/// Scalar fields rendered as text; anything else becomes `""`.
pub(crate) fn text_field(obj: &Map<String, Value>, key: &str) -> String {
  match obj.get(key) {
    Some(Value::String(s)) => s.clone(),
    Some(Value::Number(n)) => n.to_string(),
    Some(Value::Bool(b)) => b.to_string(),
    _ => String::new(),
  }
}

pub(crate) fn trimmed(obj: &Map<String, Value>, key: &str) -> Option<String> {
  Some(text_field(obj, key).trim().to_string())
}

pub(crate) fn trimmed_lower(obj: &Map<String, Value>, key: &str) -> Option<String> {
  Some(text_field(obj, key).trim().to_lowercase())
}
