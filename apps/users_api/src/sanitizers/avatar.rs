// users_api/src/sanitizers/avatar.rs

use super::{known_object, trimmed_lower, Sanitizer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const FIELDS: [&str; 2] = ["id", "avatarUrl"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarInput {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AvatarSanitizer;

impl Sanitizer for AvatarSanitizer {
  type Output = AvatarInput;

  fn sanitize(&self, raw: &Value) -> AvatarInput {
    let Some(obj) = known_object(raw, &FIELDS) else {
      return AvatarInput::default();
    };
    AvatarInput {
      id: trimmed_lower(obj, "id"),
      avatar_url: trimmed_lower(obj, "avatarUrl"),
    }
  }
}
