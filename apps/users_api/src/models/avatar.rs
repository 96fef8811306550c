// users_api/src/models/avatar.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAvatarData {
  pub id: Uuid,
  pub avatar_url: String,
}
