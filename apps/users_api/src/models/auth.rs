// users_api/src/models/auth.rs

use super::user::{Role, UserMapped};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResult {
  pub user: UserMapped,
  pub access_token: String,
}

/// Who is calling, as decoded from a valid bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
  pub user_id: Uuid,
  pub user_role: Role,
}

/// JWT payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
  pub user_id: Uuid,
  pub role: Role,
  pub iat: i64,
  pub exp: i64,
}

impl From<TokenClaims> for Identity {
  fn from(claims: TokenClaims) -> Self {
    Identity {
      user_id: claims.user_id,
      user_role: claims.role,
    }
  }
}
