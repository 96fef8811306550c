// users_api/src/models/user.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  Admin,
  Collaborator,
  #[default]
  Client,
}

impl Role {
  pub fn as_str(self) -> &'static str {
    match self {
      Role::Admin => "admin",
      Role::Collaborator => "collaborator",
      Role::Client => "client",
    }
  }
}

impl fmt::Display for Role {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role '{0}'")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
  type Err = UnknownRole;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "admin" => Ok(Role::Admin),
      "collaborator" => Ok(Role::Collaborator),
      "client" => Ok(Role::Client),
      other => Err(UnknownRole(other.to_string())),
    }
  }
}

/// A stored user, password hash included. Only the repository hands this
/// type out, and only from `find_by_email`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
  pub id: Uuid,
  pub name: String,
  pub email: String,
  pub phone: String,
  pub birthdate: NaiveDate,
  pub avatar_url: String,
  pub role: Role,
  #[serde(skip_serializing)]
  pub password: String,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// `User` without its password; the shape every outward-facing read returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMapped {
  pub id: Uuid,
  pub name: String,
  pub email: String,
  pub phone: String,
  pub birthdate: NaiveDate,
  pub avatar_url: String,
  pub role: Role,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl From<User> for UserMapped {
  fn from(user: User) -> Self {
    UserMapped {
      id: user.id,
      name: user.name,
      email: user.email,
      phone: user.phone,
      birthdate: user.birthdate,
      avatar_url: user.avatar_url,
      role: user.role,
      created_at: user.created_at,
      updated_at: user.updated_at,
    }
  }
}

/// Validated registration data. `password` already holds the hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
  pub name: String,
  pub email: String,
  pub phone: String,
  pub birthdate: NaiveDate,
  pub password: String,
}
