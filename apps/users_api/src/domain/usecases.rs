// users_api/src/domain/usecases.rs

//! Use cases, as seen by the controllers. Inputs arrive raw (unsanitized JSON).

use crate::errors::Result;
use crate::models::{AuthResult, UserMapped};
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
pub trait CreateUser: Send + Sync {
  async fn create(&self, raw: Value) -> Result<()>;
}

#[async_trait]
pub trait Authenticate: Send + Sync {
  async fn authenticate(&self, raw: Value) -> Result<AuthResult>;
}

#[async_trait]
pub trait ListUsers: Send + Sync {
  async fn list(&self) -> Result<Vec<UserMapped>>;
}

#[async_trait]
pub trait UpdateUserAvatar: Send + Sync {
  async fn update_avatar(&self, raw: Value) -> Result<()>;
}
