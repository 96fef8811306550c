// users_api/src/domain/ports.rs

//! Interfaces the services depend on. Adapters live in `crate::infra`.

use crate::errors::Result;
use crate::models::{Identity, NewUser, Role, User, UserAvatarData, UserMapped};
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait UserRepository: Send + Sync {
  /// Stores a new user with a fresh id, the default avatar, role `client`
  /// and both timestamps set to now.
  async fn create(&self, new_user: NewUser) -> Result<()>;

  /// Exact, case-sensitive match. The only read that returns the password hash.
  async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

  async fn find_by_id(&self, id: Uuid) -> Result<Option<UserMapped>>;

  /// Every user in creation order.
  async fn list(&self) -> Result<Vec<UserMapped>>;

  /// Overwrites the avatar URL and refreshes `updated_at`. Fails with
  /// `UnregisteredParam("Id")` when no user has that id.
  async fn update_avatar(&self, data: UserAvatarData) -> Result<()>;
}

pub trait HashProvider: Send + Sync {
  fn hash(&self, plain: &str) -> Result<String>;

  /// `Ok(false)` on mismatch; `Err` only when the stored hash is unusable.
  fn compare(&self, plain: &str, hashed: &str) -> Result<bool>;
}

pub trait TokenProvider: Send + Sync {
  fn sign(&self, user_id: Uuid, role: Role) -> Result<String>;

  fn verify(&self, token: &str) -> Result<Identity>;
}
