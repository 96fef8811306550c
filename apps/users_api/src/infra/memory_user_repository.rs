// users_api/src/infra/memory_user_repository.rs

use crate::domain::UserRepository;
use crate::errors::{AppError, Result};
use crate::models::{NewUser, Role, User, UserAvatarData, UserMapped};
use crate::validators::labels;
use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use parking_lot::RwLock;
use tracing::{event, instrument, Level};
use uuid::Uuid;

/// Process-local store for tests and `USER_STORE=memory`.
///
/// Validate-then-persist sequences are not atomic here; two concurrent
/// registrations of the same email can both pass validation.
pub struct MemoryUserRepository {
  users: RwLock<Vec<User>>,
  default_avatar_url: String,
}

/// Microsecond precision, as PostgreSQL `timestamptz` stores it.
fn now() -> DateTime<Utc> {
  Utc::now().trunc_subsecs(6)
}

impl MemoryUserRepository {
  pub fn new(default_avatar_url: impl Into<String>) -> Self {
    Self {
      users: RwLock::new(Vec::new()),
      default_avatar_url: default_avatar_url.into(),
    }
  }

  pub fn len(&self) -> usize {
    self.users.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.users.read().is_empty()
  }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
  #[instrument(name = "MemoryUserRepository::create", skip_all, fields(email = %new_user.email))]
  async fn create(&self, new_user: NewUser) -> Result<()> {
    let now = now();
    let user = User {
      id: Uuid::new_v4(),
      name: new_user.name,
      email: new_user.email,
      phone: new_user.phone,
      birthdate: new_user.birthdate,
      avatar_url: self.default_avatar_url.clone(),
      role: Role::default(),
      password: new_user.password,
      created_at: now,
      updated_at: now,
    };
    event!(Level::DEBUG, user_id = %user.id, "User stored in memory.");
    self.users.write().push(user);
    Ok(())
  }

  async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
    let users = self.users.read();
    Ok(users.iter().find(|u| u.email == email).cloned())
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<UserMapped>> {
    let users = self.users.read();
    Ok(users.iter().find(|u| u.id == id).cloned().map(UserMapped::from))
  }

  async fn list(&self) -> Result<Vec<UserMapped>> {
    let users = self.users.read();
    Ok(users.iter().cloned().map(UserMapped::from).collect())
  }

  #[instrument(name = "MemoryUserRepository::update_avatar", skip_all, fields(user_id = %data.id))]
  async fn update_avatar(&self, data: UserAvatarData) -> Result<()> {
    let mut users = self.users.write();
    let Some(user) = users.iter_mut().find(|u| u.id == data.id) else {
      event!(Level::WARN, "Avatar update for unknown user.");
      return Err(AppError::UnregisteredParam(labels::ID.to_string()));
    };
    user.avatar_url = data.avatar_url;
    user.updated_at = now();
    Ok(())
  }
}
