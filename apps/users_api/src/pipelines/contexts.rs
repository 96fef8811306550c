// users_api/src/pipelines/contexts.rs

//! Context data for each pipeline. Handlers receive these wrapped in
//! `stepline::ContextData`.
//!
//! None of these derive `Debug`: they carry raw request bodies and
//! password material.

use crate::models::{AuthResult, User, UserMapped};
use crate::sanitizers::{AuthInput, AvatarInput, CreateUserInput};
use serde_json::Value;

#[derive(Clone, Default)]
pub struct CreateUserCtxData {
  pub raw: Value,
  pub input: CreateUserInput,
  pub password_hash: Option<String>,
}

impl CreateUserCtxData {
  pub fn new(raw: Value) -> Self {
    Self {
      raw,
      ..Default::default()
    }
  }
}

#[derive(Clone, Default)]
pub struct AuthenticateCtxData {
  pub raw: Value,
  pub input: AuthInput,
  pub user: Option<User>,
  pub result: Option<AuthResult>,
}

impl AuthenticateCtxData {
  pub fn new(raw: Value) -> Self {
    Self {
      raw,
      ..Default::default()
    }
  }
}

#[derive(Clone, Default)]
pub struct ListUsersCtxData {
  pub users: Option<Vec<UserMapped>>,
}

#[derive(Clone, Default)]
pub struct UpdateAvatarCtxData {
  pub raw: Value,
  pub input: AvatarInput,
}

impl UpdateAvatarCtxData {
  pub fn new(raw: Value) -> Self {
    Self {
      raw,
      ..Default::default()
    }
  }
}
