// users_api/src/validators/avatar.rs

use super::{labels, require, AvatarUrlValidator, FieldValidator, IdRegisteredValidator, IdValidator, Validator};
use crate::domain::UserRepository;
use crate::errors::Result;
use crate::sanitizers::AvatarInput;
use async_trait::async_trait;
use std::sync::Arc;

pub struct UpdateAvatarValidator {
  id: IdValidator,
  avatar_url: AvatarUrlValidator,
  id_registered: IdRegisteredValidator,
}

impl UpdateAvatarValidator {
  pub fn new(repository: Arc<dyn UserRepository>) -> Self {
    Self {
      id: IdValidator,
      avatar_url: AvatarUrlValidator,
      id_registered: IdRegisteredValidator::new(repository),
    }
  }
}

#[async_trait]
impl Validator<AvatarInput> for UpdateAvatarValidator {
  async fn validate(&self, input: &AvatarInput) -> Result<()> {
    let id = require(&input.id, labels::ID)?;
    let avatar_url = require(&input.avatar_url, labels::AVATAR_URL)?;

    self.id.validate(id)?;
    self.avatar_url.validate(avatar_url)?;

    self.id_registered.validate(id).await
  }
}
