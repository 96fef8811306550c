// users_api/src/validators/create_user.rs

use super::{
  labels, require, BirthdateValidator, EmailAvailableValidator, EmailValidator, FieldValidator, NameValidator,
  PasswordValidator, PhoneValidator, Validator,
};
use crate::domain::UserRepository;
use crate::errors::Result;
use crate::sanitizers::CreateUserInput;
use async_trait::async_trait;
use std::sync::Arc;

pub struct CreateUserValidator {
  name: NameValidator,
  email: EmailValidator,
  phone: PhoneValidator,
  birthdate: BirthdateValidator,
  password: PasswordValidator,
  email_available: EmailAvailableValidator,
}

impl CreateUserValidator {
  pub fn new(repository: Arc<dyn UserRepository>) -> Self {
    Self {
      name: NameValidator,
      email: EmailValidator,
      phone: PhoneValidator,
      birthdate: BirthdateValidator,
      password: PasswordValidator,
      email_available: EmailAvailableValidator::new(repository),
    }
  }
}

#[async_trait]
impl Validator<CreateUserInput> for CreateUserValidator {
  async fn validate(&self, input: &CreateUserInput) -> Result<()> {
    let name = require(&input.name, labels::NAME)?;
    let email = require(&input.email, labels::EMAIL)?;
    let phone = require(&input.phone, labels::PHONE)?;
    let birthdate = require(&input.birthdate, labels::BIRTHDATE)?;
    let password = require(&input.password, labels::PASSWORD)?;

    self.name.validate(name)?;
    self.email.validate(email)?;
    self.phone.validate(phone)?;
    self.birthdate.validate(birthdate)?;
    self.password.validate(password)?;

    self.email_available.validate(email).await
  }
}
