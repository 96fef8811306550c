// tests/validators_tests.rs

mod common;

use common::{memory_repository, setup_tracing, valid_user_body};
use serde_json::json;
use std::sync::Arc;
use users_api::domain::UserRepository;
use users_api::errors::AppError;
use users_api::models::NewUser;
use users_api::sanitizers::{AuthSanitizer, AvatarSanitizer, CreateUserSanitizer, Sanitizer};
use users_api::validators::{
  AuthValidator, AvatarUrlValidator, BirthdateValidator, CreateUserValidator, EmailValidator, FieldValidator,
  NameValidator, PasswordValidator, PhoneValidator, UpdateAvatarValidator, Validator,
};

fn message(err: AppError) -> String {
  err.to_string()
}

#[test]
fn field_validators_accept_well_formed_values() {
  assert!(NameValidator.validate("José d'Ávila").is_ok());
  assert!(EmailValidator.validate("maria@example.com.br").is_ok());
  assert!(PhoneValidator.validate("+55 (11) 98765-4321").is_ok());
  assert!(BirthdateValidator.validate("1990-05-17").is_ok());
  assert!(PasswordValidator.validate("abc12345").is_ok());
  assert!(AvatarUrlValidator.validate("https://cdn.example.com/a.png").is_ok());
}

#[test]
fn field_validators_reject_malformed_values() {
  assert_eq!(message(NameValidator.validate("M").unwrap_err()), "Nome. Deve conter entre 2 e 100 caracteres.");
  assert_eq!(message(NameValidator.validate("R2D2").unwrap_err()), "Nome. Formato inválido.");
  assert_eq!(message(EmailValidator.validate("maria@").unwrap_err()), "Email. Formato inválido.");
  assert_eq!(message(PhoneValidator.validate("12345").unwrap_err()), "Telefone. Formato inválido.");
  assert_eq!(
    message(BirthdateValidator.validate("17/05/1990").unwrap_err()),
    "Data de nascimento. Formato inválido."
  );
  assert_eq!(
    message(BirthdateValidator.validate("2990-01-01").unwrap_err()),
    "Data de nascimento. Data no futuro."
  );
  assert_eq!(
    message(PasswordValidator.validate("onlyletters").unwrap_err()),
    "Senha. Deve conter letras e números."
  );
  assert_eq!(message(AvatarUrlValidator.validate("ftp://host/a.png").unwrap_err()), "URL do avatar. Formato inválido.");
}

#[test]
fn birthdate_rejects_impossible_calendar_dates() {
  assert!(matches!(
    BirthdateValidator::parse("2001-02-30"),
    Err(AppError::InvalidParam { .. })
  ));
}

#[tokio::test]
async fn create_user_validator_reports_first_missing_field() {
  setup_tracing();
  let validator = CreateUserValidator::new(memory_repository());
  let input = CreateUserSanitizer.sanitize(&json!({ "name": "Maria Silva", "email": "" }));

  let err = validator.validate(&input).await.unwrap_err();
  assert_eq!(err.to_string(), "Parâmetro ausente: Email não informado(a).");
}

#[tokio::test]
async fn create_user_validator_checks_format_before_uniqueness() {
  let repository = memory_repository();
  let validator = CreateUserValidator::new(repository.clone());
  let mut body = valid_user_body("maria@example.com");
  body["phone"] = json!("abc");

  let err = validator.validate(&CreateUserSanitizer.sanitize(&body)).await.unwrap_err();
  assert!(matches!(err, AppError::InvalidParam { ref param, .. } if param == "Telefone"));
}

#[tokio::test]
async fn create_user_validator_rejects_taken_email() {
  let repository = memory_repository();
  repository
    .create(NewUser {
      name: "Maria Silva".into(),
      email: "maria@example.com".into(),
      phone: "11987654321".into(),
      birthdate: BirthdateValidator::parse("1990-05-17").unwrap(),
      password: "hash".into(),
    })
    .await
    .unwrap();
  let validator = CreateUserValidator::new(repository);

  let input = CreateUserSanitizer.sanitize(&valid_user_body("MARIA@example.com"));
  let err = validator.validate(&input).await.unwrap_err();
  assert_eq!(err.to_string(), "Já existe um registro com esse(a) Email.");
}

#[tokio::test]
async fn auth_validator_requires_both_credentials() {
  let err = AuthValidator::default()
    .validate(&AuthSanitizer.sanitize(&json!({ "email": "maria@example.com" })))
    .await
    .unwrap_err();
  assert_eq!(err.to_string(), "Parâmetro ausente: Senha não informado(a).");

  let err = AuthValidator::default()
    .validate(&AuthSanitizer.sanitize(&json!({ "email": "nope", "password": "x" })))
    .await
    .unwrap_err();
  assert_eq!(err.to_string(), "Email. Formato inválido.");
}

#[tokio::test]
async fn update_avatar_validator_orders_checks() {
  let repository: Arc<dyn UserRepository> = memory_repository();
  let validator = UpdateAvatarValidator::new(repository);

  let missing = AvatarSanitizer.sanitize(&json!({ "id": "" }));
  assert!(matches!(validator.validate(&missing).await, Err(AppError::MissingParam(p)) if p == "Id"));

  let bad_id = AvatarSanitizer.sanitize(&json!({ "id": "123", "avatarUrl": "nope" }));
  assert_eq!(validator.validate(&bad_id).await.unwrap_err().to_string(), "Id. Formato inválido.");

  let unknown = AvatarSanitizer.sanitize(&json!({
    "id": uuid::Uuid::new_v4().to_string(),
    "avatarUrl": "https://cdn.example.com/a.png",
  }));
  assert_eq!(
    validator.validate(&unknown).await.unwrap_err().to_string(),
    "Não foram encontrados registros para esse(a) Id."
  );
}
