// users_api/src/validators/fields.rs

use super::{labels, FieldValidator};
use crate::errors::{AppError, Result};
use chrono::{Datelike, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;
use uuid::Uuid;

fn compile(pattern: &str) -> Regex {
  Regex::new(pattern).unwrap_or_else(|error| panic!("validator regex {pattern:?} failed to compile: {error}"))
}

// Length is checked separately.
static NAME_RE: Lazy<Regex> = Lazy::new(|| compile(r"^\p{L}[\p{L} '.\-]*$"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| compile(r"(?i)^[a-z0-9._%+\-]+@[a-z0-9\-]+(\.[a-z0-9\-]+)*\.[a-z]{2,}$"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| compile(r"^\+?\d{10,15}$"));
static ISO_DATE_RE: Lazy<Regex> = Lazy::new(|| compile(r"^\d{4}-\d{2}-\d{2}$"));

const NAME_LEN: std::ops::RangeInclusive<usize> = 2..=100;
const EMAIL_MAX_LEN: usize = 254;
const PASSWORD_LEN: std::ops::RangeInclusive<usize> = 8..=128;
const MAX_AGE_YEARS: i32 = 150;

#[derive(Debug, Clone, Copy, Default)]
pub struct NameValidator;

impl FieldValidator for NameValidator {
  fn validate(&self, value: &str) -> Result<()> {
    let len = value.chars().count();
    if !NAME_LEN.contains(&len) {
      return Err(AppError::invalid_because(
        labels::NAME,
        "Deve conter entre 2 e 100 caracteres.",
      ));
    }
    if !NAME_RE.is_match(value) {
      return Err(AppError::invalid(labels::NAME));
    }
    Ok(())
  }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidator;

impl FieldValidator for EmailValidator {
  fn validate(&self, value: &str) -> Result<()> {
    if value.len() > EMAIL_MAX_LEN || !EMAIL_RE.is_match(value) {
      return Err(AppError::invalid(labels::EMAIL));
    }
    Ok(())
  }
}

/// Accepts common formatting (spaces, parentheses, dots, dashes) around
/// 10 to 15 digits with an optional leading `+`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneValidator;

impl FieldValidator for PhoneValidator {
  fn validate(&self, value: &str) -> Result<()> {
    let digits: String = value
      .chars()
      .filter(|c| !matches!(c, ' ' | '(' | ')' | '-' | '.'))
      .collect();
    if !PHONE_RE.is_match(&digits) {
      return Err(AppError::invalid(labels::PHONE));
    }
    Ok(())
  }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BirthdateValidator;

impl BirthdateValidator {
  /// Parses an ISO `YYYY-MM-DD` date that is neither in the future nor
  /// implausibly old.
  pub fn parse(value: &str) -> Result<NaiveDate> {
    if !ISO_DATE_RE.is_match(value) {
      return Err(AppError::invalid(labels::BIRTHDATE));
    }
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| AppError::invalid(labels::BIRTHDATE))?;
    let today = Utc::now().date_naive();
    if date > today {
      return Err(AppError::invalid_because(labels::BIRTHDATE, "Data no futuro."));
    }
    if date.year() < today.year() - MAX_AGE_YEARS {
      return Err(AppError::invalid(labels::BIRTHDATE));
    }
    Ok(date)
  }
}

impl FieldValidator for BirthdateValidator {
  fn validate(&self, value: &str) -> Result<()> {
    Self::parse(value).map(|_| ())
  }
}

/// At least one letter and one digit.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordValidator;

impl FieldValidator for PasswordValidator {
  fn validate(&self, value: &str) -> Result<()> {
    let len = value.chars().count();
    if !PASSWORD_LEN.contains(&len) {
      return Err(AppError::invalid_because(
        labels::PASSWORD,
        "Deve conter entre 8 e 128 caracteres.",
      ));
    }
    let has_letter = value.chars().any(char::is_alphabetic);
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    if !(has_letter && has_digit) {
      return Err(AppError::invalid_because(
        labels::PASSWORD,
        "Deve conter letras e números.",
      ));
    }
    Ok(())
  }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AvatarUrlValidator;

impl FieldValidator for AvatarUrlValidator {
  fn validate(&self, value: &str) -> Result<()> {
    let url = Url::parse(value).map_err(|_| AppError::invalid(labels::AVATAR_URL))?;
    let web_scheme = matches!(url.scheme(), "http" | "https");
    if !web_scheme || url.host_str().is_none() {
      return Err(AppError::invalid(labels::AVATAR_URL));
    }
    Ok(())
  }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IdValidator;

impl IdValidator {
  pub fn parse(value: &str) -> Result<Uuid> {
    Uuid::parse_str(value).map_err(|_| AppError::invalid(labels::ID))
  }
}

impl FieldValidator for IdValidator {
  fn validate(&self, value: &str) -> Result<()> {
    Self::parse(value).map(|_| ())
  }
}
