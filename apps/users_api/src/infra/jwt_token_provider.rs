// users_api/src/infra/jwt_token_provider.rs

use crate::domain::TokenProvider;
use crate::errors::{AppError, Result};
use crate::models::{Identity, Role, TokenClaims};
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::{debug, error, instrument};
use uuid::Uuid;

pub const TOKEN_LABEL: &str = "Token";
pub const TOKEN_REJECTED_REASON: &str = "Expirado ou inválido.";

/// HS256 tokens carrying `{ userId, role, iat, exp }`.
pub struct JwtTokenProvider {
  encoding_key: EncodingKey,
  decoding_key: DecodingKey,
  validation: Validation,
  expires_in_secs: i64,
}

impl JwtTokenProvider {
  pub fn new(secret: &str, expires_in_secs: i64) -> Self {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    Self {
      encoding_key: EncodingKey::from_secret(secret.as_bytes()),
      decoding_key: DecodingKey::from_secret(secret.as_bytes()),
      validation,
      expires_in_secs,
    }
  }
}

impl TokenProvider for JwtTokenProvider {
  #[instrument(name = "JwtTokenProvider::sign", skip(self), err(Display))]
  fn sign(&self, user_id: Uuid, role: Role) -> Result<String> {
    let iat = Utc::now().timestamp();
    let exp = iat
      .checked_add(self.expires_in_secs)
      .ok_or_else(|| AppError::server("Token lifetime overflows the expiry timestamp."))?;
    let claims = TokenClaims {
      user_id,
      role,
      iat,
      exp,
    };
    encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
      error!(error = %e, "Token signing failed.");
      AppError::server(format!("Token signing failed: {}", e))
    })
  }

  fn verify(&self, token: &str) -> Result<Identity> {
    match decode::<TokenClaims>(token, &self.decoding_key, &self.validation) {
      Ok(data) => Ok(Identity::from(data.claims)),
      Err(e) => {
        debug!(error = %e, "Token rejected.");
        Err(AppError::invalid_because(TOKEN_LABEL, TOKEN_REJECTED_REASON))
      }
    }
  }
}
