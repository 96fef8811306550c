// users_api/src/errors.rs

use actix_web::http::StatusCode;
use stepline::StepError;
use thiserror::Error;

pub const DEFAULT_INVALID_REASON: &str = "Formato inválido.";

/// Every failure the API can produce.
///
/// The first six variants are application errors that carry their own
/// message and status. The rest are internal and are answered with a
/// generic 500.
#[derive(Debug, Error)]
pub enum AppError {
  #[error("Parâmetro ausente: {0} não informado(a).")]
  MissingParam(String),

  #[error("{param}. {reason}")]
  InvalidParam { param: String, reason: String },

  #[error("Credenciais inválidas: Email/Senha.")]
  InvalidCredentials,

  #[error("Não foram encontrados registros para esse(a) {0}.")]
  UnregisteredParam(String),

  #[error("Já existe um registro com esse(a) {0}.")]
  DuplicateResource(String),

  #[error("Erro interno do servidor: {0}")]
  Server(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Pipeline Error: {source}")]
  Workflow {
    #[from]
    source: StepError,
  },
}

impl AppError {
  pub fn missing(param: impl Into<String>) -> Self {
    AppError::MissingParam(param.into())
  }

  /// `InvalidParam` with the default "Formato inválido." reason.
  pub fn invalid(param: impl Into<String>) -> Self {
    AppError::InvalidParam {
      param: param.into(),
      reason: DEFAULT_INVALID_REASON.to_string(),
    }
  }

  pub fn invalid_because(param: impl Into<String>, reason: impl Into<String>) -> Self {
    AppError::InvalidParam {
      param: param.into(),
      reason: reason.into(),
    }
  }

  pub fn server(message: impl Into<String>) -> Self {
    AppError::Server(message.into())
  }

  pub fn status_code(&self) -> StatusCode {
    match self {
      AppError::MissingParam(_) | AppError::InvalidParam { .. } => StatusCode::BAD_REQUEST,
      AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
      AppError::UnregisteredParam(_) => StatusCode::NOT_FOUND,
      AppError::DuplicateResource(_) => StatusCode::CONFLICT,
      AppError::Server(_) | AppError::Config(_) | AppError::Sqlx(_) | AppError::Workflow { .. } => {
        StatusCode::INTERNAL_SERVER_ERROR
      }
    }
  }

  /// Stable error name used in structured logs.
  pub fn name(&self) -> &'static str {
    match self {
      AppError::MissingParam(_) => "MissingParamError",
      AppError::InvalidParam { .. } => "InvalidParamError",
      AppError::InvalidCredentials => "InvalidCredentialsError",
      AppError::UnregisteredParam(_) => "UnregisteredParamError",
      AppError::DuplicateResource(_) => "DuplicateResourceError",
      AppError::Server(_) => "ServerError",
      AppError::Config(_) => "ConfigError",
      AppError::Sqlx(_) => "DatabaseError",
      AppError::Workflow { .. } => "PipelineError",
    }
  }

  /// Whether the message may be handed back to a client as-is.
  pub fn is_client_visible(&self) -> bool {
    !matches!(self, AppError::Config(_) | AppError::Sqlx(_) | AppError::Workflow { .. })
  }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
