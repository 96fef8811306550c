// users_api/src/web/http.rs

//! Framework-independent request/response shapes used by controllers and
//! the auth gate. `web::adapters` converts to and from actix types.

use crate::models::Identity;
use actix_web::http::StatusCode;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct HttpRequest {
  pub body: Option<Value>,
  /// Header names are lowercase.
  pub headers: HashMap<String, String>,
  pub identity: Option<Identity>,
}

impl HttpRequest {
  pub fn with_body(body: Value) -> Self {
    Self {
      body: Some(body),
      ..Default::default()
    }
  }

  pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
    self.headers.insert(name.to_ascii_lowercase(), value.into());
    self
  }

  pub fn header(&self, name: &str) -> Option<&str> {
    self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResponseMetadata {
  pub timestamp: String,
}

impl ResponseMetadata {
  pub fn now() -> Self {
    Self {
      timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }
  }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
  pub success: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub data: Option<T>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error_message: Option<String>,
  pub metadata: ResponseMetadata,
}

#[derive(Debug, Clone)]
pub struct HttpResponse<T> {
  pub status: StatusCode,
  pub body: ApiEnvelope<T>,
}

impl<T> HttpResponse<T> {
  pub fn ok(data: T) -> Self {
    Self::success(StatusCode::OK, Some(data))
  }

  pub fn success(status: StatusCode, data: Option<T>) -> Self {
    Self {
      status,
      body: ApiEnvelope {
        success: true,
        data,
        error_message: None,
        metadata: ResponseMetadata::now(),
      },
    }
  }

  pub fn failure(status: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status,
      body: ApiEnvelope {
        success: false,
        data: None,
        error_message: Some(message.into()),
        metadata: ResponseMetadata::now(),
      },
    }
  }

  pub fn is_success(&self) -> bool {
    self.body.success
  }
}

impl HttpResponse<()> {
  pub fn created() -> Self {
    Self::success(StatusCode::CREATED, None)
  }
}
