use std::time::Duration;
use thiserror::Error;

use crate::messages::{self, Locale, Message};

/// Failures talking to the remote API
#[derive(Debug, Clone, Error)]
pub enum ApiError {
  #[error("request timed out after {}ms", .0.as_millis())]
  Timeout(Duration),

  #[error("resource not found: {0}")]
  NotFound(String),

  #[error("unexpected HTTP status {status} from {url}")]
  Status { status: u16, url: String },

  #[error("network error: {0}")]
  Network(String),

  #[error("failed to decode response from {url}: {message}")]
  Decode { url: String, message: String },

  #[error("invalid request URL: {0}")]
  InvalidUrl(String),
}

impl ApiError {
  pub fn is_not_found(&self) -> bool {
    matches!(self, ApiError::NotFound(_))
  }

  /// The request never got a response (timeout or connection failure)
  pub fn is_transport(&self) -> bool {
    matches!(self, ApiError::Timeout(_) | ApiError::Network(_))
  }

  /// Short explanation suitable for showing to the user
  pub fn user_message(&self, locale: Locale) -> &'static str {
    let message = match self {
      ApiError::Timeout(_) => Message::TimeoutError,
      ApiError::NotFound(_) => Message::NotFound,
      ApiError::Network(_) => Message::NetworkError,
      ApiError::Status { .. } | ApiError::Decode { .. } | ApiError::InvalidUrl(_) => {
        Message::GeneralError
      }
    };
    messages::text(message, locale)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_timeout_is_distinct_from_network() {
    let timeout = ApiError::Timeout(Duration::from_secs(10));
    let network = ApiError::Network("connection refused".to_string());

    assert!(timeout.is_transport());
    assert!(network.is_transport());
    assert_ne!(timeout.user_message(Locale::En), network.user_message(Locale::En));
    assert_eq!(timeout.to_string(), "request timed out after 10000ms");
  }

  #[test]
  fn test_not_found_is_not_transport() {
    let err = ApiError::NotFound("https://pokeapi.co/api/v2/pokemon/nope".to_string());
    assert!(err.is_not_found());
    assert!(!err.is_transport());
    assert_eq!(
      err.user_message(Locale::Es),
      "No se pudo encontrar el Pokémon"
    );
  }
}
