//! Data model for the callback exchange.
//!
//! Everything here is request-scoped except [`UserRecord`], which outlives
//! the request through the user store.

use serde::{Deserialize, Serialize};

/// Query parameters carried by the provider's browser redirect.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallbackParams {
    /// Authorization grant, present after user consent.
    pub code: Option<String>,

    /// Error code set by the provider on denial or failure.
    pub error: Option<String>,
}

/// Graph API error object. Only `message` is consumed; the API sends more
/// fields (`type`, `code`, `fbtrace_id`) that this server has no use for.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub message: Option<String>,
}

impl ApiError {
    /// Nested error message, or the provider-agnostic fallback.
    #[must_use]
    pub fn message_or_unknown(error: Option<&Self>) -> String {
        error
            .and_then(|e| e.message.clone())
            .unwrap_or_else(|| "Unknown error".to_string())
    }
}

/// Response body of the token endpoint. Exactly one of `access_token` and
/// `error` is meaningful; presence of `access_token` decides success.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub error: Option<ApiError>,
}

/// Response body of the page-listing endpoint (`/me/accounts`).
#[derive(Debug, Clone, Deserialize)]
pub struct PagesResponse {
    pub data: Option<Vec<Page>>,
    pub error: Option<ApiError>,
}

/// A Facebook page the access token can manage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    pub name: String,
}

/// Record written to the user store after a fully successful exchange.
///
/// Only constructible once both the token exchange and the page listing
/// have succeeded; a partial success never produces a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    /// Configured subject id the record is keyed by (not derived from the
    /// provider's identity).
    pub subject_id: String,

    /// Opaque bearer credential obtained from the token exchange.
    pub access_token: String,

    /// Pages listed with that credential, in API order.
    pub pages: Vec<Page>,
}
