//! Error types for the Facebook OAuth callback server.
//!
//! Uses `thiserror` for structured error handling with automatic `From`
//! implementations.

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Terminal failure of the callback exchange sequence.
///
/// Every variant is recovered at the request boundary and rendered as a
/// 200-status HTML failure page so the browser popup can display the
/// message itself.
#[derive(thiserror::Error, Debug)]
pub enum CallbackFailure {
    /// The provider (or the user) denied authorization; carries the
    /// provider-supplied error text verbatim.
    #[error("authorization denied: {0}")]
    Denied(String),

    /// The callback carried neither `code` nor `error`.
    #[error("missing authorization code")]
    MissingCode,

    /// The token endpoint response had no `access_token`.
    #[error("token exchange failed: {0}")]
    TokenExchange(String),

    /// The page-listing response had no `data`.
    #[error("page listing failed: {0}")]
    PageListing(String),

    /// Transport or parse failure anywhere in the sequence.
    #[error("unexpected error: {0}")]
    Internal(String),
}

impl CallbackFailure {
    /// Title displayed on the failure page.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Denied(_) | Self::MissingCode => "Authorization Failed",
            Self::TokenExchange(_) => "Token Exchange Failed",
            Self::PageListing(_) => "Failed to Access Pages",
            Self::Internal(_) => "Error",
        }
    }

    /// Detail message displayed on the failure page.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Denied(msg)
            | Self::TokenExchange(msg)
            | Self::PageListing(msg)
            | Self::Internal(msg) => msg.clone(),
            Self::MissingCode => "Missing authorization code".to_string(),
        }
    }
}

impl From<ClientError> for CallbackFailure {
    fn from(err: ClientError) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
