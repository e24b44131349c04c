//! Configuration for the Facebook OAuth callback server.

use std::time::Duration;

/// Graph API constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for the Facebook Graph API.
    pub const GRAPH_API: &str = "https://graph.facebook.com";

    /// Request timeout. The reference deployment had none; a bound keeps a
    /// stalled provider from pinning the handler forever.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
}

/// Server configuration.
///
/// Passed explicitly into the client and exchange sequencer so tests can
/// inject fake credentials and a mock Graph API endpoint. Absent values are
/// tolerated; the status endpoint reports them as unset and outbound calls
/// fail at the provider.
#[derive(Debug, Clone)]
pub struct Config {
    /// Facebook app id (`client_id` in the token exchange).
    pub app_id: Option<String>,

    /// Facebook app secret (`client_secret` in the token exchange).
    pub app_secret: Option<String>,

    /// Redirect URI registered with the Facebook app.
    pub redirect_uri: Option<String>,

    /// Subject id under which fetched pages are recorded. This is a fixed
    /// single-tenant binding, not an identity derived from the provider.
    pub subject_id: Option<String>,

    /// Base URL for the Graph API (override for testing with mock servers).
    pub graph_api_url: String,

    /// Request timeout for outbound calls.
    pub request_timeout: Duration,

    /// Connection timeout for outbound calls.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create a new configuration from explicit values.
    #[must_use]
    pub fn new(
        app_id: Option<String>,
        app_secret: Option<String>,
        redirect_uri: Option<String>,
        subject_id: Option<String>,
    ) -> Self {
        Self {
            app_id: non_empty(app_id),
            app_secret: non_empty(app_secret),
            redirect_uri: non_empty(redirect_uri),
            subject_id: non_empty(subject_id),
            graph_api_url: api::GRAPH_API.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
        }
    }

    /// Create a test configuration pointing at a mock Graph API.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            app_id: Some("test-app-id".to_string()),
            app_secret: Some("test-app-secret".to_string()),
            redirect_uri: Some("http://localhost:8000/api/facebook/callback".to_string()),
            subject_id: Some("test-subject".to_string()),
            graph_api_url: base_url.to_string(),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
        }
    }

    /// Create configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("FACEBOOK_APP_ID").ok(),
            std::env::var("FACEBOOK_APP_SECRET").ok(),
            std::env::var("FACEBOOK_REDIRECT_URI").ok(),
            std::env::var("SUBJECT_USER_ID").ok(),
        )
    }

    /// Check if the app id is configured.
    #[must_use]
    pub const fn has_app_id(&self) -> bool {
        self.app_id.is_some()
    }

    /// Check if the app secret is configured.
    #[must_use]
    pub const fn has_app_secret(&self) -> bool {
        self.app_secret.is_some()
    }

    /// Check if the redirect URI is configured.
    #[must_use]
    pub const fn has_redirect_uri(&self) -> bool {
        self.redirect_uri.is_some()
    }

    /// Check if the subject id is configured.
    #[must_use]
    pub const fn has_subject_id(&self) -> bool {
        self.subject_id.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None, None, None, None)
    }
}

/// Normalize empty strings to `None` so status flags report "set" only for
/// values that are actually usable.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
