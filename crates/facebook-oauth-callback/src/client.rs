//! Facebook Graph API client.
//!
//! The exchange sequencer talks to the provider through the
//! [`ProviderClient`] trait so it can be tested without network access;
//! [`GraphClient`] is the reqwest-backed production implementation.
//!
//! The Graph API reports failures as an error object in the JSON body, often
//! with a non-2xx status. Both calls therefore parse the body regardless of
//! status and leave success/failure detection to the sequencer, which checks
//! for the `access_token` / `data` fields.

use async_trait::async_trait;
use reqwest::Client;

use crate::config::Config;
use crate::error::ClientResult;
use crate::models::{PagesResponse, TokenResponse};

/// Outbound calls the exchange sequence depends on.
#[async_trait]
pub trait ProviderClient: Send + Sync {
    /// Exchange an authorization code for an access token.
    async fn exchange_token(&self, code: &str) -> ClientResult<TokenResponse>;

    /// List the pages the access token can manage.
    async fn list_pages(&self, access_token: &str) -> ClientResult<PagesResponse>;
}

/// Reqwest-backed Graph API client.
#[derive(Clone)]
pub struct GraphClient {
    client: Client,
    graph_api_url: String,
    app_id: Option<String>,
    app_secret: Option<String>,
    redirect_uri: Option<String>,
}

impl GraphClient {
    /// Create a new client from the server configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            graph_api_url: config.graph_api_url.clone(),
            app_id: config.app_id.clone(),
            app_secret: config.app_secret.clone(),
            redirect_uri: config.redirect_uri.clone(),
        })
    }

    /// GET a Graph API endpoint and parse the JSON body whatever the status.
    async fn get_json<T>(&self, url: &str, params: &[(&str, &str)]) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.client.get(url).query(params).send().await?;
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl ProviderClient for GraphClient {
    async fn exchange_token(&self, code: &str) -> ClientResult<TokenResponse> {
        let url = format!("{}/oauth/access_token", self.graph_api_url);

        // Unset credentials go out as empty strings; the provider rejects
        // them with an error body the sequencer surfaces to the user.
        let params = [
            ("client_id", self.app_id.as_deref().unwrap_or_default()),
            ("client_secret", self.app_secret.as_deref().unwrap_or_default()),
            ("redirect_uri", self.redirect_uri.as_deref().unwrap_or_default()),
            ("code", code),
        ];

        tracing::debug!("Exchanging authorization code for access token");
        self.get_json(&url, &params).await
    }

    async fn list_pages(&self, access_token: &str) -> ClientResult<PagesResponse> {
        let url = format!("{}/me/accounts", self.graph_api_url);
        let params = [("access_token", access_token)];

        tracing::debug!("Listing pages for obtained access token");
        self.get_json(&url, &params).await
    }
}

impl std::fmt::Debug for GraphClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphClient")
            .field("graph_api_url", &self.graph_api_url)
            .field("has_app_id", &self.app_id.is_some())
            .finish()
    }
}
