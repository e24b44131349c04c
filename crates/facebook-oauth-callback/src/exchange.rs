//! OAuth exchange sequencer.
//!
//! Turns an authorization code into a confirmed set of accessible pages, or
//! a typed [`CallbackFailure`]. The sequence is strictly linear: deny
//! checks, then token exchange, then page listing, then the store upsert.
//! Every outbound call is attempted exactly once; any failure is terminal
//! for the request.

use std::sync::Arc;

use crate::client::ProviderClient;
use crate::error::CallbackFailure;
use crate::models::{ApiError, CallbackParams, Page, UserRecord};
use crate::store::UserStore;

/// Outcome of a fully successful exchange.
#[derive(Debug, Clone)]
pub struct GrantedAccess {
    /// Subject id the record was stored under, if one is configured.
    pub subject_id: Option<String>,

    /// Pages the token can manage, in API order.
    pub pages: Vec<Page>,
}

/// Runs the callback exchange sequence.
pub struct CallbackExchange {
    client: Arc<dyn ProviderClient>,
    store: Arc<dyn UserStore>,
    subject_id: Option<String>,
}

impl CallbackExchange {
    /// Create a sequencer over an injectable provider client and store.
    #[must_use]
    pub fn new(
        client: Arc<dyn ProviderClient>,
        store: Arc<dyn UserStore>,
        subject_id: Option<String>,
    ) -> Self {
        Self { client, store, subject_id }
    }

    /// Run the full exchange for one callback request.
    ///
    /// # Errors
    ///
    /// Returns a [`CallbackFailure`] naming the step that failed; transport
    /// and parse errors surface as `CallbackFailure::Internal`.
    pub async fn run(&self, params: &CallbackParams) -> Result<GrantedAccess, CallbackFailure> {
        // Provider-side denial takes precedence over everything, including
        // a `code` that may also be present.
        if let Some(error) = &params.error {
            tracing::warn!(error = %error, "Provider reported authorization failure");
            return Err(CallbackFailure::Denied(error.clone()));
        }

        let Some(code) = params.code.as_deref() else {
            return Err(CallbackFailure::MissingCode);
        };

        let token_response = self.client.exchange_token(code).await?;
        let Some(access_token) = token_response.access_token else {
            let message = ApiError::message_or_unknown(token_response.error.as_ref());
            tracing::warn!(message = %message, "Token exchange failed");
            return Err(CallbackFailure::TokenExchange(message));
        };

        let pages_response = self.client.list_pages(&access_token).await?;
        let Some(pages) = pages_response.data else {
            let message = ApiError::message_or_unknown(pages_response.error.as_ref());
            tracing::warn!(message = %message, "Page listing failed");
            return Err(CallbackFailure::PageListing(message));
        };

        if let Some(subject_id) = &self.subject_id {
            self.store
                .upsert(UserRecord {
                    subject_id: subject_id.clone(),
                    access_token,
                    pages: pages.clone(),
                })
                .await;
        } else {
            tracing::warn!("No subject id configured; exchange result not stored");
        }

        tracing::info!(pages = pages.len(), "Authorization complete");

        Ok(GrantedAccess { subject_id: self.subject_id.clone(), pages })
    }
}

impl std::fmt::Debug for CallbackExchange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackExchange").field("subject_id", &self.subject_id).finish()
    }
}
