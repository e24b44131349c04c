//! Facebook OAuth Callback Server
//!
//! A small HTTP service that completes the OAuth2 authorization-code flow
//! against the Facebook Graph API. It receives the provider's browser
//! redirect, exchanges the code for an access token, lists the pages the
//! token can manage, records the result, and renders a self-closing HTML
//! page into the popup that started the flow.
//!
//! # Pipeline
//!
//! Router → Exchange sequencer → Renderer. Every request is handled as a
//! single linear pass; there is no retry and no cross-request state beyond
//! the user store.
//!
//! # Example
//!
//! ```no_run
//! use facebook_oauth_callback::{config::Config, server::CallbackServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     CallbackServer::new(config)?.run(8000).await
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod exchange;
pub mod models;
pub mod server;
pub mod store;

pub use client::GraphClient;
pub use config::Config;
pub use error::{CallbackFailure, ClientError};
