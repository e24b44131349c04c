//! Facebook OAuth Callback Server - Entry Point

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use facebook_oauth_callback::{Config, server::CallbackServer};

#[derive(Parser, Debug)]
#[command(name = "facebook-oauth-callback")]
#[command(about = "OAuth2 callback server for the Facebook Graph API")]
#[command(version)]
struct Cli {
    /// HTTP server port
    #[arg(long, default_value = "8000", env = "PORT")]
    port: u16,

    /// Facebook app id
    #[arg(long, env = "FACEBOOK_APP_ID")]
    app_id: Option<String>,

    /// Facebook app secret
    #[arg(long, env = "FACEBOOK_APP_SECRET")]
    app_secret: Option<String>,

    /// Redirect URI registered with the Facebook app
    #[arg(long, env = "FACEBOOK_REDIRECT_URI")]
    redirect_uri: Option<String>,

    /// Subject id the fetched pages are recorded under
    #[arg(long, env = "SUBJECT_USER_ID")]
    subject_id: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Env vars from a local .env file, if present, before clap reads them.
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        port = cli.port,
        "Starting Facebook OAuth callback server"
    );

    let config = Config::new(cli.app_id, cli.app_secret, cli.redirect_uri, cli.subject_id);

    if !config.has_app_id() || !config.has_app_secret() {
        tracing::warn!("Facebook app credentials not fully configured; token exchange will fail");
    }

    CallbackServer::new(config)?.run(cli.port).await
}
