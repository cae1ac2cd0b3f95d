use std::sync::Arc;

use tokio::signal;
use tracing_subscriber::EnvFilter;

use dotenvy::dotenv;

use portfolio_api::app::create_app;
use portfolio_api::config::AppConfig;
use portfolio_api::email::{EmailService, SmtpMailer};
use portfolio_api::state::SharedAppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenv().ok();

  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")))
    .init();

  let config = AppConfig::from_env()?;
  tracing::info!(environment = config.environment.as_str(), "Configuration loaded");

  let mailer: Arc<SmtpMailer> = Arc::new(EmailService::new(config.smtp.clone())?);
  let app_state = SharedAppState::new(&config, mailer);
  let app = create_app(app_state);

  let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;

  tracing::info!("Server running on http://{}", listener.local_addr()?);

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = signal::ctrl_c().await {
      tracing::error!("Failed to install Ctrl+C handler: {}", e);
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match signal::unix::signal(signal::unix::SignalKind::terminate()) {
      Ok(mut sigterm) => {
        sigterm.recv().await;
      }
      Err(e) => {
        tracing::error!("Failed to install signal handler: {}", e);
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
      _ = ctrl_c => {},
      _ = terminate => {},
  }

  tracing::info!("Received termination signal, shutting down gracefully...");
}
