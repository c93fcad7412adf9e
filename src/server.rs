use std::sync::Arc;

use anyhow::Result;

use crate::{
    config::Config,
    email::{Mailer, SmtpMailer},
    routes::{self, AppState},
};

pub async fn serve(
    config: Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting folio server...");

    // Use CLI overrides if provided, otherwise use config
    let host = host_override.unwrap_or_else(|| config.server.host.clone());
    let port = port_override.unwrap_or(config.server.port);

    let mailer: Arc<dyn Mailer> = Arc::new(SmtpMailer::new(&config.mail)?);
    let state = AppState { config, mailer };

    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(format!("{host}:{port}")).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
