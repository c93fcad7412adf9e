pub mod assets;
pub mod config;
pub mod email;
pub mod error;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod server;
pub mod template;

pub use config::Config;
pub use routes::AppState;

use std::sync::Arc;

/// Create the app router for testing
///
/// Builds the full route tree without binding a listener, with the mail
/// capability injected so tests can substitute a recording fake.
pub fn create_app(config: Config, mailer: Arc<dyn email::Mailer>) -> axum::Router {
    routes::router(AppState { config, mailer })
}
