use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::{
    assets::AssetsService,
    config::Config,
    email::Mailer,
    middleware::{cache_control_middleware, minify_html_middleware},
    template,
};

mod contact;
mod health;
mod index;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub mailer: Arc<dyn Mailer>,
}

pub async fn fallback() -> impl IntoResponse {
    template::not_found()
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(index::page))
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/api/contact", post(contact::submit))
        .fallback(fallback)
        .nest_service("/static", AssetsService::new())
        .with_state(app_state)
        .layer(axum_middleware::from_fn(cache_control_middleware))
        .layer(axum_middleware::map_response(minify_html_middleware))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}
