//! Application setup and router configuration.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{header::CONTENT_TYPE, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use extraction::ai::OpenAI;
use extraction::{CvExtractor, ExtractorConfig, PdfLoader};
use openai_client::OpenAIClient;
use tower_http::cors::{self, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::routes::{extract_handler, health_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<CvExtractor>,
}

/// Wire the production extractor from configuration.
pub fn build_extractor(config: &Config) -> CvExtractor {
    let mut client = OpenAIClient::new(config.openai_api_key.clone());
    if let Some(url) = &config.openai_base_url {
        client = client.with_base_url(url);
    }

    let ai = OpenAI::new(client)
        .with_model(&config.openai_model)
        .with_fallback_model(&config.openai_fallback_model);

    CvExtractor::new(Arc::new(PdfLoader::new()), Arc::new(ai)).with_config(ExtractorConfig {
        max_doc_bytes: config.max_doc_bytes,
    })
}

/// Build the Axum application router
pub fn build_app(state: AppState, config: &Config) -> Router {
    Router::new()
        .route("/extract", post(extract_handler))
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(cors_layer(&config.allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS from the configured origin list; empty or `*` means any origin.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return cors.allow_origin(cors::Any);
    }

    let parsed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
    cors.allow_origin(parsed)
}
