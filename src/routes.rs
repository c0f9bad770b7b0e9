use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::archiver;
use crate::config::WatchSource;
use crate::models::{Product, ProductCollection, SaveReport, WatchQuery};
use crate::parser;

/// Shared per-request context: the configured source document and the
/// directory the save operation writes into. Both are read-only after
/// startup.
#[derive(Clone)]
pub struct AppState {
    source: Arc<WatchSource>,
    data_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(source: WatchSource, data_dir: PathBuf) -> Self {
        Self {
            source: Arc::new(source),
            data_dir: Arc::new(data_dir),
        }
    }
}

/// Wire-level failure, serialized as `{"detail": "..."}`.
#[derive(Debug, PartialEq)]
pub enum ApiError {
    /// Extraction produced nothing usable.
    EmptyCollection,
    /// No product matched the requested name.
    NotFound(String),
    /// Writing a data file failed.
    Save(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::EmptyCollection | ApiError::Save(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> String {
        match self {
            ApiError::EmptyCollection => "Failed to process watch collection".to_string(),
            ApiError::NotFound(name) => format!("Watch '{}' not found", name),
            ApiError::Save(detail) => detail.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.detail() }))).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/watches", get(list_watches))
        .route("/watches/by-name", post(find_watch_by_name))
        .route("/watches/save", post(save_watch_collection))
        .layer(cors_layer())
        .with_state(state)
}

// Mirrors origin/methods/headers back so credentials stay allowed. Demo
// posture only; a deployment would pin the frontend origin here.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Every handler re-runs extraction against the configured source; an
/// empty outcome is the boundary's "total failure" signal.
fn extract_products(source: &WatchSource) -> Result<Vec<Product>, ApiError> {
    parser::extract_watches(&source.document, &source.links)
        .into_products()
        .ok_or(ApiError::EmptyCollection)
}

async fn list_watches(State(state): State<AppState>) -> Result<Json<ProductCollection>, ApiError> {
    let products = extract_products(&state.source)?;
    Ok(Json(ProductCollection { products }))
}

async fn find_watch_by_name(
    State(state): State<AppState>,
    Json(query): Json<WatchQuery>,
) -> Result<Json<Product>, ApiError> {
    let products = extract_products(&state.source)?;

    let wanted = query.name.trim().to_lowercase();
    products
        .into_iter()
        .find(|p| p.name.trim().to_lowercase() == wanted)
        .map(Json)
        .ok_or(ApiError::NotFound(query.name))
}

async fn save_watch_collection(
    State(state): State<AppState>,
) -> Result<Json<SaveReport>, ApiError> {
    let products = extract_products(&state.source)?;

    let collection_path =
        archiver::safe_filename(&state.data_dir, "watch_collection", "watches");
    let collection = ProductCollection { products };
    archiver::save_to_file(&collection, &collection_path)
        .map_err(|e| ApiError::Save(e.to_string()))?;

    let mut saved_files = Vec::with_capacity(collection.products.len());
    for product in &collection.products {
        let path = archiver::safe_filename(&state.data_dir, &product.name, "watch");
        archiver::save_to_file(product, &path).map_err(|e| ApiError::Save(e.to_string()))?;
        saved_files.push(path.display().to_string());
    }

    Ok(Json(SaveReport {
        message: format!(
            "Watch collection saved to {} and individual files: {}",
            collection_path.display(),
            saved_files.join(", ")
        ),
    }))
}
