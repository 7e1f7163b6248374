//! # OData Routes
//!
//! Axum handlers for the service document, `$metadata`, the entity
//! collection and single-entity lookup. Handlers are thin: query work is
//! delegated to [`crate::query`].

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tracing::debug;

use crate::catalog::Catalog;
use crate::query::{
    self, parse_int_prefix, CollectionResponse, ContextUrl, EntityResponse, QueryOptions,
};

use super::config::ServiceConfig;
use super::errors::{ServiceError, ServiceResult};
use super::metadata::{metadata_document, ServiceDocument};

/// Read-only state shared by all handlers
pub struct ServiceState {
    catalog: Catalog,
    context: ContextUrl,
    entity_type: String,
    service_document: ServiceDocument,
    metadata: String,
    endpoints: Vec<String>,
}

impl ServiceState {
    pub fn new(config: &ServiceConfig, catalog: Catalog) -> Self {
        let root = config.root();
        Self {
            catalog,
            context: config.context_url(),
            entity_type: config.entity_type.clone(),
            service_document: ServiceDocument::new(config),
            metadata: metadata_document(config),
            endpoints: vec![
                format!("{}/", root),
                format!("{}/$metadata", root),
                format!("{}/{}", root, config.entity_set),
            ],
        }
    }
}

/// Shared state type
type SharedState = Arc<ServiceState>;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub endpoints: Vec<String>,
}

/// Health check route at `/`
pub fn health_routes(state: SharedState) -> Router {
    Router::new()
        .route("/", get(health_handler))
        .with_state(state)
}

/// OData routes under the configured service root
pub fn odata_routes(state: SharedState, config: &ServiceConfig) -> Router {
    let root = config.root();
    let collection = format!("{}/{}", root, config.entity_set);

    Router::new()
        .route(root, get(service_document_handler))
        .route(&format!("{}/", root), get(service_document_handler))
        .route(&format!("{}/$metadata", root), get(metadata_handler))
        .route(&collection, get(collection_handler))
        .route(&format!("{}/:id", collection), get(entity_handler))
        .with_state(state)
}

async fn health_handler(State(state): State<SharedState>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "OK",
        message: "SAP OData Mock Service",
        endpoints: state.endpoints.clone(),
    };

    (StatusCode::OK, Json(response))
}

async fn service_document_handler(State(state): State<SharedState>) -> Json<ServiceDocument> {
    Json(state.service_document.clone())
}

async fn metadata_handler(State(state): State<SharedState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/xml")],
        state.metadata.clone(),
    )
}

/// `GET <root>/<Set>` with system query options
async fn collection_handler(
    State(state): State<SharedState>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<CollectionResponse> {
    let options = QueryOptions::parse(&params);
    let value = query::execute(state.catalog.records(), &options);

    Json(CollectionResponse::new(&state.context, value))
}

/// `GET <root>/<Set>/:id`
///
/// Ids are read with integer-prefix rules; a non-numeric id matches nothing.
async fn entity_handler(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ServiceResult<Json<EntityResponse>> {
    let record = parse_int_prefix(&id)
        .and_then(|key| state.catalog.find_by_id(key))
        .ok_or_else(|| {
            debug!(id = %id, "entity not found");
            ServiceError::not_found(state.entity_type.as_str())
        })?;

    Ok(Json(EntityResponse::new(&state.context, record.clone())))
}
