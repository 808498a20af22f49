use super::error::ItemError;
use super::gateway::ItemGateway;
use super::protocol::{ENDPOINT_HEALTH, ENDPOINT_ITEM, ENDPOINT_ITEMS, HealthResponse};
use super::types::{CreateItemRequest, Item, ItemId};

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::{
    Extension, Json, Router,
    extract::Path,
    http::{StatusCode, Uri},
    routing::get,
};
use std::sync::Arc;

/// Builds the router for the item API with `gateway` injected into every handler.
pub fn routes(gateway: Arc<ItemGateway>) -> Router {
    Router::new()
        .route(ENDPOINT_ITEMS, get(handle_list_items).post(handle_create_item))
        .route(
            ENDPOINT_ITEM,
            get(handle_get_item)
                .put(handle_update_item)
                .delete(handle_delete_item),
        )
        .route(ENDPOINT_HEALTH, get(handle_health))
        .layer(Extension(gateway))
}

pub async fn handle_list_items(
    Extension(gateway): Extension<Arc<ItemGateway>>,
) -> Result<(StatusCode, Json<Vec<Item>>), ItemError> {
    let items = gateway.find_all().await?;
    Ok((StatusCode::OK, Json(items)))
}

pub async fn handle_get_item(
    Extension(gateway): Extension<Arc<ItemGateway>>,
    uri: Uri,
    path: Result<Path<String>, PathRejection>,
) -> Result<(StatusCode, Json<Item>), ItemError> {
    let Path(id) = path.map_err(|e| reject_path(e, &uri))?;
    let item = gateway.find_one(&ItemId(id)).await?;
    Ok((StatusCode::OK, Json(item)))
}

pub async fn handle_create_item(
    Extension(gateway): Extension<Arc<ItemGateway>>,
    payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ItemError> {
    let Json(draft) = payload.map_err(reject_body)?;
    let item = gateway.create(&draft).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn handle_update_item(
    Extension(gateway): Extension<Arc<ItemGateway>>,
    uri: Uri,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ItemError> {
    let Path(id) = path.map_err(|e| reject_path(e, &uri))?;
    let Json(draft) = payload.map_err(reject_body)?;
    let item = gateway.update(&ItemId(id), &draft).await?;
    Ok((StatusCode::OK, Json(item)))
}

pub async fn handle_delete_item(
    Extension(gateway): Extension<Arc<ItemGateway>>,
    uri: Uri,
    path: Result<Path<String>, PathRejection>,
) -> Result<(StatusCode, Json<Item>), ItemError> {
    let Path(id) = path.map_err(|e| reject_path(e, &uri))?;
    let item = gateway.delete(&ItemId(id)).await?;
    Ok((StatusCode::OK, Json(item)))
}

pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

// An unreadable body is the client's fault: report it as 400, not axum's 422.
fn reject_body(rejection: JsonRejection) -> ItemError {
    tracing::warn!("Failed to parse item body: {}", rejection.body_text());
    ItemError::validation(rejection.body_text())
}

// An id segment that cannot be decoded names no item.
fn reject_path(rejection: PathRejection, uri: &Uri) -> ItemError {
    let raw_id = uri.path().rsplit('/').next().unwrap_or_default();
    tracing::warn!("Failed to decode item id '{}': {}", raw_id, rejection.body_text());
    ItemError::NotFound {
        id: raw_id.to_string(),
    }
}
