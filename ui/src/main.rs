use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::Html;
use axum::{Json, Router, routing::get};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

#[derive(Clone)]
struct AppState {
    node_url: String,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct NodeParams {
    node: Option<String>,
}

#[derive(Serialize)]
struct ProxyResponse {
    status: u16,
    body: serde_json::Value,
}

type ProxyResult = Result<Json<ProxyResponse>, (StatusCode, String)>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let node_url =
        std::env::var("NODE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    let bind_addr: SocketAddr = std::env::var("UI_BIND")
        .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
        .parse()?;

    let state = AppState {
        node_url: node_url.trim_end_matches('/').to_string(),
        client: reqwest::Client::new(),
    };

    let app = Router::new()
        .route("/", get(ui))
        .route("/api/items", get(api_list).post(api_create))
        .route(
            "/api/items/:id",
            get(api_get).put(api_update).delete(api_delete),
        )
        .with_state(state);

    tracing::info!("UI listening on {} (items service at {})", bind_addr, node_url);
    axum::serve(tokio::net::TcpListener::bind(bind_addr).await?, app).await?;

    Ok(())
}

async fn ui() -> Html<&'static str> {
    Html(include_str!("ui.html"))
}

async fn api_list(
    axum::extract::State(state): axum::extract::State<AppState>,
    Query(params): Query<NodeParams>,
) -> ProxyResult {
    let url = format!("{}/items", resolve_node_url(&state, params.node));
    forward(state.client.get(url)).await
}

async fn api_get(
    axum::extract::State(state): axum::extract::State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<NodeParams>,
) -> ProxyResult {
    let url = item_url(&state, params.node, &id);
    forward(state.client.get(url)).await
}

async fn api_create(
    axum::extract::State(state): axum::extract::State<AppState>,
    Query(params): Query<NodeParams>,
    Json(body): Json<serde_json::Value>,
) -> ProxyResult {
    let url = format!("{}/items", resolve_node_url(&state, params.node));
    forward(state.client.post(url).json(&body)).await
}

async fn api_update(
    axum::extract::State(state): axum::extract::State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<NodeParams>,
    Json(body): Json<serde_json::Value>,
) -> ProxyResult {
    let url = item_url(&state, params.node, &id);
    forward(state.client.put(url).json(&body)).await
}

async fn api_delete(
    axum::extract::State(state): axum::extract::State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<NodeParams>,
) -> ProxyResult {
    let url = item_url(&state, params.node, &id);
    forward(state.client.delete(url)).await
}

/// Sends the request and wraps the upstream status and JSON body.
async fn forward(request: reqwest::RequestBuilder) -> ProxyResult {
    let resp = request
        .send()
        .await
        .map_err(|e| (StatusCode::BAD_GATEWAY, e.to_string()))?;

    let status = resp.status().as_u16();
    let body = resp
        .json::<serde_json::Value>()
        .await
        .unwrap_or_else(|_| serde_json::json!({"error": "invalid json"}));

    Ok(Json(ProxyResponse { status, body }))
}

fn item_url(state: &AppState, override_url: Option<String>, id: &str) -> String {
    format!(
        "{}/items/{}",
        resolve_node_url(state, override_url),
        urlencoding::encode(id)
    )
}

fn resolve_node_url(state: &AppState, override_url: Option<String>) -> String {
    let candidate = override_url.unwrap_or_else(|| state.node_url.clone());
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return state.node_url.clone();
    }

    let normalized = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };

    normalized.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState {
            node_url: "http://localhost:3000".to_string(),
            client: reqwest::Client::new(),
        }
    }

    #[test]
    fn test_resolve_node_url_defaults_and_normalizes() {
        let state = state();
        assert_eq!(resolve_node_url(&state, None), "http://localhost:3000");
        assert_eq!(resolve_node_url(&state, Some("  ".into())), "http://localhost:3000");
        assert_eq!(
            resolve_node_url(&state, Some("10.0.0.5:3001/".into())),
            "http://10.0.0.5:3001"
        );
        assert_eq!(
            resolve_node_url(&state, Some("https://items.example".into())),
            "https://items.example"
        );
    }

    #[test]
    fn test_item_url_encodes_id() {
        assert_eq!(
            item_url(&state(), None, "a b/c"),
            "http://localhost:3000/items/a%20b%2Fc"
        );
    }
}
