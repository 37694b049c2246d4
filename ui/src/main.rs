use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::{Json, Router, routing::get};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

#[derive(Clone)]
struct AppState {
    node_url: String,
    client: reqwest::Client,
}

#[derive(Deserialize, Serialize)]
struct SearchBody {
    #[serde(default)]
    query: Option<String>,
}

#[derive(Deserialize)]
struct ScrapeParams {
    url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let node_url =
        std::env::var("NODE_URL").unwrap_or_else(|_| "http://127.0.0.1:3000".to_string());
    let bind_addr: SocketAddr = std::env::var("UI_BIND")
        .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
        .parse()?;

    let state = AppState {
        node_url: normalize_node_url(&node_url),
        client: reqwest::Client::new(),
    };

    tracing::info!("Proxying API calls to {}", state.node_url);

    let app = Router::new()
        .route("/", get(ui))
        .route("/api/search", get(api_search_health).post(api_search))
        .route("/api/scrape", get(api_scrape))
        .with_state(state);

    tracing::info!("UI listening on {}", bind_addr);
    axum::serve(tokio::net::TcpListener::bind(bind_addr).await?, app).await?;

    Ok(())
}

async fn ui() -> Html<&'static str> {
    Html(include_str!("ui.html"))
}

async fn api_search(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, (StatusCode, String)> {
    let body: SearchBody =
        serde_json::from_slice(&body).unwrap_or(SearchBody { query: None });
    let url = format!("{}/api/search", state.node_url);

    let resp = state
        .client
        .post(url)
        .json(&body)
        .send()
        .await
        .map_err(|e| (StatusCode::BAD_GATEWAY, e.to_string()))?;

    Ok(relay(resp).await)
}

async fn api_search_health(
    State(state): State<AppState>,
) -> Result<Response, (StatusCode, String)> {
    let url = format!("{}/api/search", state.node_url);

    let resp = state
        .client
        .get(url)
        .send()
        .await
        .map_err(|e| (StatusCode::BAD_GATEWAY, e.to_string()))?;

    Ok(relay(resp).await)
}

async fn api_scrape(
    State(state): State<AppState>,
    Query(params): Query<ScrapeParams>,
) -> Result<Response, (StatusCode, String)> {
    let target = params.url.unwrap_or_default();
    let url = format!(
        "{}/api/scrape?url={}",
        state.node_url,
        urlencoding::encode(target.trim())
    );

    let resp = state
        .client
        .get(url)
        .send()
        .await
        .map_err(|e| (StatusCode::BAD_GATEWAY, e.to_string()))?;

    Ok(relay(resp).await)
}

/// Passes the node's status code and JSON body straight through.
async fn relay(resp: reqwest::Response) -> Response {
    let status = StatusCode::from_u16(resp.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let body = resp
        .json::<serde_json::Value>()
        .await
        .unwrap_or_else(|_| serde_json::json!({"error": "invalid json"}));

    (status, Json(body)).into_response()
}

fn normalize_node_url(candidate: &str) -> String {
    let trimmed = candidate.trim();

    let normalized = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };

    normalized.trim_end_matches('/').to_string()
}
