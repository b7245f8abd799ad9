// src/test_support.rs

use crate::api::ApiClient;
use crate::config::Config;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

/// Last JSON body posted to `/entries/`.
pub(crate) type Captured = Arc<Mutex<Option<Value>>>;

async fn list() -> Json<Value> {
    Json(json!([
        {"id": 1, "title": "Fix API bug", "content": "Debugged the api call",
         "summary": "Debugged...", "tags": "API, Debugging", "tip": "Debugged",
         "created_at": "2024-01-01T09:00:00"},
        {"id": 2, "title": "Learn React", "content": "Explored hooks",
         "tags": null, "created_at": "2024-02-01T09:00:00"}
    ]))
}

async fn one(Path(id): Path<String>) -> Response {
    match id.as_str() {
        "1" => Json(json!({"id": 1, "title": "Fix API bug", "content": "Debugged the api call",
                           "created_at": "2024-01-01"}))
        .into_response(),
        "1/x" => Json(json!({"id": "1/x", "title": "Slash id", "content": "reached by encoded id"}))
            .into_response(),
        _ => (StatusCode::NOT_FOUND, Json(json!({"detail": "Entry not found"}))).into_response(),
    }
}

async fn create(State(captured): State<Captured>, Json(body): Json<Value>) -> Response {
    let title = body["title"].as_str().unwrap_or_default().to_string();
    *captured.lock().unwrap() = Some(body.clone());
    match title.as_str() {
        "Duplicate" => (
            StatusCode::BAD_REQUEST,
            Json(json!({"detail": "Entry with this title already exists"})),
        )
            .into_response(),
        "Broken" => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        _ => {
            let mut created = body;
            created["id"] = json!(42);
            created["created_at"] = json!("2024-03-01T12:00:00");
            (StatusCode::OK, Json(created)).into_response()
        }
    }
}

/// Serves a fake entries API on an ephemeral local port.
pub(crate) async fn spawn_server() -> (ApiClient, Captured) {
    let captured: Captured = Arc::default();
    let app = Router::new()
        .route("/entries/", get(list).post(create))
        .route("/entries/:id", get(one))
        .with_state(captured.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    let config = Config::with_api_url(&format!("http://{}", addr)).unwrap();
    (ApiClient::new(&config), captured)
}

pub(crate) fn unreachable_client() -> ApiClient {
    // 端口 1 上没有服务
    ApiClient::new(&Config::with_api_url("http://127.0.0.1:1").unwrap())
}
