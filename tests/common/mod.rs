#![allow(dead_code)]

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// What the fake catalog server should answer with.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Ok,
    /// Like `Ok`, but detail responses arrive after `DETAIL_DELAY`.
    SlowDetail,
    ServerError,
    BadJson,
}

pub const DETAIL_DELAY: Duration = Duration::from_millis(300);

#[derive(Clone)]
pub struct ServerState {
    mode: Mode,
    pub limits: Arc<Mutex<Vec<Option<String>>>>,
}

fn listing_body() -> Value {
    json!({
        "count": 3,
        "next": null,
        "previous": null,
        "results": [
            {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
            {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/"},
            {"name": "venusaur", "url": "https://pokeapi.co/api/v2/pokemon/3/"}
        ]
    })
}

fn bulbasaur_body() -> Value {
    json!({
        "id": 1,
        "name": "bulbasaur",
        "height": 7,
        "weight": 69,
        "types": [
            {"slot": 1, "type": {"name": "grass", "url": "https://pokeapi.co/api/v2/type/12/"}},
            {"slot": 2, "type": {"name": "poison", "url": "https://pokeapi.co/api/v2/type/4/"}}
        ],
        "sprites": {"front_default": "https://img.example/1.png", "back_default": null}
    })
}

async fn listing(
    State(state): State<ServerState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.limits.lock().await.push(params.get("limit").cloned());
    match state.mode {
        Mode::Ok | Mode::SlowDetail => Json(listing_body()).into_response(),
        Mode::ServerError => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        Mode::BadJson => "not json".into_response(),
    }
}

async fn detail(State(state): State<ServerState>, Path(id): Path<String>) -> Response {
    if state.mode == Mode::SlowDetail {
        tokio::time::sleep(DETAIL_DELAY).await;
    }
    match (state.mode, id.as_str()) {
        (Mode::Ok | Mode::SlowDetail, "1") => Json(bulbasaur_body()).into_response(),
        (Mode::Ok | Mode::SlowDetail, _) => StatusCode::NOT_FOUND.into_response(),
        (Mode::ServerError, _) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        (Mode::BadJson, _) => "{\"name\":".into_response(),
    }
}

/// Starts a catalog server on an ephemeral port. Returns the listing URL.
pub async fn spawn_server(mode: Mode) -> (String, ServerState) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let state = ServerState {
        mode,
        limits: Arc::new(Mutex::new(Vec::new())),
    };

    let app = Router::new()
        .route("/api/v2/pokemon", get(listing))
        .route("/api/v2/pokemon/:id", get(detail))
        .with_state(state.clone());
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    (format!("http://{}/api/v2/pokemon", addr), state)
}
