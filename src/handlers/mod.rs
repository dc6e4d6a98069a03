pub mod organizations;
pub mod pages;

use axum::extract::State;
use axum::response::Json;
use serde_json::{json, Value};

use crate::server::AppState;

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "success": true,
        "data": {
            "status": "ok",
            "timestamp": chrono::Utc::now(),
            "organizations": state.organizations.list().len()
        }
    }))
}
