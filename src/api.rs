//! HTTP слой: маршруты, валидация запроса, CORS

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method},
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{Map, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::engine::PredictionEngine;
use crate::error::ApiError;
use crate::types::{HealthOutput, PredictionInput, PredictionOutput};

pub const REQUIRED_FIELDS: [&str; 4] = ["latitude", "longitude", "depth", "stations"];

pub const NOT_JSON: &str = "Request content-type must be application/json";
pub const INVALID_TYPES: &str = "Invalid data type for one or more fields. Ensure latitude, longitude, and depth are numbers, and stations is an integer.";

pub struct AppState {
    pub engine: PredictionEngine,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    pub fn new(engine: PredictionEngine) -> Self {
        Self {
            engine,
            loaded_at: chrono::Utc::now(),
        }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/predict", post(predict))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthOutput> {
    Json(HealthOutput {
        status: "ok".to_string(),
        models: state.engine.registry().len(),
        loaded_at: state.loaded_at,
    })
}

async fn predict(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<PredictionOutput>, ApiError> {
    let input = parse_request(&headers, &body)?;
    let output = state.engine.predict(&input)?;
    Ok(Json(output))
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };
    let mime = value.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

/// Тело запроса -> провалидированный ввод, либо 400 с описанием
pub fn parse_request(headers: &HeaderMap, body: &[u8]) -> Result<PredictionInput, ApiError> {
    if !is_json_content_type(headers) {
        return Err(ApiError::BadRequest(NOT_JSON.to_string()));
    }
    let data = match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) if !map.is_empty() => map,
        _ => return Err(ApiError::BadRequest(NOT_JSON.to_string())),
    };

    let missing: Vec<&str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|f| !data.contains_key(*f))
        .collect();
    if !missing.is_empty() {
        return Err(ApiError::BadRequest(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    parse_fields(&data).ok_or_else(|| ApiError::BadRequest(INVALID_TYPES.to_string()))
}

fn parse_fields(data: &Map<String, Value>) -> Option<PredictionInput> {
    Some(PredictionInput {
        latitude: as_float(&data["latitude"])?,
        longitude: as_float(&data["longitude"])?,
        depth: as_float(&data["depth"])?,
        stations: as_integer(&data["stations"])?,
    })
}

/// Число или строка с числом; NaN и бесконечности не принимаются
fn as_float(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    parsed.is_finite().then_some(parsed)
}

/// Целое, float без дробной части или строка с целым
fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            let f = n.as_f64()?;
            let integral = f.is_finite() && f.fract() == 0.0;
            (integral && f >= i64::MIN as f64 && f < i64::MAX as f64).then_some(f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}
