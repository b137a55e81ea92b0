//! HTTP Controller (Driver Adapter)
//!
//! Axum-based REST API that delegates to the calculation core. Instrument
//! lookup happens here, at the boundary: the core itself only ever sees a
//! resolved instrument.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};

use crate::domain::instrument::InstrumentRegistry;
use crate::domain::sizing::{LotSizer, SizingRequest};

use super::request::{CalculateRequest, InputMode};
use super::response::{
    CalculateResponse, ErrorResponse, HealthResponse, InstrumentResponse, ListInstrumentsResponse,
};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Instrument lookup table, immutable after startup.
    pub registry: Arc<InstrumentRegistry>,
    /// Application version.
    pub version: String,
}

/// Create the HTTP router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/instruments", get(list_instruments))
        .route("/api/v1/calculate", post(calculate))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
    })
}

/// List the available instruments in registration order.
async fn list_instruments(State(state): State<AppState>) -> impl IntoResponse {
    let instruments = state
        .registry
        .all()
        .iter()
        .map(InstrumentResponse::from)
        .collect();
    Json(ListInstrumentsResponse { instruments })
}

/// Calculate a lot size for the requested parameters.
async fn calculate(
    State(state): State<AppState>,
    Json(request): Json<CalculateRequest>,
) -> Response {
    let Some(instrument) = state.registry.get(&request.instrument_id) else {
        return error_response(
            StatusCode::NOT_FOUND,
            format!("Unknown instrument: {}", request.instrument_id),
        );
    };

    let sizing_request = match request.mode {
        InputMode::Price => {
            let (Some(entry_price), Some(stop_loss)) = (request.entry_price, request.stop_loss)
            else {
                return error_response(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "entry_price and stop_loss are required in price mode".to_string(),
                );
            };
            SizingRequest::from_prices(
                request.account_balance,
                request.risk_percentage,
                entry_price,
                stop_loss,
                instrument,
            )
        }
        InputMode::Pips => {
            let Some(pip_distance) = request.pip_distance else {
                return error_response(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "pip_distance is required in pips mode".to_string(),
                );
            };
            SizingRequest::from_pip_distance(
                request.account_balance,
                request.risk_percentage,
                pip_distance,
                request.side,
                instrument,
            )
        }
    };

    let result = LotSizer::new().calculate(&sizing_request);
    tracing::debug!(
        instrument = %instrument.id,
        lot_size = %result.lot_size,
        is_valid = result.is_valid,
        "calculated lot size"
    );

    Json(CalculateResponse::from(&result)).into_response()
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorResponse { error: message })).into_response()
}
