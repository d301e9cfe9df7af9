use std::time::Duration;

use axum::extract::{rejection::QueryRejection, Query, State};
use axum::response::Json;
use tracing::info;

use crate::error::ApiError;
use crate::models::requests::{SetDelayParams, SimulateErrorParams, SimulationCommand};
use crate::models::responses::{AdminResponse, StatusReport};
use crate::routes::AppState;
use crate::utils::time::now_rfc3339;

/// Accepts only values representable as a `Duration`.
fn check_seconds(name: &str, value: f64) -> Result<f64, ApiError> {
    Duration::try_from_secs_f64(value)
        .map(|_| value)
        .map_err(|_| {
            ApiError::InvalidRequest(format!(
                "{} must be a non-negative number of seconds",
                name
            ))
        })
}

pub async fn service_status(State(state): State<AppState>) -> Json<StatusReport> {
    Json(StatusReport {
        service_status: state.status.snapshot(),
        uptime_seconds: state.started_at.elapsed().as_secs_f64(),
        current_time: now_rfc3339(),
    })
}

pub async fn simulate_error(
    State(state): State<AppState>,
    params: Result<Query<SimulateErrorParams>, QueryRejection>,
) -> Result<Json<AdminResponse>, ApiError> {
    let Query(params) =
        params.map_err(|rejection| ApiError::InvalidRequest(rejection.body_text()))?;
    let duration = params
        .duration
        .map(|d| check_seconds("duration", d))
        .transpose()?;

    state.status.apply(params.error_type, duration);
    info!(command = ?params.error_type, ?duration, "Simulation updated");

    let message = match params.error_type {
        SimulationCommand::Reset => "All simulations reset".to_string(),
        other => format!("Error simulation '{}' activated", command_name(other)),
    };
    Ok(Json(AdminResponse { message }))
}

pub async fn set_delay(
    State(state): State<AppState>,
    params: Result<Query<SetDelayParams>, QueryRejection>,
) -> Result<Json<AdminResponse>, ApiError> {
    let Query(params) =
        params.map_err(|rejection| ApiError::InvalidRequest(rejection.body_text()))?;
    let seconds = check_seconds("delay_seconds", params.delay_seconds)?;

    state.status.set_delay(seconds);
    info!(seconds, "Response delay updated");

    Ok(Json(AdminResponse {
        message: format!("Response delay set to {} seconds", seconds),
    }))
}

fn command_name(command: SimulationCommand) -> &'static str {
    match command {
        SimulationCommand::Reset => "reset",
        SimulationCommand::ServiceUnavailable => "503",
        SimulationCommand::InternalError => "500",
        SimulationCommand::BadRequest => "400",
        SimulationCommand::Timeout => "timeout",
        SimulationCommand::Maintenance => "maintenance",
        SimulationCommand::Delay => "delay",
    }
}
