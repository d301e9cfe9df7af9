use std::time::Duration;

use tokio::time::sleep;
use tracing::{info, warn};

use crate::error::ApiError;
use crate::models::status::{ErrorSimulation, ServiceStatus};

/// Applies the configured stalls: the simulated timeout first, then the response delay.
async fn stall(status: &ServiceStatus, simulated_timeout: Duration) {
    if status.is_simulating(ErrorSimulation::Timeout) {
        warn!(
            seconds = simulated_timeout.as_secs_f64(),
            "Simulating timeout"
        );
        sleep(simulated_timeout).await;
    }

    match Duration::try_from_secs_f64(status.response_delay) {
        Ok(delay) if !delay.is_zero() => {
            info!(seconds = status.response_delay, "Applying response delay");
            sleep(delay).await;
        }
        Ok(_) => {}
        Err(e) => warn!(seconds = status.response_delay, "Ignoring response delay: {}", e),
    }
}

/// Flags obeyed by the health check.
pub async fn check_health(
    status: &ServiceStatus,
    simulated_timeout: Duration,
) -> Result<(), ApiError> {
    if status.is_simulating(ErrorSimulation::ServiceUnavailable) {
        return Err(ApiError::ServiceUnavailable);
    }

    stall(status, simulated_timeout).await;

    if status.maintenance_mode {
        return Err(ApiError::Maintenance);
    }
    if !status.healthy {
        return Err(ApiError::Unhealthy);
    }
    Ok(())
}

/// Flags obeyed by analysis generation.
pub async fn check_generate(
    status: &ServiceStatus,
    simulated_timeout: Duration,
) -> Result<(), ApiError> {
    match status.error_simulation {
        Some(ErrorSimulation::BadRequest) => {
            return Err(ApiError::missing_fields(&["reading_content"]))
        }
        Some(ErrorSimulation::InternalError) => return Err(ApiError::SimulatedInternal),
        Some(ErrorSimulation::ServiceUnavailable) => return Err(ApiError::ServiceUnavailable),
        _ => {}
    }

    if status.maintenance_mode {
        return Err(ApiError::Maintenance);
    }

    stall(status, simulated_timeout).await;
    Ok(())
}
