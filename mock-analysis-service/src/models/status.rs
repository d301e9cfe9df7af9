use serde::Serialize;

use super::requests::SimulationCommand;

/// Delay applied by the `delay` command when no positive duration is given.
pub const DEFAULT_SIMULATED_DELAY_SECS: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorSimulation {
    #[serde(rename = "400")]
    BadRequest,
    #[serde(rename = "500")]
    InternalError,
    #[serde(rename = "503")]
    ServiceUnavailable,
    #[serde(rename = "timeout")]
    Timeout,
}

/// Test-control flags consulted by every consuming endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceStatus {
    pub healthy: bool,
    pub maintenance_mode: bool,
    pub error_simulation: Option<ErrorSimulation>,
    /// Seconds added to every consuming request.
    pub response_delay: f64,
    pub request_count: u64,
    pub error_count: u64,
}

impl Default for ServiceStatus {
    fn default() -> Self {
        Self {
            healthy: true,
            maintenance_mode: false,
            error_simulation: None,
            response_delay: 0.0,
            request_count: 0,
            error_count: 0,
        }
    }
}

impl ServiceStatus {
    /// Clears every simulation. Counters survive a reset.
    pub fn reset(&mut self) {
        self.error_simulation = None;
        self.healthy = true;
        self.maintenance_mode = false;
        self.response_delay = 0.0;
    }

    pub fn apply(&mut self, command: SimulationCommand, duration: Option<f64>) {
        match command {
            SimulationCommand::Reset => self.reset(),
            SimulationCommand::ServiceUnavailable => {
                self.error_simulation = Some(ErrorSimulation::ServiceUnavailable);
                self.healthy = false;
            }
            SimulationCommand::InternalError => {
                self.error_simulation = Some(ErrorSimulation::InternalError);
            }
            SimulationCommand::BadRequest => {
                self.error_simulation = Some(ErrorSimulation::BadRequest);
            }
            SimulationCommand::Timeout => {
                self.error_simulation = Some(ErrorSimulation::Timeout);
            }
            SimulationCommand::Maintenance => self.maintenance_mode = true,
            SimulationCommand::Delay => {
                self.response_delay = duration
                    .filter(|seconds| *seconds > 0.0)
                    .unwrap_or(DEFAULT_SIMULATED_DELAY_SECS);
            }
        }
    }

    pub fn is_simulating(&self, kind: ErrorSimulation) -> bool {
        self.error_simulation == Some(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_healthy() {
        let status = ServiceStatus::default();
        assert!(status.healthy);
        assert!(!status.maintenance_mode);
        assert_eq!(status.error_simulation, None);
        assert_eq!(status.response_delay, 0.0);
    }

    #[test]
    fn simulated_503_marks_unhealthy() {
        let mut status = ServiceStatus::default();
        status.apply(SimulationCommand::ServiceUnavailable, None);
        assert!(!status.healthy);
        assert!(status.is_simulating(ErrorSimulation::ServiceUnavailable));
    }

    #[test]
    fn later_error_kind_replaces_earlier_one() {
        let mut status = ServiceStatus::default();
        status.apply(SimulationCommand::BadRequest, None);
        status.apply(SimulationCommand::InternalError, None);
        assert_eq!(status.error_simulation, Some(ErrorSimulation::InternalError));
    }

    #[test]
    fn delay_uses_duration_or_default() {
        let mut status = ServiceStatus::default();
        status.apply(SimulationCommand::Delay, None);
        assert_eq!(status.response_delay, DEFAULT_SIMULATED_DELAY_SECS);
        status.apply(SimulationCommand::Delay, Some(5.0));
        assert_eq!(status.response_delay, 5.0);
    }

    #[test]
    fn zero_duration_delay_falls_back_to_default() {
        let mut status = ServiceStatus::default();
        status.apply(SimulationCommand::Delay, Some(0.0));
        assert_eq!(status.response_delay, DEFAULT_SIMULATED_DELAY_SECS);
    }

    #[test]
    fn reset_clears_flags_but_keeps_counters() {
        let mut status = ServiceStatus {
            request_count: 7,
            error_count: 3,
            ..ServiceStatus::default()
        };
        status.apply(SimulationCommand::ServiceUnavailable, None);
        status.apply(SimulationCommand::Maintenance, None);
        status.apply(SimulationCommand::Delay, Some(1.5));

        status.apply(SimulationCommand::Reset, None);

        assert!(status.healthy);
        assert!(!status.maintenance_mode);
        assert_eq!(status.error_simulation, None);
        assert_eq!(status.response_delay, 0.0);
        assert_eq!(status.request_count, 7);
        assert_eq!(status.error_count, 3);
    }

    #[test]
    fn serializes_simulation_as_status_code() {
        let mut status = ServiceStatus::default();
        status.apply(SimulationCommand::ServiceUnavailable, None);
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["error_simulation"], "503");
        assert_eq!(json["healthy"], false);
    }
}
