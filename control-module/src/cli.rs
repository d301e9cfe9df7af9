use thiserror::Error;

pub const USAGE: &str = "Usage: control-module [--continuous | --simulate <error_type> [duration] | --delay <seconds>]";

const ERROR_TYPES: [&str; 7] = ["reset", "503", "500", "400", "timeout", "maintenance", "delay"];

#[derive(Error, Debug, PartialEq)]
pub enum UsageError {
    #[error("unknown argument: {0}")]
    UnknownArgument(String),
    #[error("{0} needs a value")]
    MissingValue(&'static str),
    #[error("unknown error type: {0}")]
    UnknownErrorType(String),
    #[error("invalid number of seconds: {0}")]
    InvalidSeconds(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Send the sample readings through both services.
    Run,
    /// Poll both health endpoints forever.
    Continuous,
    Simulate {
        error_type: String,
        duration: Option<f64>,
    },
    Delay(f64),
}

fn parse_seconds(raw: &str) -> Result<f64, UsageError> {
    raw.parse::<f64>()
        .ok()
        .filter(|s| s.is_finite() && *s >= 0.0)
        .ok_or_else(|| UsageError::InvalidSeconds(raw.to_string()))
}

/// Parses the arguments after the program name.
pub fn parse_command(args: &[String]) -> Result<Command, UsageError> {
    match args.first().map(String::as_str) {
        None => Ok(Command::Run),
        Some("--continuous") => Ok(Command::Continuous),
        Some("--simulate") => {
            let error_type = args
                .get(1)
                .ok_or(UsageError::MissingValue("--simulate"))?
                .to_string();
            if !ERROR_TYPES.contains(&error_type.as_str()) {
                return Err(UsageError::UnknownErrorType(error_type));
            }
            let duration = args.get(2).map(|raw| parse_seconds(raw)).transpose()?;
            Ok(Command::Simulate {
                error_type,
                duration,
            })
        }
        Some("--delay") => {
            let raw = args.get(1).ok_or(UsageError::MissingValue("--delay"))?;
            Ok(Command::Delay(parse_seconds(raw)?))
        }
        Some(other) => Err(UsageError::UnknownArgument(other.to_string())),
    }
}
