// Domain-level errors for mover configuration and workers.

/// Reasons a simulation configuration is rejected before start.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    EmptyPopulation,
    NegativeHeadingChange,
    HeadingChangeTooLarge,
    InvalidVelocityChange,
    InvalidStartVelocity,
    InvalidBounds,
    ZeroTickInterval,
}

/// Reasons a single mover worker stops on its own.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkerError {
    CreateFailed(String),
    UpdateFailed(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            ConfigError::EmptyPopulation => "population must be at least 1",
            ConfigError::NegativeHeadingChange => "max heading change must not be negative",
            ConfigError::HeadingChangeTooLarge => {
                "max heading change must not exceed 360 degrees"
            }
            ConfigError::InvalidVelocityChange => {
                "max velocity change must be finite and not negative"
            }
            ConfigError::InvalidStartVelocity => "start velocity must be finite",
            ConfigError::InvalidBounds => "bounds must be finite with min below max on both axes",
            ConfigError::ZeroTickInterval => "tick interval must be greater than zero",
        };
        f.write_str(message)
    }
}

impl std::fmt::Display for WorkerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkerError::CreateFailed(e) => write!(f, "create failed: {e}"),
            WorkerError::UpdateFailed(e) => write!(f, "update failed: {e}"),
        }
    }
}
