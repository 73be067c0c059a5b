use thiserror::Error;

/// Errors raised while reading configuration from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A variable is set but its value cannot be parsed.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// Name of the environment variable
        var: String,
        /// Why the value was rejected
        reason: String,
    },
}
