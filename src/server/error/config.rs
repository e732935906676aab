use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// Either `DATABASE_URL` or the `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_NAME` group must be
    /// defined.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value cannot be used.
    #[error("Invalid value '{value}' for environment variable {name}: {reason}")]
    InvalidEnvVar {
        /// Name of the offending variable
        name: String,
        /// The raw value that was rejected
        value: String,
        /// Why the value was rejected
        reason: String,
    },
}
