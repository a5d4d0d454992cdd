use thiserror::Error;

/// Why configuration could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or `HAUL_*` variable could not be parsed into the config
    /// shape. Boxed because `figment::Error` is large.
    #[error("failed to read configuration: {0}")]
    Figment(#[from] Box<figment::Error>),

    /// A value parsed but is outside its allowed range.
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        Self::Figment(Box::new(error))
    }
}
