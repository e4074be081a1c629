use std::io::Error as IoError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SystemEntry {
    #[error("Online now")]
    Online,
    #[error("Initializing")]
    Initializing,
    #[error("Initialization completed")]
    InitializeComplete,
    #[error("Termination in process")]
    Terminating,
    #[error("Termination completed")]
    TerminateComplete,
    #[error("Invalid configuration")]
    InvalidConfig,
    #[error("Configuration not found, using defaults")]
    ConfigNotFound,
    #[error("Unable to parse configuration")]
    ConfigParseError,
    #[error("Configuration updated")]
    ConfigUpdated,
    #[error("Backend URL taken from environment: {0}")]
    BackendOverride(String),
    #[error("Forwarding detection requests to {0}")]
    BackendTarget(String),
    #[error("Web service ready")]
    WebReady,
    #[error("Web service panic: {0}")]
    WebPanic(IoError),
}

impl From<SystemEntry> for String {
    #[inline(always)]
    fn from(value: SystemEntry) -> Self {
        value.to_string()
    }
}
