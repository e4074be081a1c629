use std::io::Error as IOError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NetworkEntry {
    #[error("Failed to bind port: {0}")]
    BindPortError(IOError),
    #[error("Failed to build HTTP client: {0}")]
    HttpClientError(String),
    #[error("Backend {0} is unreachable")]
    BackendUnreachable(String),
    #[error("Backend responded with status {0}")]
    BackendError(u16),
    #[error("Backend returned a body that is not JSON")]
    InvalidBackendBody,
    #[error("Backend not available")]
    BackendUnavailable,
    #[error("Model information unavailable, using local defaults")]
    ModelInfoUnavailable,
    #[error("Client sent a body that is not JSON")]
    InvalidClientBody,
}

impl From<NetworkEntry> for String {
    #[inline(always)]
    fn from(value: NetworkEntry) -> Self {
        value.to_string()
    }
}
