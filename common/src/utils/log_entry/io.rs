use serde_json::error::Error as SerdeJsonError;
use std::io::Error as IoError;
use thiserror::Error;
use toml::de::Error as TomlError;

#[derive(Error, Debug)]
pub enum IOEntry {
    #[error("Failed to read file {0}: {1}")]
    ReadFileError(String, IoError),
    #[error("Failed to deserialize TOML: {0}")]
    TomlDeserializeError(TomlError),
    #[error("Failed to serialize data: {0}")]
    SerdeSerializeError(SerdeJsonError),
}

impl From<IOEntry> for String {
    #[inline(always)]
    fn from(value: IOEntry) -> Self {
        value.to_string()
    }
}
