use crate::utils::logging::*;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::{env, fs};
use tokio::sync::RwLock;
use url::Url;

const CONFIG_PATH: &str = "./gateway.toml";
const BACKEND_URL_VARIABLE: &str = "PYTHON_API_URL";

lazy_static! {
    static ref CONFIG: RwLock<Config> = RwLock::new(Config::new());
}

#[derive(Debug, Deserialize)]
struct ConfigTable {
    #[serde(rename = "Config")]
    config: Config,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub http_server_bind_port: u16, //port
    pub bind_retry_duration: u64, //seconds
    pub backend_url: String, //url
    pub request_timeout: u64, //seconds, 0 keeps the client default
    pub fallback_delay: u64, //milliseconds
    pub max_upload_size: usize, //bytes
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_server_bind_port: 3000,
            bind_retry_duration: 5,
            backend_url: "http://localhost:8000".to_string(),
            request_timeout: 0,
            fallback_delay: 2000,
            max_upload_size: 16 * 1024 * 1024,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        //A broken configuration file terminates the program.
        let mut config = match fs::read_to_string(CONFIG_PATH) {
            Ok(toml_string) => match Self::parse(&toml_string) {
                Ok(config) => config,
                Err(entry) => {
                    logging_console!(emergency_entry!("Config", SystemEntry::ConfigParseError, entry));
                    panic!("Unable to parse configuration file");
                }
            },
            Err(err) => {
                let entry = IOEntry::ReadFileError(CONFIG_PATH.to_string(), err);
                logging_console!(warning_entry!("Config", SystemEntry::ConfigNotFound, entry));
                Config::default()
            }
        };
        if let Ok(backend_url) = env::var(BACKEND_URL_VARIABLE) {
            logging_console!(information_entry!("Config", SystemEntry::BackendOverride(backend_url.clone())));
            config.backend_url = backend_url;
        }
        if !Self::validate(&config) {
            logging_console!(emergency_entry!("Config", SystemEntry::InvalidConfig));
            panic!("Invalid configuration file");
        }
        config
    }

    pub fn parse(toml_string: &str) -> Result<Config, IOEntry> {
        toml::from_str::<ConfigTable>(toml_string)
            .map(|config_table| config_table.config)
            .map_err(IOEntry::TomlDeserializeError)
    }

    pub async fn now() -> Config {
        CONFIG.read().await.clone()
    }

    pub async fn update(config: Config) {
        *CONFIG.write().await = config
    }

    pub fn validate(config: &Config) -> bool {
        Config::validate_port(config.http_server_bind_port)
            && Config::validate_second(config.bind_retry_duration)
            && Config::validate_url(&config.backend_url)
            && Config::validate_second(config.request_timeout)
            && Config::validate_mini_second(config.fallback_delay)
            && Config::validate_upload_size(config.max_upload_size)
    }

    fn validate_port(port: u16) -> bool {
        port > 0
    }

    fn validate_mini_second(second: u64) -> bool {
        second <= 60000
    }

    fn validate_second(second: u64) -> bool {
        second <= 3600
    }

    fn validate_url(url: &str) -> bool {
        Url::parse(url)
            .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
            .unwrap_or(false)
    }

    fn validate_upload_size(size: usize) -> bool {
        size > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(Config::validate(&config));
        assert_eq!(config.backend_url, "http://localhost:8000");
    }

    #[test]
    fn partial_table_keeps_defaults() {
        let config = Config::parse("[Config]\nbackend_url = \"http://inference:9000\"\nfallback_delay = 0\n").unwrap();
        assert_eq!(config.backend_url, "http://inference:9000");
        assert_eq!(config.fallback_delay, 0);
        assert_eq!(config.http_server_bind_port, 3000);
    }

    #[test]
    fn missing_table_is_rejected() {
        assert!(matches!(Config::parse("backend_url = \"http://inference:9000\""), Err(IOEntry::TomlDeserializeError(_))));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let mut config = Config::default();
        config.backend_url = "ftp://inference".to_string();
        assert!(!Config::validate(&config));
        config.backend_url = "not a url".to_string();
        assert!(!Config::validate(&config));

        let mut config = Config::default();
        config.max_upload_size = 0;
        assert!(!Config::validate(&config));

        let mut config = Config::default();
        config.fallback_delay = 120_000;
        assert!(!Config::validate(&config));
    }
}
