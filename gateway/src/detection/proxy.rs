use crate::utils::config::Config;
use crate::utils::logging::*;
use common::detection::ModelInfo;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use std::time::Duration;

const INTERNAL_ERROR: &str = "Internal server error";
const BACKEND_UNAVAILABLE: &str = "Backend not available";

/// Status and JSON body relayed back to the caller of the proxy.
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyReply {
    pub status: u16,
    pub body: Value,
}

impl ProxyReply {
    pub fn new(status: u16, body: Value) -> Self {
        Self {
            status,
            body,
        }
    }

    pub fn error<T: Into<String>>(status: u16, message: T) -> Self {
        Self::new(status, json!({ "error": message.into() }))
    }

    pub fn internal_error() -> Self {
        Self::error(500, INTERNAL_ERROR)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn error_message(&self) -> String {
        match self.body.get("error") {
            Some(Value::String(message)) => message.clone(),
            _ => self.body.to_string(),
        }
    }
}

/// Stateless pass-through to the inference backend.
///
/// Backend failures are relayed, never replaced by synthetic data.
pub struct Proxy {
    client: Client,
    backend_base: String,
}

impl Proxy {
    pub fn new<T: Into<String>>(backend_base: T, timeout: Duration) -> Result<Self, NetworkEntry> {
        let mut builder = Client::builder();
        if !timeout.is_zero() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()
            .map_err(|err| NetworkEntry::HttpClientError(err.to_string()))?;
        let backend_base = backend_base.into().trim_end_matches('/').to_string();
        Ok(Self {
            client,
            backend_base,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, NetworkEntry> {
        Self::new(config.backend_url.clone(), Duration::from_secs(config.request_timeout))
    }

    pub fn backend_base(&self) -> &str {
        &self.backend_base
    }

    pub async fn forward_detect(&self, body: &Value) -> ProxyReply {
        let url = format!("{}/detect", self.backend_base);
        let response = match self.client.post(&url).json(body).send().await {
            Ok(response) => response,
            Err(err) => {
                logging_error!(NetworkEntry::BackendUnreachable(url), format!("Err: {err}"));
                return ProxyReply::internal_error();
            }
        };
        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            logging_error!(NetworkEntry::BackendError(status.as_u16()), error_text);
            return ProxyReply::error(status.as_u16(), backend_error_message(status));
        }
        match response.json::<Value>().await {
            Ok(body) => ProxyReply::new(status.as_u16(), body),
            Err(err) => {
                logging_error!(NetworkEntry::InvalidBackendBody, format!("Err: {err}"));
                ProxyReply::internal_error()
            }
        }
    }

    pub async fn forward_health(&self) -> ProxyReply {
        match self.get_json("health").await {
            Ok(body) => ProxyReply::new(200, body),
            Err(entry) => {
                logging_warning!(NetworkEntry::BackendUnavailable, entry);
                ProxyReply::error(503, BACKEND_UNAVAILABLE)
            }
        }
    }

    pub async fn forward_info(&self) -> ProxyReply {
        match self.get_json("info").await {
            Ok(body) => ProxyReply::new(200, body),
            Err(entry) => {
                logging_warning!(NetworkEntry::ModelInfoUnavailable, entry);
                match serde_json::to_value(ModelInfo::unknown()) {
                    Ok(body) => ProxyReply::new(200, body),
                    Err(err) => {
                        logging_error!(IOEntry::SerdeSerializeError(err));
                        ProxyReply::internal_error()
                    }
                }
            }
        }
    }

    async fn get_json(&self, route: &str) -> Result<Value, NetworkEntry> {
        let url = format!("{}/{}", self.backend_base, route);
        let response = self.client.get(&url).send().await
            .map_err(|_| NetworkEntry::BackendUnreachable(url))?;
        let status = response.status();
        if !status.is_success() {
            return Err(NetworkEntry::BackendError(status.as_u16()));
        }
        response.json::<Value>().await
            .map_err(|_| NetworkEntry::InvalidBackendBody)
    }
}

fn backend_error_message(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("Backend error: {} {}", status.as_u16(), reason),
        None => format!("Backend error: {}", status.as_u16()),
    }
}
