use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

const ENV_PREFIX: &str = "LOQA_SESSIONS";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub transcription: TranscriptionConfig,
    #[serde(default)]
    pub nats: NatsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_service_name")]
    pub name: String,
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionConfig {
    /// Artificial latency of the simulated recognizer
    #[serde(default = "default_simulated_delay_ms")]
    pub simulated_delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NatsConfig {
    /// Transcript events are published only when this is set
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "default_subject")]
    pub subject: String,
}

fn default_service_name() -> String {
    "loqa-sessions".to_string()
}

fn default_bind() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_simulated_delay_ms() -> u64 {
    500
}

fn default_subject() -> String {
    "stt.text.final".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: default_service_name(),
            http: HttpConfig::default(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
        }
    }
}

impl Default for TranscriptionConfig {
    fn default() -> Self {
        Self {
            simulated_delay_ms: default_simulated_delay_ms(),
        }
    }
}

impl Default for NatsConfig {
    fn default() -> Self {
        Self {
            url: None,
            subject: default_subject(),
        }
    }
}

impl TranscriptionConfig {
    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }
}

impl Config {
    /// Load from an optional config file, then `LOQA_SESSIONS_*` environment overrides
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .with_context(|| format!("Failed to read config from {}", path))?;

        settings
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Socket address string for the HTTP listener
    pub fn http_addr(&self) -> String {
        format!("{}:{}", self.service.http.bind, self.service.http.port)
    }
}
