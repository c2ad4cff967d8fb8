//! Configuration types for Explorer Nexus.
//!
//! `NexusConfig` represents the `config.toml` in the data directory. Every
//! field has a default so an empty or partial file is valid.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::narration::FALLBACK_MESSAGE;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NexusConfig {
    #[serde(default)]
    pub narration: NarrationConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// How the chat loop obtains narrations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NarrationMode {
    /// POST to a narration endpoint (another `nexus serve`, or the web app route).
    #[default]
    Http,
    /// Call the LLM provider in-process.
    Llm,
    /// Never narrate; every reply is the fallback message.
    Offline,
}

impl fmt::Display for NarrationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NarrationMode::Http => write!(f, "http"),
            NarrationMode::Llm => write!(f, "llm"),
            NarrationMode::Offline => write!(f, "offline"),
        }
    }
}

impl FromStr for NarrationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "http" => Ok(NarrationMode::Http),
            "llm" => Ok(NarrationMode::Llm),
            "offline" => Ok(NarrationMode::Offline),
            other => Err(format!("invalid narration mode: '{other}'")),
        }
    }
}

/// Narration collaborator settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrationConfig {
    #[serde(default)]
    pub mode: NarrationMode,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Upper bound on a single narration round trip.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_fallback_message")]
    pub fallback_message: String,
}

fn default_endpoint() -> String {
    "http://127.0.0.1:3000/api/ai/chat".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_fallback_message() -> String {
    FALLBACK_MESSAGE.to_string()
}

impl Default for NarrationConfig {
    fn default() -> Self {
        Self {
            mode: NarrationMode::default(),
            endpoint: default_endpoint(),
            timeout_ms: default_timeout_ms(),
            fallback_message: default_fallback_message(),
        }
    }
}

/// LLM provider settings used by the narration server and `llm` mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Name of the environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_provider() -> String {
    "openai".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4".to_string()
}

fn default_temperature() -> f64 {
    0.8
}

fn default_max_tokens() -> u32 {
    200
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            api_key_env: default_api_key_env(),
        }
    }
}

/// Bind address for `nexus serve`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}
