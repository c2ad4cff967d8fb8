//! Configuration loader for Explorer Nexus.
//!
//! Reads `config.toml` from the data directory (`~/.nexus/` in production)
//! and deserializes it into [`NexusConfig`]. Falls back to defaults when the
//! file is missing or malformed, then applies environment overrides.

use std::path::{Path, PathBuf};

use secrecy::SecretString;

use nexus_types::config::{LlmConfig, NexusConfig};
use nexus_types::error::ConfigError;

/// Env var that replaces `narration.endpoint`.
pub const NARRATION_URL_ENV: &str = "NEXUS_NARRATION_URL";

/// Resolve the data directory.
///
/// `NEXUS_DATA_DIR` wins, then `~/.nexus`, then `./.nexus`.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("NEXUS_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".nexus");
    }

    PathBuf::from(".nexus")
}

/// Load configuration from `{data_dir}/config.toml`.
///
/// - Missing file: [`NexusConfig::default()`].
/// - Unreadable or unparsable file: logs a warning and returns the default.
pub async fn load_config(data_dir: &Path) -> NexusConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return NexusConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return NexusConfig::default();
        }
    };

    match toml::from_str::<NexusConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            NexusConfig::default()
        }
    }
}

/// Apply process environment overrides.
pub fn apply_env_overrides(config: &mut NexusConfig) {
    apply_overrides_from(config, |key| std::env::var(key).ok());
}

/// Apply overrides from an arbitrary lookup (the environment in production).
pub fn apply_overrides_from(config: &mut NexusConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(url) = lookup(NARRATION_URL_ENV).filter(|v| !v.trim().is_empty()) {
        tracing::debug!(endpoint = %url, "Narration endpoint overridden from environment");
        config.narration.endpoint = url;
    }
}

/// Read the LLM API key from the env var named by `llm.api_key_env`.
pub fn resolve_api_key(llm: &LlmConfig) -> Result<SecretString, ConfigError> {
    resolve_api_key_from(llm, |key| std::env::var(key).ok())
}

pub fn resolve_api_key_from(
    llm: &LlmConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<SecretString, ConfigError> {
    if llm.api_key_env.trim().is_empty() {
        return Err(ConfigError::Invalid {
            key: "llm.api_key_env".to_string(),
            message: "must name an environment variable".to_string(),
        });
    }

    lookup(&llm.api_key_env)
        .filter(|v| !v.trim().is_empty())
        .map(SecretString::from)
        .ok_or_else(|| ConfigError::MissingEnv(llm.api_key_env.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexus_types::config::NarrationMode;
    use secrecy::ExposeSecret;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).await;
        assert_eq!(config.narration.mode, NarrationMode::Http);
        assert_eq!(config.narration.timeout_ms, 10_000);
    }

    #[tokio::test]
    async fn load_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            r#"
[narration]
mode = "llm"
fallback_message = "Signal lost."

[llm]
model = "gpt-4o"
temperature = 0.2

[server]
port = 8088
"#,
        )
        .await
        .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.narration.mode, NarrationMode::Llm);
        assert_eq!(config.narration.fallback_message, "Signal lost.");
        assert_eq!(config.llm.model, "gpt-4o");
        assert!((config.llm.temperature - 0.2).abs() < f64::EPSILON);
        assert_eq!(config.server.port, 8088);
    }

    #[tokio::test]
    async fn load_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.llm.model, "gpt-4");
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn overrides_replace_endpoint() {
        let mut config = NexusConfig::default();
        apply_overrides_from(&mut config, |key| {
            (key == NARRATION_URL_ENV).then(|| "http://nexus.internal/api/ai/chat".to_string())
        });
        assert_eq!(config.narration.endpoint, "http://nexus.internal/api/ai/chat");
    }

    #[test]
    fn blank_override_is_ignored() {
        let mut config = NexusConfig::default();
        apply_overrides_from(&mut config, |_| Some("  ".to_string()));
        assert_eq!(config.narration.endpoint, "http://127.0.0.1:3000/api/ai/chat");
    }

    #[test]
    fn api_key_resolves_from_named_variable() {
        let llm = LlmConfig {
            api_key_env: "NEXUS_TEST_KEY".to_string(),
            ..LlmConfig::default()
        };
        let key = resolve_api_key_from(&llm, |k| {
            (k == "NEXUS_TEST_KEY").then(|| "sk-test".to_string())
        })
        .unwrap();
        assert_eq!(key.expose_secret(), "sk-test");
    }

    #[test]
    fn api_key_missing_is_an_error() {
        let err = resolve_api_key_from(&LlmConfig::default(), |_| None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnv(ref name) if name == "OPENAI_API_KEY"));

        let err = resolve_api_key_from(&LlmConfig::default(), |_| Some(String::new())).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnv(_)));
    }

    #[test]
    fn api_key_env_must_be_named() {
        let llm = LlmConfig {
            api_key_env: String::new(),
            ..LlmConfig::default()
        };
        assert!(matches!(
            resolve_api_key_from(&llm, |_| Some("x".to_string())),
            Err(ConfigError::Invalid { .. })
        ));
    }
}
