use thiserror::Error;

/// The narration collaborator could not produce a usable reply.
///
/// Every variant means the same thing to callers ("collaborator
/// unavailable") and is recovered with the fallback message. The variants
/// exist so the cause can be logged.
#[derive(Debug, Error)]
pub enum NarrationError {
    #[error("narration transport failed: {0}")]
    Transport(String),

    #[error("narration timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("narration endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed narration reply: {0}")]
    Malformed(String),

    #[error("narration reply was empty")]
    EmptyReply,

    #[error("narration is disabled")]
    Disabled,
}

/// Errors from configuration resolution.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable '{0}' is not set")]
    MissingEnv(String),

    #[error("invalid configuration value for '{key}': {message}")]
    Invalid { key: String, message: String },
}
