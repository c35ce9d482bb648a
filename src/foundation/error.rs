/// Convenience result type used across scrollfx.
pub type FxResult<T> = Result<T, FxError>;

/// Top-level error taxonomy used by controller APIs.
///
/// Environment capability absence (no visibility observation available) is deliberately
/// not represented here: affected elements simply never reveal.
#[derive(thiserror::Error, Debug)]
pub enum FxError {
    /// Invalid configuration or mount parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Mount/unmount bookkeeping violations, such as a duplicate element key.
    #[error("lifecycle error: {0}")]
    Lifecycle(String),

    /// Errors when serializing or deserializing configs, scenarios or snapshots.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FxError {
    /// Build a [`FxError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FxError::Lifecycle`] value.
    pub fn lifecycle(msg: impl Into<String>) -> Self {
        Self::Lifecycle(msg.into())
    }

    /// Build a [`FxError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for FxError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
