//! Error type shared by configuration, selection and DOM wiring.

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("palette has no entries")]
    EmptyPalette,
    #[error("invalid theme config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("target element not found: {0}")]
    TargetMissing(&'static str),
    #[error("dom error: {0}")]
    Dom(String),
}

impl ThemeError {
    /// Stable machine-readable code for log lines.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyPalette => "E_EMPTY_PALETTE",
            Self::Config(_) => "E_CONFIG",
            Self::TargetMissing(_) => "E_TARGET_MISSING",
            Self::Dom(_) => "E_DOM",
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
