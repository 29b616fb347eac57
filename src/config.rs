//! Theme picker configuration.
//!
//! Every field is optional in JSON; missing fields fall back to the stock
//! `theme-base-` palette, random selection, and `<body>` as the target.

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::palette::{DEFAULT_SUFFIXES, Palette, THEME_PREFIX};
use crate::selector::Strategy;

/// Which page-level element receives the theme class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetElement {
    #[default]
    Body,
    /// The document element (`<html>`).
    Html,
}

impl TargetElement {
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Html => "html",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub prefix: String,
    pub palette: Vec<String>,
    pub strategy: Strategy,
    pub target: TargetElement,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            prefix: THEME_PREFIX.to_owned(),
            palette: DEFAULT_SUFFIXES.iter().map(|s| (*s).to_owned()).collect(),
            strategy: Strategy::default(),
            target: TargetElement::default(),
        }
    }
}

impl ThemeConfig {
    /// Parse a JSON config object.
    ///
    /// # Errors
    ///
    /// Returns `Config` on malformed JSON or unknown fields.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Validated palette for this config.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPalette` if the configured suffix list is empty.
    pub fn palette(&self) -> Result<Palette, ThemeError> {
        Palette::new(self.prefix.clone(), self.palette.clone())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
