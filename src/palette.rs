//! Theme palette and class-name derivation.
//!
//! DESIGN
//! ======
//! A palette is an ordered list of base16 slot suffixes plus the class prefix
//! they are appended to. It is validated once at construction, so every
//! later lookup only has to handle an out-of-range index, which resolves to
//! the empty class (no theme) rather than an error.

use crate::error::ThemeError;

/// Prefix shared by every theme class.
pub const THEME_PREFIX: &str = "theme-base-";

/// Base16 accent slots: red, orange, green, cyan, blue, magenta, brown.
pub const DEFAULT_SUFFIXES: [&str; 7] = ["08", "09", "0b", "0c", "0d", "0e", "0f"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    prefix: String,
    suffixes: Vec<String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            prefix: THEME_PREFIX.to_owned(),
            suffixes: DEFAULT_SUFFIXES.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

impl Palette {
    /// Build a palette from a prefix and an ordered suffix list.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPalette` if `suffixes` is empty.
    pub fn new(prefix: impl Into<String>, suffixes: Vec<String>) -> Result<Self, ThemeError> {
        if suffixes.is_empty() {
            return Err(ThemeError::EmptyPalette);
        }
        Ok(Self {
            prefix: prefix.into(),
            suffixes,
        })
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.suffixes.len()
    }

    /// Always `false` for a constructed palette.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    /// Class name for palette slot `index`, or `""` when out of range.
    #[must_use]
    pub fn class_for_index(&self, index: usize) -> String {
        match self.suffixes.get(index) {
            Some(suffix) => format!("{}{suffix}", self.prefix),
            None => String::new(),
        }
    }

    /// Palette slot of a full theme class, if it is one of ours.
    #[must_use]
    pub fn index_of_class(&self, class: &str) -> Option<usize> {
        let suffix = class.trim().strip_prefix(self.prefix.as_str())?;
        self.suffixes.iter().position(|s| s == suffix)
    }

    /// All theme classes in palette order.
    pub fn classes(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.len()).map(|i| self.class_for_index(i))
    }
}

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;
