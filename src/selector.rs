//! Next-theme selection.
//!
//! Selection is a pure function of the palette, the current class value and
//! an injected random source. The current class only matters to `Cycle`; for
//! `Random` it is carried through for the diagnostic trace.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::palette::Palette;

/// How the next palette slot is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Uniform draw over the whole palette.
    #[default]
    Random,
    /// Slot after the current one, wrapping; slot 0 if the current class is foreign.
    Cycle,
}

/// One selection: previous class, next class, and the slot drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick {
    pub from: String,
    pub to: String,
    pub index: usize,
}

/// Choose the next theme for an element currently carrying `current`.
pub fn pick<R: Rng + ?Sized>(
    palette: &Palette,
    strategy: Strategy,
    current: &str,
    rng: &mut R,
) -> Pick {
    let index = match strategy {
        Strategy::Random => rng.random_range(0..palette.len()),
        Strategy::Cycle => palette
            .index_of_class(current)
            .map_or(0, |i| (i + 1) % palette.len()),
    };
    let to = palette.class_for_index(index);
    log::debug!("{current:?} to {to:?}");
    log::debug!("random = {index}");
    Pick {
        from: current.to_owned(),
        to,
        index,
    }
}

/// Uniformly random theme class for an element currently carrying `current`.
///
/// Always `prefix + suffix` for some palette entry.
pub fn select_next_theme_class<R: Rng + ?Sized>(
    palette: &Palette,
    current: &str,
    rng: &mut R,
) -> String {
    pick(palette, Strategy::Random, current, rng).to
}

#[cfg(test)]
#[path = "selector_test.rs"]
mod selector_test;
