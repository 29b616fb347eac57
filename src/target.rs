//! The themed element and the apply operation.
//!
//! TRADE-OFFS
//! ==========
//! Applying a theme replaces the element's whole class attribute rather than
//! editing its class list. Other classes on the element are dropped, but a
//! second apply can never leave two theme classes behind.

use rand::Rng;

use crate::palette::Palette;
use crate::selector::{Pick, Strategy, pick};

/// An element whose class attribute can be read and overwritten.
pub trait ClassTarget {
    fn class_name(&self) -> String;
    fn set_class_name(&mut self, value: &str);
}

/// In-process stand-in for a page element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryTarget {
    class_name: String,
}

impl MemoryTarget {
    #[must_use]
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
        }
    }
}

impl ClassTarget for MemoryTarget {
    fn class_name(&self) -> String {
        self.class_name.clone()
    }

    fn set_class_name(&mut self, value: &str) {
        value.clone_into(&mut self.class_name);
    }
}

/// Pick the next theme and make it the target's only class.
pub fn apply_theme<T, R>(target: &mut T, palette: &Palette, strategy: Strategy, rng: &mut R) -> Pick
where
    T: ClassTarget + ?Sized,
    R: Rng + ?Sized,
{
    let current = target.class_name();
    let next = pick(palette, strategy, &current, rng);
    target.set_class_name(&next.to);
    log::info!("changed theme to {:?}", next.to);
    next
}

#[cfg(test)]
#[path = "target_test.rs"]
mod target_test;
