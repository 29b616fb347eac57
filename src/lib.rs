//! Random base16 theme picker for static pages.
//!
//! On page load the picker draws one entry from a fixed palette of theme
//! suffixes, derives a `theme-base-XX` class from it, and makes that class the
//! sole class of the page's `<body>`. The selection logic is pure and takes its
//! random source as a parameter; the browser wiring lives behind the `browser`
//! feature so everything else builds and tests natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`palette`] | Fixed suffix list and class-name derivation |
//! | [`selector`] | Random / cycle selection of the next theme class |
//! | [`target`] | The element being themed and the apply operation |
//! | [`config`] | JSON-configurable prefix, palette, strategy and target |
//! | [`error`] | Crate error type |
//! | `dom` | `web-sys` bindings and the page-load hook (`browser` only) |

pub mod config;
pub mod error;
pub mod palette;
pub mod selector;
pub mod target;

#[cfg(feature = "browser")]
pub mod dom;

pub use config::{TargetElement, ThemeConfig};
pub use error::ThemeError;
pub use palette::{DEFAULT_SUFFIXES, Palette, THEME_PREFIX};
pub use selector::{Pick, Strategy, pick, select_next_theme_class};
pub use target::{ClassTarget, MemoryTarget, apply_theme};
