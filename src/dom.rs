//! Browser wiring: `web-sys` element binding and the page-load hook.
//!
//! SYSTEM CONTEXT
//! ==============
//! The wasm start function reads an optional JSON config embedded in the page,
//! then registers a one-shot `load` listener on `window`. When the page has
//! already finished loading by the time the module starts, the theme is
//! applied immediately instead. `update_theme` is exported so the page can
//! re-roll manually; each call overwrites the previous class.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::config::{TargetElement, ThemeConfig};
use crate::error::ThemeError;
use crate::selector::Pick;
use crate::target::{ClassTarget, apply_theme};

/// Id of the optional `<script type="application/json">` config element.
pub const CONFIG_ELEMENT_ID: &str = "theme-picker-config";

impl ClassTarget for Element {
    fn class_name(&self) -> String {
        Element::class_name(self)
    }

    fn set_class_name(&mut self, value: &str) {
        Element::set_class_name(self, value);
    }
}

fn document() -> Result<Document, ThemeError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or(ThemeError::TargetMissing("document"))
}

/// Look up the element a config targets.
///
/// # Errors
///
/// Returns `TargetMissing` if the page has no such element yet.
pub fn resolve_target(document: &Document, target: TargetElement) -> Result<Element, ThemeError> {
    let element = match target {
        TargetElement::Body => document.body().map(Element::from),
        TargetElement::Html => document.document_element(),
    };
    element.ok_or(ThemeError::TargetMissing(target.tag()))
}

/// Config embedded in the page, or defaults when absent or malformed.
#[must_use]
pub fn read_config(document: &Document) -> ThemeConfig {
    let Some(raw) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return ThemeConfig::default();
    };
    match ThemeConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{}: {e}; using default theme config", e.error_code());
            ThemeConfig::default()
        }
    }
}

// `Math.random` is the only entropy source available without an OS backend.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn seeded_rng() -> SmallRng {
    let seed = (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64;
    SmallRng::seed_from_u64(seed)
}

/// Pick a theme and write it to the configured element.
///
/// # Errors
///
/// Returns `EmptyPalette` for an empty configured palette and `TargetMissing`
/// when the document or target element does not exist.
pub fn apply_to_document(config: &ThemeConfig) -> Result<Pick, ThemeError> {
    let palette = config.palette()?;
    let document = document()?;
    let mut element = resolve_target(&document, config.target)?;
    Ok(apply_theme(
        &mut element,
        &palette,
        config.strategy,
        &mut seeded_rng(),
    ))
}

fn apply_or_warn(config: &ThemeConfig) {
    if let Err(e) = apply_to_document(config) {
        log::warn!("{}: theme not applied: {e}", e.error_code());
    }
}

/// Apply the theme once the page has loaded.
///
/// # Errors
///
/// Returns `TargetMissing` outside a browser window and `Dom` if the listener
/// cannot be registered.
pub fn install(config: ThemeConfig) -> Result<(), ThemeError> {
    let window = web_sys::window().ok_or(ThemeError::TargetMissing("window"))?;
    let loaded = window
        .document()
        .is_some_and(|doc| doc.ready_state() == "complete");
    if loaded {
        apply_or_warn(&config);
        return Ok(());
    }

    let on_load = Closure::once(move || apply_or_warn(&config));
    window
        .add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())
        .map_err(|e| ThemeError::Dom(format!("{e:?}")))?;
    // The listener fires at most once; the JS side owns it from here.
    on_load.forget();
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Errors only when a logger is already set.
    console_log::init_with_level(log::Level::Debug).unwrap_or_default();

    let config = match document() {
        Ok(doc) => read_config(&doc),
        Err(_) => ThemeConfig::default(),
    };
    if let Err(e) = install(config) {
        log::warn!("{}: theme picker not installed: {e}", e.error_code());
    }
}

/// Re-roll the theme now; returns the class that was applied.
///
/// # Errors
///
/// Propagates `apply_to_document` failures as JS errors.
#[wasm_bindgen(js_name = updateTheme)]
pub fn update_theme() -> Result<String, JsError> {
    let config = read_config(&document()?);
    let applied = apply_to_document(&config)?;
    Ok(applied.to)
}
