//! WASM entry point for the site UI enhancements.
//!
//! Loading the module wires the page with the default document contract as
//! soon as the DOM is parsed. Pages with different markup call
//! `initSiteUi(config)` with a partial config object to re-wire.
//!
//! ```js
//! import init, { initSiteUi, loadComponent } from "./site_ui_js.js";
//! await init();
//! await loadComponent("header", "header.html");
//! ```

mod logging;

use std::cell::RefCell;

use site_ui_browser::{PlatformError, SiteUi, UiConfig, on_document_ready};
use wasm_bindgen::prelude::*;

thread_local! {
    static SITE: RefCell<Option<SiteUi>> = const { RefCell::new(None) };
}

/// Initialize panic hook and logging, then wire the page once it is parsed.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logging::init();
    on_document_ready(|| {
        if let Err(e) = install(UiConfig::default()) {
            tracing::warn!(error = %e, "site ui not initialized");
        }
    });
}

/// Replace the current wiring with one built from `config`.
fn install(config: UiConfig) -> Result<(), PlatformError> {
    // Tear down first so no listener is attached twice.
    destroy_site_ui();

    let site = SiteUi::init(config)?;
    SITE.with(|slot| *slot.borrow_mut() = Some(site));
    Ok(())
}

/// Parse a partial JS config object. `undefined` and `null` give defaults.
pub fn parse_config(config: JsValue) -> Result<UiConfig, JsError> {
    if config.is_undefined() || config.is_null() {
        return Ok(UiConfig::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsError::new(&format!("Invalid site ui config: {}", e)))
}

/// Re-wire the page with a custom document contract.
#[wasm_bindgen(js_name = initSiteUi)]
pub fn init_site_ui(config: JsValue) -> Result<(), JsError> {
    let config = parse_config(config)?;
    install(config).map_err(|e| JsError::new(&e.to_string()))
}

/// Detach every listener, observer and timer installed on the page.
#[wasm_bindgen(js_name = destroySiteUi)]
pub fn destroy_site_ui() {
    let previous = SITE.with(|slot| slot.borrow_mut().take());
    if previous.is_some() {
        tracing::debug!("site ui torn down");
    }
}

/// Re-wire the header controllers of the installed page. Returns `false`
/// when nothing is installed yet.
pub fn rewire_header() -> bool {
    SITE.with(|slot| match slot.borrow_mut().as_mut() {
        Some(site) => {
            site.rewire_header();
            true
        }
        None => {
            tracing::warn!("header loaded before site ui was initialized, not rewiring");
            false
        }
    })
}

/// Load a markup fragment into the element with id `id`.
///
/// Failures are logged to the console and leave the element untouched.
/// Loading the header re-wires the menu, active link and scroll effect.
#[wasm_bindgen(js_name = loadComponent)]
pub async fn load_component(id: String, path: String) {
    let config = SITE
        .with(|slot| slot.borrow().as_ref().map(|site| site.config().clone()))
        .unwrap_or_default();

    if site_ui_browser::load_component(&config, &id, &path).await {
        rewire_header();
    }
}
