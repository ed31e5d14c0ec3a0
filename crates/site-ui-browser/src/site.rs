//! One-shot initialization of every page enhancement.
//!
//! `SiteUi` owns each region's listeners, observer and timers. Regions whose
//! elements are missing are simply absent. Dropping a `SiteUi` detaches
//! everything it wired.

use gloo_events::EventListener;
use site_ui_core::{PlatformError, UiConfig};

use crate::anchor::{AnchorWiring, wire_anchors};
use crate::form::{FormWiring, wire_form};
use crate::nav::{MenuWiring, mark_active_links, wire_menu};
use crate::reveal::{RevealWiring, wire_reveal};
use crate::scroll::{ScrollWiring, wire_scroll_effect};
use crate::slider::{SliderWiring, wire_slider};

#[derive(Debug)]
pub struct SiteUi {
    config: UiConfig,
    window: web_sys::Window,
    document: web_sys::Document,
    reveal: Option<RevealWiring>,
    anchors: AnchorWiring,
    form: Option<FormWiring>,
    menu: Option<MenuWiring>,
    scroll: Option<ScrollWiring>,
    slider: Option<SliderWiring>,
}

impl SiteUi {
    /// Wire every region present in the current document.
    pub fn init(config: UiConfig) -> Result<Self, PlatformError> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let reveal = wire_reveal(&document, &config);
        let anchors = wire_anchors(&document, &config);
        let form = wire_form(&document, &config);
        let menu = wire_menu(&document, &config);
        let scroll = wire_scroll_effect(&window, &document, &config);
        mark_active_links(&document, &config);
        let slider = wire_slider(&document, &config);

        tracing::info!(
            reveal = reveal.is_some(),
            anchors = anchors.len(),
            form = form.is_some(),
            menu = menu.is_some(),
            scroll = scroll.is_some(),
            slider = slider.is_some(),
            "site ui initialized"
        );

        Ok(Self {
            config,
            window,
            document,
            reveal,
            anchors,
            form,
            menu,
            scroll,
            slider,
        })
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    /// Re-wire the controllers that depend on header markup. Called after a
    /// header fragment replaced the old elements.
    pub fn rewire_header(&mut self) {
        // Release the scroll lock of a menu that is still open; the new menu
        // starts closed.
        if let Some(menu) = self.menu.take() {
            menu.close();
        }
        self.scroll = None;
        self.menu = wire_menu(&self.document, &self.config);
        mark_active_links(&self.document, &self.config);
        self.scroll = wire_scroll_effect(&self.window, &self.document, &self.config);
        tracing::debug!(
            menu = self.menu.is_some(),
            scroll = self.scroll.is_some(),
            "header controllers rewired"
        );
    }

    pub fn menu(&self) -> Option<&MenuWiring> {
        self.menu.as_ref()
    }

    pub fn form(&self) -> Option<&FormWiring> {
        self.form.as_ref()
    }

    pub fn slider(&self) -> Option<&SliderWiring> {
        self.slider.as_ref()
    }

    pub fn reveal(&self) -> Option<&RevealWiring> {
        self.reveal.as_ref()
    }

    pub fn anchors(&self) -> &AnchorWiring {
        &self.anchors
    }

    pub fn has_scroll_effect(&self) -> bool {
        self.scroll.is_some()
    }
}

/// Run `f` once the document is parsed: immediately if it already is,
/// otherwise on `DOMContentLoaded`.
pub fn on_document_ready(f: impl FnOnce() + 'static) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", move |_| f()).forget();
    } else {
        f();
    }
}
