//! Header scroll effect.

use gloo_events::EventListener;
use site_ui_core::{HeaderScroll, UiConfig};

use crate::dom::{self, DomElement};

/// Current vertical scroll offset of the window.
fn scroll_y(window: &web_sys::Window) -> f64 {
    window.scroll_y().unwrap_or_else(|e| {
        tracing::warn!(error = %dom::js_error(&e), "could not read scroll offset");
        0.0
    })
}

/// Window scroll listener keeping the header class current.
#[derive(Debug)]
pub struct ScrollWiring {
    _listener: EventListener,
}

/// Evaluate the header state now and on every scroll. Returns `None` when
/// the page has no header.
pub fn wire_scroll_effect(
    window: &web_sys::Window,
    document: &web_sys::Document,
    config: &UiConfig,
) -> Option<ScrollWiring> {
    let Some(header) = document.get_element_by_id(&config.header_id) else {
        tracing::debug!(id = %config.header_id, "no header, skipping scroll effect");
        return None;
    };

    let effect = HeaderScroll::new(DomElement(header), config.scroll_threshold);
    effect.update(scroll_y(window));

    let listener = EventListener::new(window, "scroll", move |_| {
        effect.update(scroll_y(&gloo_utils::window()));
    });
    Some(ScrollWiring {
        _listener: listener,
    })
}
