//! Smooth scrolling for in-page anchor links.

use gloo_events::{EventListener, EventListenerOptions};
use site_ui_core::{AnchorAction, UiConfig, classify_anchor};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::dom;

/// Click listeners on every in-page link.
#[derive(Debug, Default)]
pub struct AnchorWiring {
    listeners: Vec<EventListener>,
}

impl AnchorWiring {
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

/// Smooth-scroll the element with `id` into view. Missing targets are
/// ignored.
pub fn scroll_to_id(document: &web_sys::Document, id: &str) -> bool {
    let Some(target) = document.get_element_by_id(id) else {
        tracing::trace!(id, "anchor target not found");
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Intercept clicks on links whose `href` starts with `#`.
pub fn wire_anchors(document: &web_sys::Document, config: &UiConfig) -> AnchorWiring {
    let links = dom::query_all(document, &config.anchor_selector);
    let mut listeners = Vec::with_capacity(links.len());

    for link in links {
        let anchor = link.clone();
        let document = document.clone();
        // Non-passive so the default jump can be prevented.
        let listener = EventListener::new_with_options(
            &link,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let href = anchor.get_attribute("href").unwrap_or_default();
                let action = classify_anchor(&href);
                if action.prevents_default() {
                    event.prevent_default();
                }
                if let AnchorAction::ScrollTo(id) = action {
                    scroll_to_id(&document, id);
                }
            },
        );
        listeners.push(listener);
    }

    tracing::debug!(links = listeners.len(), "anchor links wired");
    AnchorWiring { listeners }
}
