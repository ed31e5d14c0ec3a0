//! DOM element wrappers.
//!
//! Newtypes over `web-sys` elements implementing the core platform traits.
//! Host failures are logged and swallowed; a class or style that could not
//! be applied never aborts an event handler.

use site_ui_core::{ClassList, NavLink, PlatformError, ScrollLock, SlideTrack};
use wasm_bindgen::{JsCast, JsValue};

/// Convert a thrown JS value into a `PlatformError`.
pub fn js_error(err: &JsValue) -> PlatformError {
    err.as_string()
        .unwrap_or_else(|| format!("{:?}", err))
        .into()
}

/// First element matching `selector` in the document.
pub fn query(document: &web_sys::Document, selector: &str) -> Option<web_sys::Element> {
    match document.query_selector(selector) {
        Ok(found) => found,
        Err(e) => {
            tracing::warn!(selector, error = %js_error(&e), "invalid selector");
            None
        }
    }
}

/// First element matching `selector`, cast to `T`.
pub fn query_as<T: JsCast>(document: &web_sys::Document, selector: &str) -> Option<T> {
    query(document, selector)?.dyn_into::<T>().ok()
}

/// Every element in a `NodeList`, skipping non-element nodes.
pub fn elements(list: &web_sys::NodeList) -> Vec<web_sys::Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

/// All elements matching `selector` in the document. Empty on error.
pub fn query_all(document: &web_sys::Document, selector: &str) -> Vec<web_sys::Element> {
    match document.query_selector_all(selector) {
        Ok(list) => elements(&list),
        Err(e) => {
            tracing::warn!(selector, error = %js_error(&e), "invalid selector");
            Vec::new()
        }
    }
}

/// Element whose classes the controllers toggle.
#[derive(Debug, Clone, PartialEq)]
pub struct DomElement(pub web_sys::Element);

impl ClassList for DomElement {
    fn add_class(&self, class: &str) {
        if let Err(e) = self.0.class_list().add_1(class) {
            tracing::warn!(class, error = %js_error(&e), "add class failed");
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(e) = self.0.class_list().remove_1(class) {
            tracing::warn!(class, error = %js_error(&e), "remove class failed");
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }
}

impl NavLink for DomElement {
    fn href(&self) -> Option<String> {
        self.0.get_attribute("href")
    }
}

/// The document body, locked while the mobile menu is open.
#[derive(Debug, Clone)]
pub struct PageBody(pub web_sys::HtmlElement);

impl ScrollLock for PageBody {
    fn set_scroll_locked(&self, locked: bool) {
        let style = self.0.style();
        let result = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
        if let Err(e) = result {
            tracing::warn!(locked, error = %js_error(&e), "scroll lock failed");
        }
    }
}

/// The slider track, moved with a CSS transform.
#[derive(Debug, Clone)]
pub struct DomTrack(pub web_sys::HtmlElement);

impl SlideTrack for DomTrack {
    fn set_transform(&self, transform: &str) {
        if let Err(e) = self.0.style().set_property("transform", transform) {
            tracing::warn!(transform, error = %js_error(&e), "slider transform failed");
        }
    }
}
