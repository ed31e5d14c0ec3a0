//! Reveal-on-scroll via `IntersectionObserver`.

use site_ui_core::{RevealOptions, UiConfig, reveal_on_intersection};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom::{self, DomElement};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Observer watching every animated element. Dropping it disconnects the
/// observer.
pub struct RevealWiring {
    observer: IntersectionObserver,
    observed: usize,
    _callback: ObserverCallback,
}

impl RevealWiring {
    pub fn observed(&self) -> usize {
        self.observed
    }

    pub fn observer(&self) -> &IntersectionObserver {
        &self.observer
    }
}

impl std::fmt::Debug for RevealWiring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevealWiring")
            .field("observed", &self.observed)
            .finish()
    }
}

impl Drop for RevealWiring {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observe every element carrying one of the animation classes. Returns
/// `None` when there is nothing to observe or the observer cannot be built.
pub fn wire_reveal(document: &web_sys::Document, config: &UiConfig) -> Option<RevealWiring> {
    let options = RevealOptions::from_config(config);
    let targets = dom::query_all(document, &options.selector);
    if targets.is_empty() {
        tracing::debug!("no animated elements, skipping reveal observer");
        return None;
    }

    // Elements stay observed after their first reveal.
    let callback: ObserverCallback = Closure::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = DomElement(entry.target());
                if reveal_on_intersection(&target, entry.is_intersecting()) {
                    tracing::trace!(id = %target.0.id(), "revealed");
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin);

    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(e) => {
                tracing::warn!(error = %dom::js_error(&e), "could not create reveal observer");
                return None;
            }
        };

    for target in &targets {
        observer.observe(target);
    }
    tracing::debug!(observed = targets.len(), "reveal observer wired");

    Some(RevealWiring {
        observer,
        observed: targets.len(),
        _callback: callback,
    })
}
