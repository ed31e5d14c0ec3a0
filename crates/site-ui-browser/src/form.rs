//! Simulated inquiry form.

use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use site_ui_core::{FormSimulator, FormSurface, FormTimings, UiConfig};
use wasm_bindgen::JsCast;
use web_sys::{HtmlButtonElement, HtmlElement, HtmlFormElement};

use crate::dom;
use crate::timer::GlooScheduler;

/// The form, its submit button and the optional status line.
#[derive(Debug, Clone)]
pub struct DomForm {
    form: HtmlFormElement,
    button: HtmlButtonElement,
    status: Option<HtmlElement>,
}

impl DomForm {
    /// Resolve the form region. Returns `None` when the form or its button
    /// is missing; a missing status line only disables the message.
    pub fn resolve(document: &web_sys::Document, config: &UiConfig) -> Option<Self> {
        let form = document
            .get_element_by_id(&config.form_id)?
            .dyn_into::<HtmlFormElement>()
            .ok()?;
        let button = form
            .query_selector(&config.form_button_selector)
            .ok()
            .flatten()?
            .dyn_into::<HtmlButtonElement>()
            .ok()?;
        let status = document
            .get_element_by_id(&config.form_status_id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        Some(Self {
            form,
            button,
            status,
        })
    }
}

impl FormSurface for DomForm {
    fn button_label(&self) -> String {
        self.button.inner_text()
    }

    fn set_button_label(&self, label: &str) {
        self.button.set_inner_text(label);
    }

    fn set_button_disabled(&self, disabled: bool) {
        self.button.set_disabled(disabled);
    }

    fn set_button_background(&self, color: Option<&str>) {
        let style = self.button.style();
        let result = match color {
            Some(color) => style.set_property("background-color", color),
            None => style.remove_property("background-color").map(|_| ()),
        };
        if let Err(e) = result {
            tracing::warn!(error = %dom::js_error(&e), "button background failed");
        }
    }

    fn set_status_text(&self, text: &str) {
        if let Some(status) = &self.status {
            status.set_inner_text(text);
        }
    }

    fn set_status_color(&self, color: &str) {
        if let Some(status) = &self.status {
            if let Err(e) = status.style().set_property("color", color) {
                tracing::warn!(error = %dom::js_error(&e), "status color failed");
            }
        }
    }

    fn reset_fields(&self) {
        self.form.reset();
    }
}

/// Submit interception for the inquiry form.
#[derive(Debug)]
pub struct FormWiring {
    simulator: Rc<FormSimulator<GlooScheduler, DomForm>>,
    _listener: EventListener,
}

impl FormWiring {
    pub fn phase(&self) -> site_ui_core::FormPhase {
        self.simulator.phase()
    }
}

pub fn wire_form(document: &web_sys::Document, config: &UiConfig) -> Option<FormWiring> {
    let Some(surface) = DomForm::resolve(document, config) else {
        tracing::debug!(id = %config.form_id, "no inquiry form, skipping form wiring");
        return None;
    };
    let form = surface.form.clone();
    let simulator = Rc::new(FormSimulator::new(
        surface,
        GlooScheduler,
        FormTimings::from_config(config),
    ));

    let on_submit = simulator.clone();
    let listener = EventListener::new_with_options(
        &form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            on_submit.submit();
        },
    );

    tracing::debug!("inquiry form wired");
    Some(FormWiring {
        simulator,
        _listener: listener,
    })
}
