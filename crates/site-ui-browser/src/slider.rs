//! Homepage slider: buttons, auto-play and hover pause.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use site_ui_core::{Slider, UiConfig};
use web_sys::HtmlElement;

use crate::dom::{self, DomTrack};
use crate::timer::GlooScheduler;

type SharedSlider = Rc<RefCell<Slider<GlooScheduler, DomTrack>>>;

/// Slider controller and its listeners. Dropping this stops auto-play.
#[derive(Debug)]
pub struct SliderWiring {
    slider: SharedSlider,
    _listeners: Vec<EventListener>,
}

impl SliderWiring {
    pub fn index(&self) -> usize {
        self.slider.borrow().index()
    }

    pub fn is_playing(&self) -> bool {
        self.slider.borrow().is_playing()
    }
}

/// Wire the slider. Returns `None` unless the track, at least one slide
/// and both buttons are present. The hover container is optional.
pub fn wire_slider(document: &web_sys::Document, config: &UiConfig) -> Option<SliderWiring> {
    let track = dom::query_as::<HtmlElement>(document, &config.slider_track_selector);
    let slides = dom::query_all(document, &config.slide_selector).len();
    let next = dom::query(document, &config.slider_next_selector);
    let prev = dom::query(document, &config.slider_prev_selector);

    let (Some(track), Some(next), Some(prev)) = (track, next, prev) else {
        tracing::debug!("slider controls not present, skipping slider wiring");
        return None;
    };
    let Some(slider) = Slider::new(
        DomTrack(track),
        slides,
        GlooScheduler,
        config.autoplay_interval_ms,
    ) else {
        tracing::debug!("slider has no slides, skipping slider wiring");
        return None;
    };
    let slider: SharedSlider = Rc::new(RefCell::new(slider));
    let mut listeners = Vec::new();

    let on_next = slider.clone();
    listeners.push(EventListener::new(&next, "click", move |_| {
        on_next.borrow().next();
    }));

    let on_prev = slider.clone();
    listeners.push(EventListener::new(&prev, "click", move |_| {
        on_prev.borrow().previous();
    }));

    if let Some(container) = dom::query(document, &config.slider_container_selector) {
        let on_enter = slider.clone();
        listeners.push(EventListener::new(&container, "mouseenter", move |_| {
            on_enter.borrow_mut().pause();
        }));
        let on_leave = slider.clone();
        listeners.push(EventListener::new(&container, "mouseleave", move |_| {
            on_leave.borrow_mut().resume();
        }));
    }

    tracing::debug!(slides, "slider wired");
    Some(SliderWiring {
        slider,
        _listeners: listeners,
    })
}
