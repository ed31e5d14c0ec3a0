//! Simulated inquiry form submission.
//!
//! No request is sent. A submit walks the form through
//! `Idle -> Sending -> Sent -> Idle`, each timed step driven by one
//! cancellable timeout owned by the simulator.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::config::UiConfig;
use crate::platform::{FormSurface, Scheduler};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    /// Button disabled and relabelled while the fake request is in flight.
    Sending,
    /// Success label and status message shown; fields already cleared.
    Sent,
}

/// Labels, colors and delays for one submission cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct FormTimings {
    pub sending_label: String,
    pub sent_label: String,
    pub sent_message: String,
    pub sent_button_color: String,
    pub sent_message_color: String,
    pub sending_delay_ms: u32,
    pub sent_duration_ms: u32,
}

impl FormTimings {
    pub fn from_config(config: &UiConfig) -> Self {
        Self {
            sending_label: config.sending_label.clone(),
            sent_label: config.sent_label.clone(),
            sent_message: config.sent_message.clone(),
            sent_button_color: config.sent_button_color.clone(),
            sent_message_color: config.sent_message_color.clone(),
            sending_delay_ms: config.sending_delay_ms,
            sent_duration_ms: config.sent_duration_ms,
        }
    }
}

struct Inner<F, H> {
    phase: FormPhase,
    original_label: String,
    surface: F,
    timings: FormTimings,
    pending: Option<H>,
}

type Shared<F, H> = Rc<RefCell<Inner<F, H>>>;

pub struct FormSimulator<S: Scheduler, F> {
    inner: Shared<F, S::Handle>,
    scheduler: Rc<S>,
}

impl<S, F> FormSimulator<S, F>
where
    S: Scheduler + 'static,
    S::Handle: 'static,
    F: FormSurface + 'static,
{
    pub fn new(surface: F, scheduler: S, timings: FormTimings) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                phase: FormPhase::Idle,
                original_label: String::new(),
                surface,
                timings,
                pending: None,
            })),
            scheduler: Rc::new(scheduler),
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.inner.borrow().phase
    }

    /// Start a submission cycle. Returns `false` and does nothing when a
    /// cycle is already running.
    pub fn submit(&self) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.phase != FormPhase::Idle {
            tracing::debug!(phase = ?inner.phase, "form submit ignored, cycle in progress");
            return false;
        }

        let original = inner.surface.button_label();
        inner.original_label = original;
        inner.surface.set_button_label(&inner.timings.sending_label);
        inner.surface.set_button_disabled(true);
        inner.phase = FormPhase::Sending;
        tracing::debug!("form sending");

        let weak = Rc::downgrade(&self.inner);
        let scheduler = self.scheduler.clone();
        let handle = self.scheduler.timeout(
            inner.timings.sending_delay_ms,
            Box::new(move || Self::show_sent(weak, scheduler)),
        );
        inner.pending = Some(handle);
        true
    }

    fn show_sent(weak: Weak<RefCell<Inner<F, S::Handle>>>, scheduler: Rc<S>) {
        let Some(shared) = weak.upgrade() else {
            return;
        };
        let mut inner = shared.borrow_mut();
        let timings = &inner.timings;
        inner.surface.set_button_label(&timings.sent_label);
        inner
            .surface
            .set_button_background(Some(&timings.sent_button_color));
        inner.surface.set_status_text(&timings.sent_message);
        inner.surface.set_status_color(&timings.sent_message_color);
        inner.surface.reset_fields();
        inner.phase = FormPhase::Sent;
        tracing::debug!("form sent");

        let weak = Rc::downgrade(&shared);
        let handle = scheduler.timeout(
            inner.timings.sent_duration_ms,
            Box::new(move || Self::restore(weak)),
        );
        inner.pending = Some(handle);
    }

    fn restore(weak: Weak<RefCell<Inner<F, S::Handle>>>) {
        let Some(shared) = weak.upgrade() else {
            return;
        };
        let mut inner = shared.borrow_mut();
        inner.surface.set_button_label(&inner.original_label);
        inner.surface.set_button_disabled(false);
        inner.surface.set_button_background(None);
        inner.surface.set_status_text("");
        inner.phase = FormPhase::Idle;
        inner.pending = None;
        tracing::debug!("form restored");
    }
}

impl<S: Scheduler, F> std::fmt::Debug for FormSimulator<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormSimulator")
            .field("phase", &self.inner.borrow().phase)
            .finish()
    }
}
