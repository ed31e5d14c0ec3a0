//! `Scheduler` backed by `setTimeout`/`setInterval` through `gloo-timers`.

use gloo_timers::callback::{Interval, Timeout};
use site_ui_core::Scheduler;

/// Browser timer scheduler. Stateless; every task lives in its handle.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooScheduler;

/// A pending browser timer. Dropping it clears the timer.
#[derive(Debug)]
pub enum TimerHandle {
    Timeout(Timeout),
    Interval(Interval),
}

impl Scheduler for GlooScheduler {
    type Handle = TimerHandle;

    fn timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle {
        TimerHandle::Timeout(Timeout::new(delay_ms, callback))
    }

    fn interval(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Self::Handle {
        TimerHandle::Interval(Interval::new(period_ms, callback))
    }
}
