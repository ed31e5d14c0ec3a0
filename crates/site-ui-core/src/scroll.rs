//! Header "scrolled" state.

use crate::SCROLLED_CLASS;
use crate::platform::ClassList;

/// Whether a vertical offset is strictly past the threshold.
pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Keeps the scrolled class on the header in step with the scroll offset.
#[derive(Debug)]
pub struct HeaderScroll<C> {
    header: C,
    threshold: f64,
}

impl<C: ClassList> HeaderScroll<C> {
    pub fn new(header: C, threshold: f64) -> Self {
        Self { header, threshold }
    }

    /// Re-evaluate for the given offset. Called once at wiring time and on
    /// every scroll event.
    pub fn update(&self, scroll_y: f64) {
        self.header
            .set_class(SCROLLED_CLASS, is_scrolled(scroll_y, self.threshold));
    }
}
