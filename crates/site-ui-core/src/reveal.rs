//! Reveal-on-scroll decisions.
//!
//! Elements are observed for their whole lifetime. Scrolling an element out
//! and back in applies the visible class again, which is a no-op once set.

use crate::VISIBLE_CLASS;
use crate::config::UiConfig;
use crate::platform::ClassList;

/// Intersection observer settings.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the element that must be visible.
    pub threshold: f64,
    /// CSS margin applied to the viewport, e.g. `0px 0px -50px 0px`.
    pub root_margin: String,
    /// Selector list of elements to observe.
    pub selector: String,
}

impl RevealOptions {
    pub fn from_config(config: &UiConfig) -> Self {
        Self {
            threshold: config.reveal_threshold,
            root_margin: config.reveal_root_margin.clone(),
            selector: config.reveal_selector_list(),
        }
    }
}

/// Handle one intersection entry. Returns whether the element was marked.
pub fn reveal_on_intersection<C: ClassList>(target: &C, is_intersecting: bool) -> bool {
    if is_intersecting {
        target.add_class(VISIBLE_CLASS);
    }
    is_intersecting
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeElement;

    #[test]
    fn test_options_from_default_config() {
        let options = RevealOptions::from_config(&UiConfig::default());
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.root_margin, "0px 0px -50px 0px");
        assert!(options.selector.contains(".reveal-up"));
    }

    #[test]
    fn test_reveal_marks_visible_once_intersecting() {
        let el = FakeElement::new();
        assert!(!reveal_on_intersection(&el, false));
        assert!(!el.has_class(VISIBLE_CLASS));

        assert!(reveal_on_intersection(&el, true));
        assert!(el.has_class(VISIBLE_CLASS));
    }

    #[test]
    fn test_leaving_viewport_keeps_visible() {
        let el = FakeElement::new();
        reveal_on_intersection(&el, true);
        reveal_on_intersection(&el, false);
        assert!(el.has_class(VISIBLE_CLASS));

        // Re-entry is idempotent.
        reveal_on_intersection(&el, true);
        assert!(el.has_class(VISIBLE_CLASS));
    }
}
