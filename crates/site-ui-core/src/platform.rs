//! Platform abstraction traits for the UI controllers.
//!
//! These traits define the interface between the controller logic and the
//! host document. The browser implementation wraps `web-sys` elements and
//! `gloo-timers`; tests use recording fakes and a virtual clock.

/// Error type for platform operations.
#[derive(Debug, Clone)]
pub struct PlatformError(pub String);

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for PlatformError {}

impl From<&str> for PlatformError {
    fn from(s: &str) -> Self {
        PlatformError(s.to_string())
    }
}

impl From<String> for PlatformError {
    fn from(s: String) -> Self {
        PlatformError(s)
    }
}

/// CSS class manipulation on a single element.
///
/// Implementations log and swallow host failures; a class that cannot be
/// applied is a cosmetic problem, not a reason to abort the handler.
pub trait ClassList {
    fn add_class(&self, class: &str);

    fn remove_class(&self, class: &str);

    fn has_class(&self, class: &str) -> bool;

    /// Add or remove `class` depending on `on`.
    fn set_class(&self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }
}

/// A navigation link: has classes and a raw `href` attribute.
pub trait NavLink: ClassList {
    /// The literal `href` attribute, not the resolved URL.
    fn href(&self) -> Option<String>;
}

/// Page-level scroll locking, used while the mobile menu is open.
pub trait ScrollLock {
    fn set_scroll_locked(&self, locked: bool);
}

/// The moving strip that holds every slide.
pub trait SlideTrack {
    /// Apply a CSS transform value such as `translateX(-200%)`.
    fn set_transform(&self, transform: &str);
}

/// Visual surface of the inquiry form: its submit button, status line and
/// input fields.
pub trait FormSurface {
    fn button_label(&self) -> String;

    fn set_button_label(&self, label: &str);

    fn set_button_disabled(&self, disabled: bool);

    /// Override the button background, or clear the override with `None`.
    fn set_button_background(&self, color: Option<&str>);

    /// Set the status line text. Empty text clears it.
    fn set_status_text(&self, text: &str);

    fn set_status_color(&self, color: &str);

    /// Clear every input back to its initial value.
    fn reset_fields(&self);
}

/// Delayed and repeating task primitive.
///
/// Dropping a returned handle cancels the task. This is the only
/// cancellation mechanism; controllers own their handles and replace them
/// to reschedule.
pub trait Scheduler {
    type Handle;

    /// Run `callback` once after `delay_ms`.
    fn timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;

    /// Run `callback` every `period_ms` until the handle is dropped.
    fn interval(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Self::Handle;
}

impl<S: Scheduler + ?Sized> Scheduler for std::rc::Rc<S> {
    type Handle = S::Handle;

    fn timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle {
        (**self).timeout(delay_ms, callback)
    }

    fn interval(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Self::Handle {
        (**self).interval(period_ms, callback)
    }
}
