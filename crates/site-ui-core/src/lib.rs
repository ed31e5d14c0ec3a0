//! site-ui-core: Pure Rust logic for the site's interactive enhancements.
//!
//! This crate provides:
//! - Platform traits (`ClassList`, `ScrollLock`, `SlideTrack`, `FormSurface`,
//!   `Scheduler`) that the browser layer implements over DOM elements
//! - State machines for the mobile menu, slider and simulated inquiry form
//! - Decision functions for active-link marking, header scroll state,
//!   reveal animation and in-page anchor navigation
//! - `UiConfig`, the document contract and timings, deserializable from JS
//!
//! Nothing here touches the DOM, so every behavior is testable natively.

pub mod anchor;
pub mod config;
pub mod form;
pub mod fragment;
pub mod menu;
pub mod nav;
pub mod platform;
pub mod reveal;
pub mod scroll;
pub mod slider;

#[cfg(test)]
pub(crate) mod testing;

pub use anchor::{AnchorAction, classify_anchor};
pub use config::UiConfig;
pub use form::{FormPhase, FormSimulator, FormTimings};
pub use fragment::{FragmentError, check_status, requires_header_rewire};
pub use menu::{Menu, MenuState};
pub use nav::{DEFAULT_PAGE, current_page, is_active_link, link_page, mark_active_links};
pub use platform::{
    ClassList, FormSurface, NavLink, PlatformError, ScrollLock, Scheduler, SlideTrack,
};
pub use reveal::{RevealOptions, reveal_on_intersection};
pub use scroll::{HeaderScroll, is_scrolled};
pub use slider::{SlideDeck, Slider};

/// Class added to the current navigation link and to the open menu controls.
pub const ACTIVE_CLASS: &str = "active";

/// Class added to the header once the page scrolls past the threshold.
pub const SCROLLED_CLASS: &str = "scrolled";

/// Class added to animated elements once they enter the viewport.
pub const VISIBLE_CLASS: &str = "visible";
