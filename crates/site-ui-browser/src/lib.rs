//! Browser DOM layer for the site UI enhancements.
//!
//! This crate resolves the optional UI regions of a page, implements the
//! core platform traits over `web-sys` elements and wires event listeners,
//! timers and observers. It assumes a `wasm32-unknown-unknown` target
//! environment.
//!
//! # Architecture
//!
//! - `dom`: element wrappers implementing the core platform traits
//! - `timer`: `gloo-timers` backed `Scheduler`
//! - `nav`: active link marking and the mobile menu
//! - `scroll`: header scroll class
//! - `reveal`: intersection-driven reveal animation
//! - `anchor`: smooth scrolling for in-page links
//! - `form`: simulated inquiry form
//! - `slider`: slide deck buttons, auto-play and hover pause
//! - `fragment`: shared-markup fragment loading
//! - `site`: one-shot initialization owning every wiring
//!
//! # Re-exports
//!
//! This crate re-exports `site-ui-core` for convenience, so consumers
//! only need to depend on `site-ui-browser`.

// Re-export core crate
pub use site_ui_core;
pub use site_ui_core::*;

pub mod anchor;
pub mod dom;
pub mod form;
pub mod fragment;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod site;
pub mod slider;
pub mod timer;

pub use dom::{DomElement, DomTrack, PageBody};
pub use fragment::{load_component, load_fragment};
pub use site::{SiteUi, on_document_ready};
pub use timer::{GlooScheduler, TimerHandle};
