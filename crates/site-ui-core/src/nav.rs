//! Active navigation link marking.
//!
//! The current page is the last segment of the document path. A link is the
//! active one when the part of its `href` before any `#` names that page,
//! so `about.html#process` still marks the About link on `about.html`.

use crate::ACTIVE_CLASS;
use crate::platform::NavLink;

/// Page assumed when the document path ends in `/`.
pub const DEFAULT_PAGE: &str = "index.html";

/// File name of the current document, or [`DEFAULT_PAGE`] for an empty one.
pub fn current_page(pathname: &str) -> &str {
    match pathname.rsplit('/').next() {
        Some(page) if !page.is_empty() => page,
        _ => DEFAULT_PAGE,
    }
}

/// The page a link points at, with any fragment identifier stripped.
pub fn link_page(href: &str) -> &str {
    href.split('#').next().unwrap_or_default()
}

/// Whether a link with `href` points at the document at `pathname`.
pub fn is_active_link(pathname: &str, href: &str) -> bool {
    link_page(href) == current_page(pathname)
}

/// Add the active class to links matching the current page and remove it
/// from every other link. Safe to call repeatedly.
pub fn mark_active_links<L: NavLink>(pathname: &str, links: &[L]) {
    for link in links {
        let href = link.href().unwrap_or_default();
        let active = is_active_link(pathname, &href);
        tracing::trace!(href = %href, active, "mark_active_links");
        link.set_class(ACTIVE_CLASS, active);
    }
}
