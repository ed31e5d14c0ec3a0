//! In-page anchor classification for smooth scrolling.

/// What a click on a link should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorAction<'a> {
    /// Not an in-page reference; leave the default navigation alone.
    PassThrough,
    /// A bare `#`: suppress the jump and do nothing else.
    Ignore,
    /// Suppress the jump and smooth-scroll to the element with this id.
    ScrollTo(&'a str),
}

impl AnchorAction<'_> {
    /// Whether the browser's default jump must be prevented.
    pub fn prevents_default(&self) -> bool {
        !matches!(self, AnchorAction::PassThrough)
    }
}

pub fn classify_anchor(href: &str) -> AnchorAction<'_> {
    match href.strip_prefix('#') {
        None => AnchorAction::PassThrough,
        Some("") => AnchorAction::Ignore,
        Some(id) => AnchorAction::ScrollTo(id),
    }
}
