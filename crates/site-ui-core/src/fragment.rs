//! Shared-markup fragment loading: outcome classification and errors.
//!
//! The browser layer performs the fetch and insertion; this module decides
//! what counts as success and which containers need dependent controllers
//! re-wired after insertion.

use miette::Diagnostic;

/// Errors from fetching a markup fragment.
///
/// These never escape the loader; they are logged and the container keeps
/// its existing content.
#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum FragmentError {
    /// Server answered outside the 2xx range
    #[error("failed to load {path}: {status}")]
    #[diagnostic(code(site_ui::fragment::status))]
    Status { path: String, status: u16 },

    /// Request never completed or the body could not be read
    #[error("error loading {path}: {message}")]
    #[diagnostic(
        code(site_ui::fragment::transport),
        help("check that the fragment path is reachable from this page")
    )]
    Transport { path: String, message: String },
}

impl FragmentError {
    pub fn path(&self) -> &str {
        match self {
            FragmentError::Status { path, .. } | FragmentError::Transport { path, .. } => path,
        }
    }
}

/// Accept any 2xx status, reject everything else.
pub fn check_status(path: &str, status: u16) -> Result<(), FragmentError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(FragmentError::Status {
            path: path.to_string(),
            status,
        })
    }
}

/// The header fragment carries the menu, the nav links and the element the
/// scroll effect targets, so those controllers must be wired again.
pub fn requires_header_rewire(container_id: &str, header_id: &str) -> bool {
    container_id == header_id
}
