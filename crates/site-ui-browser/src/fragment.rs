//! Shared-markup fragment loading.
//!
//! Fetches a text resource and inserts it as a container's markup. Failures
//! are logged and leave the container untouched. No retry, no caching.

use site_ui_core::{FragmentError, UiConfig, check_status, requires_header_rewire};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::dom;

fn transport(path: &str, err: &wasm_bindgen::JsValue) -> FragmentError {
    FragmentError::Transport {
        path: path.to_string(),
        message: dom::js_error(err).0,
    }
}

async fn fetch_text(window: &web_sys::Window, path: &str) -> Result<String, FragmentError> {
    let response = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(|e| transport(path, &e))?;
    let response: Response = response.dyn_into().map_err(|e| transport(path, &e))?;
    check_status(path, response.status())?;

    let text = response.text().map_err(|e| transport(path, &e))?;
    let text = JsFuture::from(text).await.map_err(|e| transport(path, &e))?;
    Ok(text.as_string().unwrap_or_default())
}

/// Load `path` into the element with id `container_id`.
///
/// Returns `Ok(false)` without fetching when the container does not exist.
pub async fn load_fragment(container_id: &str, path: &str) -> Result<bool, FragmentError> {
    let Some(window) = web_sys::window() else {
        return Ok(false);
    };
    let Some(container) = window
        .document()
        .and_then(|d| d.get_element_by_id(container_id))
    else {
        tracing::debug!(container_id, "fragment container missing, not fetching");
        return Ok(false);
    };

    let html = fetch_text(&window, path).await?;
    container.set_inner_html(&html);
    tracing::debug!(container_id, path, bytes = html.len(), "fragment loaded");
    Ok(true)
}

/// Load a fragment, logging any failure.
///
/// Returns `true` when the header was replaced and the header controllers
/// (menu, active link, scroll effect) must be wired again.
pub async fn load_component(config: &UiConfig, container_id: &str, path: &str) -> bool {
    match load_fragment(container_id, path).await {
        Ok(loaded) => loaded && requires_header_rewire(container_id, &config.header_id),
        Err(e) => {
            tracing::error!(path = e.path(), "{}", e);
            false
        }
    }
}
