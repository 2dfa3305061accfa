//! Reading and replacing the query part of the browser URL.

use dioxus::logger::tracing::warn;
use wasm_bindgen::JsValue;

/// `location.search` of the current page, including the leading `?` when present.
pub fn current_query() -> String {
    web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default()
}

/// Rewrites the query in place with `history.replaceState`, keeping path and hash.
pub fn replace_query(query: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let path = location.pathname().unwrap_or_default();
    let hash = location.hash().unwrap_or_default();
    let url = if query.is_empty() { format!("{path}{hash}") } else { format!("{path}?{query}{hash}") };

    let result = window
        .history()
        .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(&url)));
    if let Err(e) = result {
        warn!("failed to replace URL with {url:?}: {e:?}");
    }
}
