use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// GETs `url` and returns the parsed JSON body as a JS value.
pub async fn fetch_json(url: &str) -> Result<JsValue, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_val = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| format!("fetch {} failed: {:?}", url, e))?;
    let resp: web_sys::Response = resp_val.dyn_into().map_err(|_| "fetch did not return a Response".to_string())?;
    if !resp.ok() {
        return Err(format!("fetch {} returned HTTP {}", url, resp.status()));
    }
    let body = resp.json().map_err(|e| format!("{:?}", e))?;
    JsFuture::from(body).await.map_err(|e| format!("invalid JSON from {}: {:?}", url, e))
}

/// Full page load of `route`.
pub fn navigate(route: &str) {
    web_sys::console::log_1(&format!("[Finder] navigate -> {}", route).into());
    if let Some(win) = web_sys::window() {
        if let Err(e) = win.location().set_href(route) {
            web_sys::console::error_1(&format!("[Finder] navigation failed: {:?}", e).into());
        }
    }
}
