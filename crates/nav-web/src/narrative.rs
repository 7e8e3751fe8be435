use nav_core::constants::{LOG_ENDPOINT, LOG_FALLBACK};
use nav_core::Destination;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Fetch the arrival log for a destination. Single best-effort attempt; any
/// failure or empty body resolves to the fixed fallback text, so callers
/// never need failure handling of their own.
pub async fn fetch_arrival_log(dest: &'static Destination) -> String {
    match try_fetch(dest).await {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => {
            log::warn!("[narrative] empty log for {}", dest.id);
            LOG_FALLBACK.to_string()
        }
        Err(e) => {
            log::error!("[narrative] fetch failed for {}: {:?}", dest.id, e);
            LOG_FALLBACK.to_string()
        }
    }
}

async fn try_fetch(dest: &Destination) -> Result<String, JsValue> {
    let opts = web::RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(web::RequestMode::SameOrigin);

    let url = format!("{}?dest={}", LOG_ENDPOINT, dest.id);
    let request = web::Request::new_with_str_and_init(&url, &opts)?;

    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|_| JsValue::from_str("response is not a Response"))?;
    if !resp.ok() {
        return Err(JsValue::from_str(&format!("HTTP {}", resp.status())));
    }

    let text = JsFuture::from(resp.text()?).await?;
    Ok(text.as_string().unwrap_or_default())
}
