//! Persistence Client
//!
//! Fetch wrappers for the todo document endpoint. The whole array is
//! read and replaced on every call; there are no partial updates.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::models::TodoRecord;

/// Document endpoint served by the backing store.
pub const TODO_DOC_URL: &str = "/data/todo.json";

fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

async fn run_fetch(request: &Request) -> Result<Response, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(js_error)?;
    resp.dyn_into::<Response>()
        .map_err(|_| "fetch did not return a Response".to_string())
}

/// Fetch the persisted collection, in document order.
pub async fn fetch_todos() -> Result<Vec<TodoRecord>, String> {
    let request = Request::new_with_str(TODO_DOC_URL).map_err(js_error)?;
    let resp = run_fetch(&request).await?;
    if !resp.ok() {
        return Err(format!("GET {TODO_DOC_URL} -> {}", resp.status()));
    }
    let body = JsFuture::from(resp.json().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    serde_wasm_bindgen::from_value(body).map_err(|e| e.to_string())
}

/// Replace the persisted collection with the given snapshot.
pub async fn save_todos(todos: &[TodoRecord]) -> Result<(), String> {
    let body = serde_json::to_string(todos).map_err(|e| e.to_string())?;

    let opts = RequestInit::new();
    opts.set_method("PATCH");
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(TODO_DOC_URL, &opts).map_err(js_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_error)?;

    let resp = run_fetch(&request).await?;
    if !resp.ok() {
        return Err(format!("PATCH {TODO_DOC_URL} -> {}", resp.status()));
    }
    Ok(())
}
