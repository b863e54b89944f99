//! Network fetching with timeout support.
//!
//! One consumer: the preview loader's single GET of the dataset document.
//! The request is raced against a timer so a stalled fetch still resolves
//! into the error branch instead of leaving the placeholder up forever.

use js_sys::{Array, Promise};
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response, Window};

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::FetchError;

/// Fetch a JSON document from a site-relative URL and deserialize it.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let body = fetch_text(url).await?;
    serde_json::from_str(&body).map_err(|e| FetchError::Json(e.to_string()))
}

/// Fetch a response body as text, enforcing the request timeout.
async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let winner = race_against_timeout(&window, window.fetch_with_request(&request)).await?;
    let response: Response = winner.dyn_into().map_err(|_| FetchError::InvalidContent)?;

    if !response.ok() {
        return Err(FetchError::Http(response.status()));
    }

    let text_promise = response.text().map_err(|_| FetchError::ResponseReadFailed)?;
    let body = JsFuture::from(text_promise)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?;

    body.as_string().ok_or(FetchError::InvalidContent)
}

/// Race a promise against [`FETCH_TIMEOUT_MS`] via `Promise.race`.
///
/// The timer promise resolves to `undefined`, which a fetch result never
/// is, so an `undefined` winner means the timer fired first.
async fn race_against_timeout(window: &Window, promise: Promise) -> Result<JsValue, FetchError> {
    let timer = Promise::new(&mut |resolve, _| {
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, FETCH_TIMEOUT_MS);
    });

    let contenders = Array::of2(&promise, &timer);
    match JsFuture::from(Promise::race(&contenders)).await {
        Ok(winner) if winner.is_undefined() => Err(FetchError::Timeout),
        Ok(winner) => Ok(winner),
        Err(e) => Err(FetchError::Network(
            e.as_string().unwrap_or_else(|| "Unknown error".to_string()),
        )),
    }
}
