//! Network fetching utilities.
//!
//! Provides async GET/POST functions built on the browser Fetch API. A
//! request runs until the browser settles it; nothing is cancelled or timed
//! out on the client side.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::core::error::FetchError;

/// Best-effort text of a rejected promise.
fn rejection_message(e: &JsValue) -> String {
    e.as_string()
        .or_else(|| {
            e.dyn_ref::<js_sys::Error>()
                .map(|err| String::from(err.message()))
        })
        .unwrap_or_else(|| "Unknown error".to_string())
}

// =============================================================================
// Fetch Functions
// =============================================================================

/// Status and body of a completed HTTP exchange.
///
/// Non-2xx responses are returned as-is; the caller decides what they mean.
#[derive(Debug, Clone, PartialEq)]
pub struct TextResponse {
    pub status: u16,
    pub body: String,
}

impl TextResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Request body with its content type.
#[derive(Debug, Clone)]
pub struct Body<'a> {
    pub content_type: &'a str,
    pub text: String,
}

/// Issue a GET request.
pub async fn get_text(url: &str) -> Result<TextResponse, FetchError> {
    fetch_text(url, "GET", None).await
}

/// Issue a POST request with a text body.
pub async fn post_text(url: &str, body: Body<'_>) -> Result<TextResponse, FetchError> {
    fetch_text(url, "POST", Some(body)).await
}

/// Fetch text from a URL using the Fetch API.
///
/// Resolves with whatever status the server answered; only transport
/// failures are errors.
async fn fetch_text(
    url: &str,
    method: &str,
    body: Option<Body<'_>>,
) -> Result<TextResponse, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);

    let content_type = body.as_ref().map(|b| b.content_type);
    if let Some(body) = &body {
        opts.set_body(&JsValue::from_str(&body.text));
    }

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    if let Some(content_type) = content_type {
        request
            .headers()
            .set("Content-Type", content_type)
            .map_err(|_| FetchError::RequestCreationFailed)?;
    }

    let result = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| FetchError::NetworkError(rejection_message(&e)))?;
    let resp: Response = result.dyn_into().map_err(|_| FetchError::InvalidContent)?;

    let text = JsFuture::from(resp.text().map_err(|_| FetchError::ResponseReadFailed)?)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?;

    Ok(TextResponse {
        status: resp.status(),
        body: text.as_string().ok_or(FetchError::InvalidContent)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        let ok = TextResponse {
            status: 200,
            body: String::new(),
        };
        let created = TextResponse {
            status: 201,
            body: String::new(),
        };
        let bad = TextResponse {
            status: 400,
            body: String::new(),
        };
        assert!(ok.is_success());
        assert!(created.is_success());
        assert!(!bad.is_success());
    }
}
