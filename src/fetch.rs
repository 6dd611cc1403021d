//! GET helpers for the remote range endpoints.
//!
//! Thin wrappers over `window.fetch`: issue the request, reject non-OK
//! statuses, and decode the JSON body into the typed payloads from the
//! library crate. Failures are returned to the caller, which surfaces
//! them as an inert placeholder state.

use price_range::{FixedValuesResponse, RangeBoundsResponse};
use std::fmt;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

// Errors a fetch can surface; never retried automatically.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    Network(String),
    Status(u16),
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(detail) => write!(f, "network request failed: {}", detail),
            FetchError::Status(code) => write!(f, "server responded with status {}", code),
            FetchError::Decode(detail) => write!(f, "could not decode response: {}", detail),
        }
    }
}

impl std::error::Error for FetchError {}

fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let window = gloo_utils::window();
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| FetchError::Network(describe(e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| FetchError::Network("fetch did not yield a Response".to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let json = JsFuture::from(
        response
            .json()
            .map_err(|e| FetchError::Decode(describe(e)))?,
    )
    .await
    .map_err(|e| FetchError::Decode(describe(e)))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Fetch `{min, max}` bounds for the plain range exercise.
pub async fn fetch_range_bounds(url: &str) -> Result<RangeBoundsResponse, FetchError> {
    get_json(url).await
}

/// Fetch the permissible-value set for the fixed-values exercise.
pub async fn fetch_fixed_values(url: &str) -> Result<FixedValuesResponse, FetchError> {
    get_json(url).await
}
