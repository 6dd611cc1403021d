//! Data-loading hook shared by the exercise pages.

use std::future::Future;
use yew::prelude::*;

use crate::fetch::FetchError;

/// Lifecycle of a resource fetched once on mount.
#[derive(Clone, PartialEq)]
pub enum FetchState<T: Clone + PartialEq> {
    Loading,
    Failed(String),
    Ready(T),
}

/// Kick off `fetch` when the component mounts and settle the returned
/// handle to `Ready` or `Failed`. Failures are logged here; callers only
/// decide what placeholder to render.
#[hook]
pub fn use_remote<T, F, Fut>(fetch: F) -> UseStateHandle<FetchState<T>>
where
    T: Clone + PartialEq + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<T, FetchError>> + 'static,
{
    let state = use_state(|| FetchState::Loading);
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match fetch().await {
                    Ok(data) => state.set(FetchState::Ready(data)),
                    Err(err) => {
                        log::error!("range data fetch failed: {}", err);
                        state.set(FetchState::Failed(err.to_string()));
                    }
                }
            });
        });
    }
    state
}
