use reactive_fetch::FetchHandle;
use serde::de::DeserializeOwned;
use yew::prelude::*;

/// One render's view of a fetch handle.
#[derive(Clone, PartialEq)]
pub struct FetchSnapshot<T: PartialEq> {
    pub data: Option<T>,
    pub error: Option<String>,
    pub loading: bool,
    /// Parsed total-count header from the last successful response.
    pub total_count: Option<i64>,
}

impl<T: PartialEq> FetchSnapshot<T> {
    /// Returns true if this is the initial load (data not yet fetched,
    /// currently loading, and no error).
    pub fn is_initial_loading(&self) -> bool {
        self.loading && self.data.is_none() && self.error.is_none()
    }
}

/// Bridge a [`FetchHandle`]'s signals into Yew's render cycle.
///
/// `init` runs once, on first render; every change to the handle's
/// observable fields afterwards schedules a re-render, and each render
/// reads a fresh snapshot.
#[hook]
pub fn use_fetch_signals<T, F>(init: F) -> (FetchHandle<T>, FetchSnapshot<T>)
where
    T: Clone + PartialEq + DeserializeOwned + 'static,
    F: FnOnce() -> FetchHandle<T>,
{
    let update = use_force_update();
    let handle = use_mut_ref(move || {
        let handle = init();
        {
            let update = update.clone();
            handle.data.subscribe(move || update.force_update());
        }
        {
            let update = update.clone();
            handle.error.subscribe(move || update.force_update());
        }
        {
            let update = update.clone();
            handle.loading.subscribe(move || update.force_update());
        }
        handle.response.subscribe(move || update.force_update());
        handle
    });

    let handle = handle.borrow().clone();
    let snapshot = FetchSnapshot {
        data: handle.data.get(),
        error: handle.error.get().map(|e| e.to_string()),
        loading: handle.loading.get(),
        total_count: handle
            .response
            .get()
            .and_then(|value| value.parse().ok()),
    };
    (handle, snapshot)
}
