//! The fetch hook itself: observable state around a single outbound call.

use std::rc::Rc;

use serde::de::DeserializeOwned;

use crate::signal::{MaybeSignal, Signal};
use crate::transport::{
    FetchError, FetchRequest, FetchResponse, Method, TOTAL_COUNT_HEADER,
    Transport,
};

/// Per-call request configuration merged into each execute.
pub struct FetchConfig {
    /// HTTP method, GET by default.
    pub method: Method,
    /// Query parameters; pass a [`Signal`] to re-fetch on every change.
    pub params: MaybeSignal<Vec<(String, String)>>,
    /// Extra headers passed through unchanged.
    pub headers: Vec<(String, String)>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            method: Method::GET,
            params: MaybeSignal::Value(Vec::new()),
            headers: Vec::new(),
        }
    }
}

/// Hook behavior options.
pub struct FetchOptions {
    /// Run once automatically at construction when params are not
    /// reactive. Defaults to true.
    pub immediate: bool,
    /// Invoked after `data` is populated, with the raw response.
    pub on_success: Option<Rc<dyn Fn(&FetchResponse)>>,
    /// Invoked after `error` is populated.
    pub on_error: Option<Rc<dyn Fn(&FetchError)>>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            immediate: true,
            on_success: None,
            on_error: None,
        }
    }
}

struct FetchInner {
    transport: Rc<dyn Transport>,
    url: String,
    config: FetchConfig,
    options: FetchOptions,
}

/// Observable fetch state, one instance per call site.
///
/// `data` and `error` are mutually exclusive after a settled call; both
/// are cleared synchronously when a new call starts, and `loading` is
/// true strictly between call start and settlement.
///
/// Overlapping calls are neither cancelled nor sequenced: whichever
/// settles last writes last. Callers that need stronger ordering would
/// have to layer a generation counter on top; this type deliberately
/// does not.
pub struct FetchHandle<T> {
    pub data: Signal<Option<T>>,
    pub error: Signal<Option<FetchError>>,
    pub loading: Signal<bool>,
    /// Total-count header value from the last successful response.
    pub response: Signal<Option<String>>,
    inner: Rc<FetchInner>,
}

impl<T> Clone for FetchHandle<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            error: self.error.clone(),
            loading: self.loading.clone(),
            response: self.response.clone(),
            inner: self.inner.clone(),
        }
    }
}

impl<T> FetchHandle<T>
where
    T: DeserializeOwned + PartialEq + 'static,
{
    /// Issue the request once.
    ///
    /// Clears `data` and `error` and raises `loading` synchronously, then
    /// settles on the event loop. `body` is attached only when it is a
    /// JSON object; anything else sends an empty payload.
    pub fn execute(&self, body: Option<serde_json::Value>) {
        self.data.set(None);
        self.error.set(None);
        self.loading.set(true);

        let request = FetchRequest {
            method: self.inner.config.method.clone(),
            url: self.inner.url.clone(),
            query: self.inner.config.params.get(),
            headers: self.inner.config.headers.clone(),
            body: body.filter(serde_json::Value::is_object),
        };
        tracing::debug!(url = %request.url, method = %request.method, "issuing request");
        let in_flight = self.inner.transport.send(request);

        let handle = self.clone();
        spawn(async move {
            match in_flight.await {
                Ok(response) if response.is_success() => {
                    match serde_json::from_slice::<T>(&response.body) {
                        Ok(payload) => {
                            handle.response.set(
                                response
                                    .header(TOTAL_COUNT_HEADER)
                                    .map(str::to_string),
                            );
                            handle.data.set(Some(payload));
                            if let Some(on_success) =
                                &handle.inner.options.on_success
                            {
                                on_success(&response);
                            }
                        }
                        Err(e) => handle.fail(FetchError::Decode(e.to_string())),
                    }
                }
                Ok(response) => {
                    let text =
                        String::from_utf8_lossy(&response.body).into_owned();
                    handle.fail(FetchError::Status(response.status, text));
                }
                Err(e) => handle.fail(e),
            }
            handle.loading.set(false);
        });
    }

    fn fail(&self, error: FetchError) {
        self.error.set(Some(error.clone()));
        if let Some(on_error) = &self.inner.options.on_error {
            on_error(&error);
        }
    }
}

/// Build a fetch handle for `url` relative to the transport's base
/// address.
///
/// With reactive params this subscribes `execute` to the params signal,
/// running once immediately to establish initial state and again on every
/// change. With plain params it runs at most once, at construction, iff
/// `options.immediate`.
pub fn use_fetch<T>(
    transport: Rc<dyn Transport>,
    url: impl Into<String>,
    config: FetchConfig,
    options: FetchOptions,
) -> FetchHandle<T>
where
    T: DeserializeOwned + PartialEq + 'static,
{
    let handle = FetchHandle {
        data: Signal::new(None),
        error: Signal::new(None),
        loading: Signal::new(false),
        response: Signal::new(None),
        inner: Rc::new(FetchInner {
            transport,
            url: url.into(),
            config,
            options,
        }),
    };

    match &handle.inner.config.params {
        MaybeSignal::Signal(params) => {
            let watcher = handle.clone();
            params.watch(move || watcher.execute(None));
        }
        MaybeSignal::Value(_) => {
            if handle.inner.options.immediate {
                handle.execute(None);
            }
        }
    }

    handle
}

#[cfg(target_arch = "wasm32")]
fn spawn(fut: impl Future<Output = ()> + 'static) {
    wasm_bindgen_futures::spawn_local(fut);
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn(fut: impl Future<Output = ()> + 'static) {
    tokio::task::spawn_local(fut);
}
