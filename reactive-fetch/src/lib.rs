//! A reactive wrapper around one HTTP call.
//!
//! [`use_fetch`] returns a [`FetchHandle`] whose `data`, `error`, `loading`
//! and `response` fields are [`Signal`]s a UI layer can subscribe to. When
//! the request parameters are themselves a [`Signal`], the fetch re-runs
//! automatically on every change; otherwise it runs once at construction
//! (unless `immediate` is disabled) and on manual `execute` calls.
//!
//! The HTTP side goes through the [`Transport`] trait; [`HttpTransport`]
//! is the reqwest-backed implementation with an explicit per-instance base
//! address.

pub mod hook;
pub mod signal;
pub mod transport;

pub use hook::{FetchConfig, FetchHandle, FetchOptions, use_fetch};
pub use signal::{MaybeSignal, Signal};
pub use transport::{
    FetchError, FetchRequest, FetchResponse, HttpTransport, Method,
    TOTAL_COUNT_HEADER, Transport,
};
