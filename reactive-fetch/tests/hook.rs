//! Fetch-hook contract tests, driven through a scripted transport whose
//! settlement order the test controls.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use futures::channel::oneshot;
use futures::future::LocalBoxFuture;
use serde::Deserialize;
use serde_json::json;

use reactive_fetch::{
    FetchConfig, FetchError, FetchHandle, FetchOptions, FetchRequest,
    FetchResponse, MaybeSignal, Method, Signal, Transport, use_fetch,
};

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct Item {
    id: i64,
    title: String,
}

/// Records every request and hands back a future the test settles
/// explicitly.
#[derive(Default)]
struct ScriptedTransport {
    requests: RefCell<Vec<FetchRequest>>,
    pending: RefCell<VecDeque<oneshot::Sender<Result<FetchResponse, FetchError>>>>,
}

impl ScriptedTransport {
    fn requests(&self) -> Vec<FetchRequest> {
        self.requests.borrow().clone()
    }

    fn settle(&self, result: Result<FetchResponse, FetchError>) {
        let sender = self
            .pending
            .borrow_mut()
            .pop_front()
            .expect("no in-flight request to settle");
        sender.send(result).expect("hook dropped the in-flight call");
    }

    /// Settle the nth oldest in-flight request, out of order.
    fn settle_nth(&self, n: usize, result: Result<FetchResponse, FetchError>) {
        let sender = self.pending.borrow_mut().remove(n).unwrap();
        sender.send(result).expect("hook dropped the in-flight call");
    }
}

impl Transport for ScriptedTransport {
    fn send(
        &self,
        request: FetchRequest,
    ) -> LocalBoxFuture<'static, Result<FetchResponse, FetchError>> {
        self.requests.borrow_mut().push(request);
        let (tx, rx) = oneshot::channel();
        self.pending.borrow_mut().push_back(tx);
        Box::pin(async move { rx.await.expect("transport dropped") })
    }
}

fn ok_json(body: serde_json::Value, total: Option<&str>) -> FetchResponse {
    let mut headers = HashMap::new();
    if let Some(total) = total {
        headers.insert("x-total-count".to_string(), total.to_string());
    }
    FetchResponse {
        status: 200,
        headers,
        body: serde_json::to_vec(&body).unwrap(),
    }
}

fn item_json(id: i64, title: &str) -> serde_json::Value {
    json!({ "id": id, "title": title })
}

/// Let spawned settlement tasks run on the LocalSet.
async fn drain() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}

/// Run a test body inside a current-thread LocalSet, since the hook
/// spawns !Send settlement tasks.
macro_rules! local_test {
    ($body:expr) => {{
        let local = tokio::task::LocalSet::new();
        local.run_until($body).await
    }};
}

#[tokio::test(flavor = "current_thread")]
async fn loading_is_raised_and_state_cleared_before_settlement() {
    local_test!(async {
        let transport = Rc::new(ScriptedTransport::default());
        let handle: FetchHandle<Item> = use_fetch(
            transport.clone(),
            "/posts/1",
            FetchConfig::default(),
            FetchOptions::default(),
        );

        // execute ran synchronously at construction, up to the suspension
        assert!(handle.loading.get());
        assert_eq!(handle.data.get(), None);
        assert_eq!(handle.error.get(), None);

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::GET);
        assert_eq!(requests[0].url, "/posts/1");
        assert_eq!(requests[0].body, None);
    })
}

#[tokio::test(flavor = "current_thread")]
async fn successful_settlement_populates_data_and_calls_back_once() {
    local_test!(async {
        let transport = Rc::new(ScriptedTransport::default());
        let successes = Rc::new(Cell::new(0));
        let failures = Rc::new(Cell::new(0));
        let options = FetchOptions {
            on_success: Some(Rc::new({
                let successes = successes.clone();
                move |_: &FetchResponse| successes.set(successes.get() + 1)
            })),
            on_error: Some(Rc::new({
                let failures = failures.clone();
                move |_: &FetchError| failures.set(failures.get() + 1)
            })),
            ..FetchOptions::default()
        };
        let handle: FetchHandle<Item> = use_fetch(
            transport.clone(),
            "/posts/1",
            FetchConfig::default(),
            options,
        );

        transport.settle(Ok(ok_json(item_json(1, "hello"), Some("1"))));
        drain().await;

        assert_eq!(
            handle.data.get(),
            Some(Item {
                id: 1,
                title: "hello".to_string()
            })
        );
        assert_eq!(handle.error.get(), None);
        assert!(!handle.loading.get());
        assert_eq!(handle.response.get(), Some("1".to_string()));
        assert_eq!(successes.get(), 1);
        assert_eq!(failures.get(), 0);
    })
}

#[tokio::test(flavor = "current_thread")]
async fn network_failure_populates_error_and_calls_back_once() {
    local_test!(async {
        let transport = Rc::new(ScriptedTransport::default());
        let failures = Rc::new(Cell::new(0));
        let options = FetchOptions {
            on_error: Some(Rc::new({
                let failures = failures.clone();
                move |_: &FetchError| failures.set(failures.get() + 1)
            })),
            ..FetchOptions::default()
        };
        let handle: FetchHandle<Item> = use_fetch(
            transport.clone(),
            "/posts/1",
            FetchConfig::default(),
            options,
        );

        transport.settle(Err(FetchError::Network("connection refused".into())));
        drain().await;

        assert_eq!(handle.data.get(), None);
        assert_eq!(
            handle.error.get(),
            Some(FetchError::Network("connection refused".into()))
        );
        assert!(!handle.loading.get());
        assert_eq!(failures.get(), 1);
    })
}

#[tokio::test(flavor = "current_thread")]
async fn http_error_status_is_surfaced_as_error() {
    local_test!(async {
        let transport = Rc::new(ScriptedTransport::default());
        let handle: FetchHandle<Item> = use_fetch(
            transport.clone(),
            "/posts/999",
            FetchConfig::default(),
            FetchOptions::default(),
        );

        transport.settle(Ok(FetchResponse {
            status: 404,
            headers: HashMap::new(),
            body: b"post 999 not found".to_vec(),
        }));
        drain().await;

        assert_eq!(handle.data.get(), None);
        assert_eq!(
            handle.error.get(),
            Some(FetchError::Status(404, "post 999 not found".to_string()))
        );
        assert!(!handle.loading.get());
    })
}

#[tokio::test(flavor = "current_thread")]
async fn undecodable_payload_is_surfaced_as_error() {
    local_test!(async {
        let transport = Rc::new(ScriptedTransport::default());
        let handle: FetchHandle<Item> = use_fetch(
            transport.clone(),
            "/posts/1",
            FetchConfig::default(),
            FetchOptions::default(),
        );

        transport.settle(Ok(FetchResponse {
            status: 200,
            headers: HashMap::new(),
            body: b"<html>not json</html>".to_vec(),
        }));
        drain().await;

        assert_eq!(handle.data.get(), None);
        assert!(matches!(handle.error.get(), Some(FetchError::Decode(_))));
        assert!(!handle.loading.get());
    })
}

#[tokio::test(flavor = "current_thread")]
async fn sequential_executes_are_independent_cycles() {
    local_test!(async {
        let transport = Rc::new(ScriptedTransport::default());
        let handle: FetchHandle<Item> = use_fetch(
            transport.clone(),
            "/posts/1",
            FetchConfig::default(),
            FetchOptions::default(),
        );
        transport.settle(Ok(ok_json(item_json(1, "first"), None)));
        drain().await;
        assert_eq!(handle.data.get().unwrap().title, "first");

        // Second cycle starts from a clean slate.
        handle.execute(None);
        assert!(handle.loading.get());
        assert_eq!(handle.data.get(), None);
        assert_eq!(handle.error.get(), None);

        transport.settle(Ok(ok_json(item_json(1, "second"), None)));
        drain().await;
        assert_eq!(handle.data.get().unwrap().title, "second");
        assert!(!handle.loading.get());
        assert_eq!(transport.requests().len(), 2);
    })
}

#[tokio::test(flavor = "current_thread")]
async fn error_then_success_clears_the_stale_error() {
    local_test!(async {
        let transport = Rc::new(ScriptedTransport::default());
        let handle: FetchHandle<Item> = use_fetch(
            transport.clone(),
            "/posts/1",
            FetchConfig::default(),
            FetchOptions::default(),
        );
        transport.settle(Err(FetchError::Network("reset".into())));
        drain().await;
        assert!(handle.error.get().is_some());

        handle.execute(None);
        assert_eq!(handle.error.get(), None);
        transport.settle(Ok(ok_json(item_json(1, "ok"), None)));
        drain().await;
        assert!(handle.error.get().is_none());
        assert!(handle.data.get().is_some());
    })
}

#[tokio::test(flavor = "current_thread")]
async fn reactive_params_fetch_on_construction_and_on_change() {
    local_test!(async {
        let transport = Rc::new(ScriptedTransport::default());
        let params =
            Signal::new(vec![("_page".to_string(), "1".to_string())]);
        let config = FetchConfig {
            params: params.clone().into(),
            ..FetchConfig::default()
        };
        let handle: FetchHandle<Vec<Item>> = use_fetch(
            transport.clone(),
            "/posts",
            config,
            FetchOptions::default(),
        );

        // one automatic call with page=1
        assert_eq!(transport.requests().len(), 1);
        assert_eq!(
            transport.requests()[0].query,
            vec![("_page".to_string(), "1".to_string())]
        );
        transport.settle(Ok(ok_json(json!([item_json(1, "a")]), Some("3"))));
        drain().await;

        // changing the reference triggers a second call, no manual execute
        params.set(vec![("_page".to_string(), "2".to_string())]);
        assert_eq!(transport.requests().len(), 2);
        assert_eq!(
            transport.requests()[1].query,
            vec![("_page".to_string(), "2".to_string())]
        );
        assert!(handle.loading.get());
        transport.settle(Ok(ok_json(json!([item_json(2, "b")]), Some("3"))));
        drain().await;
        assert_eq!(handle.data.get().unwrap()[0].id, 2);

        // rewriting an identical value does not re-fetch
        params.set(vec![("_page".to_string(), "2".to_string())]);
        assert_eq!(transport.requests().len(), 2);
    })
}

#[tokio::test(flavor = "current_thread")]
async fn non_reactive_params_with_immediate_false_stay_idle() {
    local_test!(async {
        let transport = Rc::new(ScriptedTransport::default());
        let config = FetchConfig {
            params: vec![("_page".to_string(), "1".to_string())].into(),
            ..FetchConfig::default()
        };
        let options = FetchOptions {
            immediate: false,
            ..FetchOptions::default()
        };
        let handle: FetchHandle<Vec<Item>> =
            use_fetch(transport.clone(), "/posts", config, options);

        drain().await;
        assert!(transport.requests().is_empty());
        assert!(!handle.loading.get());

        handle.execute(None);
        assert_eq!(transport.requests().len(), 1);
        assert!(handle.loading.get());
    })
}

#[tokio::test(flavor = "current_thread")]
async fn body_is_attached_only_when_it_is_an_object() {
    local_test!(async {
        let transport = Rc::new(ScriptedTransport::default());
        let config = FetchConfig {
            method: Method::POST,
            ..FetchConfig::default()
        };
        let options = FetchOptions {
            immediate: false,
            ..FetchOptions::default()
        };
        let handle: FetchHandle<Item> =
            use_fetch(transport.clone(), "/posts", config, options);

        handle.execute(Some(json!({ "title": "hi", "content": "there" })));
        handle.execute(Some(json!("not an object")));
        handle.execute(None);

        let requests = transport.requests();
        assert_eq!(requests[0].body, Some(json!({ "title": "hi", "content": "there" })));
        assert_eq!(requests[1].body, None);
        assert_eq!(requests[2].body, None);
    })
}

/// Two overlapping calls race; the later settlement wins, even when it
/// belongs to the earlier-issued request. This pins the intended
/// no-cancellation behavior.
#[tokio::test(flavor = "current_thread")]
async fn later_settling_response_wins_the_race() {
    local_test!(async {
        let transport = Rc::new(ScriptedTransport::default());
        let params =
            Signal::new(vec![("_page".to_string(), "1".to_string())]);
        let config = FetchConfig {
            params: params.clone().into(),
            ..FetchConfig::default()
        };
        let handle: FetchHandle<Vec<Item>> = use_fetch(
            transport.clone(),
            "/posts",
            config,
            FetchOptions::default(),
        );

        // second trigger before the first settles
        params.set(vec![("_page".to_string(), "2".to_string())]);
        assert_eq!(transport.requests().len(), 2);

        // the second-issued request settles first...
        transport.settle_nth(1, Ok(ok_json(json!([item_json(2, "page two")]), Some("2"))));
        drain().await;
        // ...then the first-issued one, which overwrites everything
        transport.settle_nth(0, Ok(ok_json(json!([item_json(1, "page one")]), Some("2"))));
        drain().await;

        assert_eq!(handle.data.get().unwrap()[0].title, "page one");
        assert!(!handle.loading.get());
    })
}
