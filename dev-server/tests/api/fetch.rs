//! The fetch core driven against the real HTTP surface.

use std::rc::Rc;
use std::time::Duration;

use dev_server::spawn_app;
use payloads::Post;
use reactive_fetch::{
    FetchConfig, FetchError, FetchHandle, FetchOptions, HttpTransport,
    Method, Signal, use_fetch,
};
use serde_json::json;

fn page_query(page: i64, limit: i64) -> Vec<(String, String)> {
    vec![
        ("_page".to_string(), page.to_string()),
        ("_limit".to_string(), limit.to_string()),
    ]
}

/// Wait for the in-flight call to settle.
async fn wait_settled<T>(handle: &FetchHandle<T>) {
    for _ in 0..500 {
        if !handle.loading.get() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("fetch did not settle");
}

#[tokio::test]
async fn reactive_page_param_refetches_over_http() -> anyhow::Result<()> {
    let app = spawn_app().await;
    for i in 0..3 {
        app.create_test_post(&format!("post {i}")).await?;
    }

    let local = tokio::task::LocalSet::new();
    local
        .run_until(async {
            let transport = Rc::new(HttpTransport::new(app.address.clone()));
            let params = Signal::new(page_query(1, 2));
            let config = FetchConfig {
                params: params.clone().into(),
                ..FetchConfig::default()
            };
            let handle: FetchHandle<Vec<Post>> = use_fetch(
                transport,
                "/posts",
                config,
                FetchOptions::default(),
            );

            wait_settled(&handle).await;
            assert_eq!(handle.data.get().unwrap().len(), 2);
            assert_eq!(handle.response.get(), Some("3".to_string()));

            params.set(page_query(2, 2));
            wait_settled(&handle).await;
            let second_page = handle.data.get().unwrap();
            assert_eq!(second_page.len(), 1);
            assert_eq!(second_page[0].title, "post 2");
            anyhow::Ok(())
        })
        .await
}

#[tokio::test]
async fn manual_execute_posts_an_object_body() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let local = tokio::task::LocalSet::new();
    local
        .run_until(async {
            let transport = Rc::new(HttpTransport::new(app.address.clone()));
            let config = FetchConfig {
                method: Method::POST,
                ..FetchConfig::default()
            };
            let options = FetchOptions {
                immediate: false,
                ..FetchOptions::default()
            };
            let handle: FetchHandle<Post> =
                use_fetch(transport, "/posts", config, options);
            assert!(!handle.loading.get());

            handle.execute(Some(json!({
                "title": "from the hook",
                "content": "posted through execute",
            })));
            wait_settled(&handle).await;

            let created = handle.data.get().expect("post should be created");
            assert_eq!(created.title, "from the hook");
            anyhow::Ok(())
        })
        .await?;

    // the mutation really reached the store
    let list = app
        .client
        .list_posts(&payloads::requests::PostQuery::default())
        .await?;
    assert_eq!(list.total_count, 1);
    Ok(())
}

#[tokio::test]
async fn missing_post_surfaces_a_status_error() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let local = tokio::task::LocalSet::new();
    local
        .run_until(async {
            let transport = Rc::new(HttpTransport::new(app.address.clone()));
            let handle: FetchHandle<Post> = use_fetch(
                transport,
                "/posts/999",
                FetchConfig::default(),
                FetchOptions::default(),
            );

            wait_settled(&handle).await;
            assert_eq!(handle.data.get(), None);
            match handle.error.get() {
                Some(FetchError::Status(404, text)) => {
                    assert!(text.contains("not found"))
                }
                other => panic!("expected a 404 status error, got {other:?}"),
            }
            anyhow::Ok(())
        })
        .await
}
