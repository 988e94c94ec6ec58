use dev_server::spawn_app;
use payloads::requests::{PostQuery, UpdatePost};

#[tokio::test]
async fn create_read_update_delete_post() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let post = app.create_test_post("hello").await?;
    assert_eq!(post.title, "hello");

    let fetched = app.client.get_post(&post.id).await?;
    assert_eq!(fetched, post);

    let updated = app
        .client
        .update_post(
            &post.id,
            &UpdatePost {
                title: "hello again".to_string(),
                content: "revised".to_string(),
            },
        )
        .await?;
    assert_eq!(updated.title, "hello again");
    assert_eq!(updated.id, post.id);
    // creation time survives updates
    assert_eq!(updated.created_at, post.created_at);

    app.client.delete_post(&post.id).await?;
    assert!(
        app.client
            .get_post(&post.id)
            .await
            .unwrap_err()
            .to_string()
            .contains("not found")
    );

    Ok(())
}

#[tokio::test]
async fn listing_pages_and_reports_the_total() -> anyhow::Result<()> {
    let app = spawn_app().await;
    for i in 0..12 {
        app.create_test_post(&format!("post {i}")).await?;
    }

    let first = app.client.list_posts(&PostQuery::default()).await?;
    assert_eq!(first.posts.len(), 10);
    assert_eq!(first.total_count, 12);

    let second = app.client.list_posts(&PostQuery::page(2)).await?;
    assert_eq!(second.posts.len(), 2);
    assert_eq!(second.total_count, 12);
    assert_eq!(second.posts[0].title, "post 10");

    Ok(())
}

#[tokio::test]
async fn title_filter_narrows_the_listing() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_test_post("rust notes").await?;
    app.create_test_post("shopping list").await?;
    app.create_test_post("more rust notes").await?;

    let query = PostQuery {
        title_like: Some("rust".to_string()),
        ..PostQuery::default()
    };
    let list = app.client.list_posts(&query).await?;
    assert_eq!(list.total_count, 2);
    assert!(list.posts.iter().all(|post| post.title.contains("rust")));

    Ok(())
}

#[tokio::test]
async fn mutations_on_missing_posts_fail_cleanly() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let id = payloads::PostId(999);
    let err = app
        .client
        .update_post(
            &id,
            &UpdatePost {
                title: "x".to_string(),
                content: "y".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert!(err.to_string().contains("not found"));

    let err = app.client.delete_post(&id).await.unwrap_err();
    assert!(err.to_string().contains("not found"));

    Ok(())
}
