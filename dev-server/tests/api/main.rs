mod fetch;
mod posts;

use dev_server::spawn_app;
use payloads::requests::PostQuery;

#[tokio::test]
async fn empty_store_lists_nothing() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let list = app.client.list_posts(&PostQuery::default()).await?;
    assert!(list.posts.is_empty());
    assert_eq!(list.total_count, 0);

    Ok(())
}
