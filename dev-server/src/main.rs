//! Development server for UI work.
//!
//! Runs the in-memory posts API on port 5000 (the address the UI defaults
//! to) with a handful of seeded posts.
//!
//! Usage: cargo run -p dev-server

use actix_web::web;
use anyhow::Result;
use dev_server::store::PostStore;
use dev_server::{Config, build, telemetry};
use payloads::requests::CreatePost;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = telemetry::get_subscriber("info".into());
    telemetry::init_subscriber(subscriber);

    let store = web::Data::new(PostStore::default());
    seed_posts(&store);

    let mut config = Config {
        ip: "127.0.0.1".into(),
        port: 5000,
    };
    let server = build(&mut config, store)?;
    tokio::spawn(server);

    info!("posts API running on http://127.0.0.1:{}", config.port);
    info!(
        "UI: cd ui && BACKEND_URL=http://127.0.0.1:{} trunk serve",
        config.port
    );
    info!("Press Ctrl+C to shutdown");

    tokio::signal::ctrl_c().await?;
    info!("shutting down");
    Ok(())
}

fn seed_posts(store: &PostStore) {
    let seeds = [
        ("Getting started", "A first post to have something to render."),
        ("Pagination", "Create a dozen posts and the list view pages."),
        ("Reactive params", "Changing the page re-fetches automatically."),
        ("Editing", "Posts can be updated and deleted from the UI."),
    ];
    for (title, content) in seeds {
        store.create(&CreatePost {
            title: title.to_string(),
            content: content.to_string(),
        });
    }
    info!("seeded {} posts", seeds.len());
}
