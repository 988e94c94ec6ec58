//! In-memory posts backend for UI development and integration tests.
//!
//! Stands in for the JSON API the app talks to in production: the five
//! posts CRUD routes, `_page`/`_limit` pagination with an `X-Total-Count`
//! header, and permissive CORS so a locally served UI can call it.

use std::net::TcpListener;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};

use crate::store::PostStore;

pub mod routes;
pub mod store;
pub mod telemetry;

pub struct Config {
    /// set to "0.0.0.0" for public access, "127.0.0.1" for local dev
    pub ip: String,
    /// set to 0 to get an os-assigned port
    pub port: u16,
}

/// Build the server, but not await it.
///
/// Returns the port that the server has bound to by modifying the config.
pub fn build(
    config: &mut Config,
    store: web::Data<PostStore>,
) -> std::io::Result<Server> {
    let listener = TcpListener::bind(format!("{}:{}", config.ip, config.port))?;
    config.port = listener.local_addr()?.port();
    let server = HttpServer::new(move || {
        // Development-only server: any origin may call it, and the
        // total-count header must be readable from the browser.
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .expose_any_header();
        App::new()
            .wrap(cors)
            .service(routes::api_services())
            .app_data(store.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}

/// A running server instance plus a client pointed at it.
pub struct TestApp {
    pub port: u16,
    pub address: String,
    pub client: payloads::APIClient,
    pub store: web::Data<PostStore>,
}

/// Start the server on an ephemeral port.
pub async fn spawn_app() -> TestApp {
    use tracing_subscriber::util::SubscriberInitExt;

    let subscriber = telemetry::get_subscriber("error".into());
    let _ = tracing_log::LogTracer::init();
    let _ = subscriber.try_init();

    let store = web::Data::new(PostStore::default());
    let mut config = Config {
        ip: "127.0.0.1".into(),
        port: 0,
    };
    let server = build(&mut config, store.clone()).unwrap();
    tokio::spawn(server);

    let address = format!("http://127.0.0.1:{}", config.port);
    TestApp {
        port: config.port,
        client: payloads::APIClient::new(address.clone()),
        address,
        store,
    }
}

impl TestApp {
    /// Create a post with generated content, for tests.
    pub async fn create_test_post(
        &self,
        title: &str,
    ) -> Result<payloads::Post, payloads::ClientError> {
        self.client
            .create_post(&payloads::requests::CreatePost {
                title: title.to_string(),
                content: format!("{title} content"),
            })
            .await
    }
}
