use actix_web::{
    HttpResponse, delete, dev::HttpServiceFactory, get, post, put, web,
};
use payloads::api_client::TOTAL_COUNT_HEADER;
use payloads::{PostId, requests};
use serde::Deserialize;

use crate::store::PostStore;

pub fn api_services() -> impl HttpServiceFactory {
    web::scope("/posts")
        .service(list_posts)
        .service(get_post)
        .service(create_post)
        .service(update_post)
        .service(delete_post)
}

/// Query names follow the `_page`/`_limit` convention of the JSON API the
/// UI was written against.
#[derive(Debug, Deserialize)]
struct ListParams {
    #[serde(rename = "_page", default = "default_page")]
    page: i64,
    #[serde(rename = "_limit", default = "default_limit")]
    limit: i64,
    title_like: Option<String>,
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    10
}

#[tracing::instrument(skip(store))]
#[get("")]
async fn list_posts(
    query: web::Query<ListParams>,
    store: web::Data<PostStore>,
) -> HttpResponse {
    let page =
        store.page(query.page, query.limit, query.title_like.as_deref());
    HttpResponse::Ok()
        .insert_header((TOTAL_COUNT_HEADER, page.total.to_string()))
        .json(page.posts)
}

#[tracing::instrument(skip(store))]
#[get("/{id}")]
async fn get_post(
    path: web::Path<i64>,
    store: web::Data<PostStore>,
) -> HttpResponse {
    let id = PostId(path.into_inner());
    match store.get(id) {
        Some(post) => HttpResponse::Ok().json(post),
        None => not_found(id),
    }
}

#[tracing::instrument(skip(store))]
#[post("")]
async fn create_post(
    details: web::Json<requests::CreatePost>,
    store: web::Data<PostStore>,
) -> HttpResponse {
    HttpResponse::Created().json(store.create(&details))
}

#[tracing::instrument(skip(store))]
#[put("/{id}")]
async fn update_post(
    path: web::Path<i64>,
    details: web::Json<requests::UpdatePost>,
    store: web::Data<PostStore>,
) -> HttpResponse {
    let id = PostId(path.into_inner());
    match store.update(id, &details) {
        Some(post) => HttpResponse::Ok().json(post),
        None => not_found(id),
    }
}

#[tracing::instrument(skip(store))]
#[delete("/{id}")]
async fn delete_post(
    path: web::Path<i64>,
    store: web::Data<PostStore>,
) -> HttpResponse {
    let id = PostId(path.into_inner());
    if store.delete(id) {
        HttpResponse::Ok().finish()
    } else {
        not_found(id)
    }
}

fn not_found(id: PostId) -> HttpResponse {
    HttpResponse::NotFound().body(format!("Post {id} not found"))
}
