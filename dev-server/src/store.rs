//! The in-memory post store. A `Mutex<Vec>` is plenty for a dev backend.

use std::sync::Mutex;

use jiff::Timestamp;
use payloads::{Post, PostId, requests};

#[derive(Default)]
pub struct PostStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    posts: Vec<Post>,
    last_id: i64,
}

/// A filtered, paginated slice of the store plus the pre-pagination total.
pub struct PostPage {
    pub posts: Vec<Post>,
    pub total: usize,
}

impl PostStore {
    pub fn create(&self, details: &requests::CreatePost) -> Post {
        let mut inner = self.inner.lock().unwrap();
        inner.last_id += 1;
        let post = Post {
            id: PostId(inner.last_id),
            title: details.title.clone(),
            content: details.content.clone(),
            created_at: Timestamp::now(),
        };
        inner.posts.push(post.clone());
        post
    }

    pub fn get(&self, id: PostId) -> Option<Post> {
        let inner = self.inner.lock().unwrap();
        inner.posts.iter().find(|post| post.id == id).cloned()
    }

    pub fn update(
        &self,
        id: PostId,
        details: &requests::UpdatePost,
    ) -> Option<Post> {
        let mut inner = self.inner.lock().unwrap();
        let post = inner.posts.iter_mut().find(|post| post.id == id)?;
        post.title = details.title.clone();
        post.content = details.content.clone();
        Some(post.clone())
    }

    pub fn delete(&self, id: PostId) -> bool {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.posts.len();
        inner.posts.retain(|post| post.id != id);
        inner.posts.len() != before
    }

    /// Page through posts, 1-indexed, optionally filtering on a title
    /// substring. The total counts all matches, not just the page.
    pub fn page(
        &self,
        page: i64,
        limit: i64,
        title_like: Option<&str>,
    ) -> PostPage {
        let page = page.max(1);
        let limit = limit.max(0);
        let inner = self.inner.lock().unwrap();
        let matches: Vec<&Post> = inner
            .posts
            .iter()
            .filter(|post| {
                title_like.is_none_or(|needle| post.title.contains(needle))
            })
            .collect();
        let total = matches.len();
        let posts = matches
            .into_iter()
            .skip(((page - 1) * limit) as usize)
            .take(limit as usize)
            .cloned()
            .collect();
        PostPage { posts, total }
    }
}
