use serde::{Deserialize, Serialize};

use crate::Post;

/// One page of posts plus the pre-pagination total from the
/// `X-Total-Count` response header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostList {
    pub posts: Vec<Post>,
    pub total_count: i64,
}
