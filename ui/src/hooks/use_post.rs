use payloads::Post;
use reactive_fetch::{FetchConfig, FetchOptions, use_fetch};
use yew::prelude::*;

use super::{FetchSnapshot, use_fetch_signals};
use crate::get_transport;

/// Hook return type for a single post
pub struct PostHandle {
    pub snapshot: FetchSnapshot<Post>,
    pub refetch: Callback<()>,
}

/// Fetches one post by id. Callers key their component on the id so
/// navigating between posts starts a fresh fetch.
#[hook]
pub fn use_post(id: i64) -> PostHandle {
    let (handle, snapshot) = use_fetch_signals(move || {
        use_fetch(
            get_transport(),
            format!("/posts/{id}"),
            FetchConfig::default(),
            FetchOptions::default(),
        )
    });

    let refetch = {
        let handle = handle.clone();
        Callback::from(move |_| handle.execute(None))
    };

    PostHandle { snapshot, refetch }
}
