use payloads::{Post, requests::PostQuery};
use reactive_fetch::{FetchConfig, FetchOptions, Signal, use_fetch};
use yew::prelude::*;

use super::{FetchSnapshot, use_fetch_signals};
use crate::get_transport;

/// Hook return type for the posts listing
pub struct PostListHandle {
    pub snapshot: FetchSnapshot<Vec<Post>>,
    pub refetch: Callback<()>,
}

/// Fetches one page of posts, re-fetching automatically whenever the
/// query changes.
#[hook]
pub fn use_post_list(query: PostQuery) -> PostListHandle {
    let params = use_mut_ref(|| Signal::new(query.to_query_pairs()));

    let (handle, snapshot) = {
        let params = params.clone();
        use_fetch_signals(move || {
            let params = params.borrow().clone();
            use_fetch(
                get_transport(),
                "/posts",
                FetchConfig {
                    params: params.into(),
                    ..FetchConfig::default()
                },
                FetchOptions::default(),
            )
        })
    };

    // Feed query changes into the signal; writes of an equal query are
    // ignored there, so re-renders alone never re-fetch.
    {
        let params = params.clone();
        use_effect_with(query, move |query| {
            params.borrow().set(query.to_query_pairs());
        });
    }

    let refetch = {
        let handle = handle.clone();
        Callback::from(move |_| handle.execute(None))
    };

    PostListHandle { snapshot, refetch }
}
