use payloads::PostId;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// Where the mutation flows land: create and edit redirect to the saved
/// post, delete falls back to the listing.
pub struct PostNav {
    pub to_post: Callback<PostId>,
    pub to_list: Callback<()>,
}

/// Navigation callbacks for the post mutation flows. Both scroll back to
/// the top, since the forms submit from the bottom of the page.
#[hook]
pub fn use_post_nav() -> PostNav {
    let navigator = use_navigator().unwrap();

    let to_post = {
        let navigator = navigator.clone();
        Callback::from(move |id: PostId| {
            navigator.push(&Route::PostDetail { id: id.0 });
            scroll_to_top();
        })
    };
    let to_list = Callback::from(move |_| {
        navigator.push(&Route::Posts);
        scroll_to_top();
    });

    PostNav { to_post, to_list }
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
