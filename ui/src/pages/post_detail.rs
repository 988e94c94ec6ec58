use payloads::PostId;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{use_post, use_post_nav};
use crate::{Route, get_api_client};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: i64,
}

#[function_component]
pub fn PostDetailPage(props: &Props) -> Html {
    let post = use_post(props.id);
    let nav = use_post_nav();
    let delete_error = use_state(|| None::<String>);
    let is_deleting = use_state(|| false);

    let on_delete = {
        let id = props.id;
        let to_list = nav.to_list.clone();
        let delete_error = delete_error.clone();
        let is_deleting = is_deleting.clone();

        Callback::from(move |_: MouseEvent| {
            let to_list = to_list.clone();
            let delete_error = delete_error.clone();
            let is_deleting = is_deleting.clone();

            yew::platform::spawn_local(async move {
                is_deleting.set(true);
                delete_error.set(None);

                let api_client = get_api_client();
                match api_client.delete_post(&PostId(id)).await {
                    Ok(()) => to_list.emit(()),
                    Err(e) => delete_error.set(Some(e.to_string())),
                }

                is_deleting.set(false);
            });
        })
    };

    if post.snapshot.is_initial_loading() {
        return html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">{"Loading post..."}</p>
            </div>
        };
    }

    if let Some(error) = &post.snapshot.error {
        return html! {
            <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border \
                       border-red-200 dark:border-red-800">
                <p class="text-sm text-red-700 dark:text-red-400">
                    {format!("Error loading post: {}", error)}
                </p>
            </div>
        };
    }

    let Some(post) = &post.snapshot.data else {
        return html! {};
    };

    html! {
        <article class="space-y-4">
            <h1 class="text-2xl font-bold">{&post.title}</h1>
            <p class="text-sm text-gray-500 dark:text-gray-400">
                {format!("Created {}", post.created_at.strftime("%Y-%m-%d %H:%M"))}
            </p>
            <p class="whitespace-pre-wrap text-gray-700 dark:text-gray-200">{&post.content}</p>

            {if let Some(error) = &*delete_error {
                html! {
                    <p class="text-sm text-red-700 dark:text-red-400">{error}</p>
                }
            } else {
                html! {}
            }}

            <div class="flex items-center space-x-3 pt-2">
                <Link<Route>
                    to={Route::PostEdit { id: post.id.0 }}
                    classes="px-3 py-1.5 rounded-md text-sm font-medium border \
                             border-gray-300 dark:border-gray-600 \
                             hover:bg-gray-50 dark:hover:bg-gray-800"
                >
                    {"Edit"}
                </Link<Route>>
                <button
                    onclick={on_delete}
                    disabled={*is_deleting}
                    class="px-3 py-1.5 rounded-md text-sm font-medium text-white \
                           bg-red-600 hover:bg-red-700 disabled:opacity-50"
                >
                    {if *is_deleting { "Deleting..." } else { "Delete" }}
                </button>
                <Link<Route>
                    to={Route::Posts}
                    classes="text-sm text-blue-600 hover:underline"
                >
                    {"Back to posts"}
                </Link<Route>>
            </div>
        </article>
    }
}
