use payloads::requests::PostQuery;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::PaginationControls;
use crate::hooks::use_post_list;

const PAGE_SIZE: i64 = 10;

#[function_component]
pub fn PostListPage() -> Html {
    let page = use_state(|| 1i64);
    let list = use_post_list(PostQuery {
        page: *page,
        limit: PAGE_SIZE,
        title_like: None,
    });

    let on_page_change = {
        let page = page.clone();
        Callback::from(move |new_page| page.set(new_page))
    };

    let body = if list.snapshot.is_initial_loading() {
        html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">{"Loading posts..."}</p>
            </div>
        }
    } else if let Some(error) = &list.snapshot.error {
        html! {
            <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border \
                       border-red-200 dark:border-red-800">
                <p class="text-sm text-red-700 dark:text-red-400">
                    {format!("Error loading posts: {}", error)}
                </p>
            </div>
        }
    } else if let Some(posts) = &list.snapshot.data {
        if posts.is_empty() {
            html! {
                <p class="text-neutral-600 dark:text-neutral-400">{"No posts yet."}</p>
            }
        } else {
            html! {
                <ul class="space-y-3">
                    {for posts.iter().map(|post| html! {
                        <li class="p-4 rounded-md border border-gray-200 dark:border-gray-700 \
                                   hover:bg-gray-50 dark:hover:bg-gray-800">
                            <Link<Route> to={Route::PostDetail { id: post.id.0 }}>
                                <h2 class="font-semibold">{&post.title}</h2>
                                <p class="mt-1 text-sm text-gray-600 dark:text-gray-400 truncate">
                                    {&post.content}
                                </p>
                            </Link<Route>>
                        </li>
                    })}
                </ul>
            }
        }
    } else {
        html! {}
    };

    html! {
        <div>
            <div class="flex justify-between items-center mb-6">
                <h1 class="text-2xl font-bold">{"Posts"}</h1>
                <Link<Route>
                    to={Route::PostCreate}
                    classes="px-3 py-1.5 rounded-md text-sm font-medium text-white \
                             bg-blue-600 hover:bg-blue-700"
                >
                    {"New post"}
                </Link<Route>>
            </div>
            {body}
            <PaginationControls
                page={*page}
                limit={PAGE_SIZE}
                total_count={list.snapshot.total_count.unwrap_or(0)}
                is_loading={list.snapshot.loading}
                {on_page_change}
            />
        </div>
    }
}
