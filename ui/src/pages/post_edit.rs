use payloads::PostId;
use payloads::requests::UpdatePost;
use yew::prelude::*;

use crate::components::post_form::{PostForm, PostFormValues};
use crate::get_api_client;
use crate::hooks::{use_post, use_post_nav};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: i64,
}

#[function_component]
pub fn PostEditPage(props: &Props) -> Html {
    let post = use_post(props.id);
    let nav = use_post_nav();
    let error_message = use_state(|| None::<String>);
    let is_saving = use_state(|| false);

    let on_submit = {
        let id = props.id;
        let to_post = nav.to_post.clone();
        let error_message = error_message.clone();
        let is_saving = is_saving.clone();

        Callback::from(move |values: PostFormValues| {
            let to_post = to_post.clone();
            let error_message = error_message.clone();
            let is_saving = is_saving.clone();

            yew::platform::spawn_local(async move {
                is_saving.set(true);
                error_message.set(None);

                let api_client = get_api_client();
                let details = UpdatePost {
                    title: values.title,
                    content: values.content,
                };
                match api_client.update_post(&PostId(id), &details).await {
                    Ok(post) => to_post.emit(post.id),
                    Err(e) => error_message.set(Some(e.to_string())),
                }

                is_saving.set(false);
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

    let Some(existing) = &post.snapshot.data else {
        return html! {};
    };

    html! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold">{"Edit post"}</h1>
            {if let Some(error) = &*error_message {
                html! {
                    <p class="text-sm text-red-700 dark:text-red-400">{error}</p>
                }
            } else {
                html! {}
            }}
            <PostForm
                initial_title={existing.title.clone()}
                initial_content={existing.content.clone()}
                submit_label="Save changes"
                is_busy={*is_saving}
                {on_submit}
            />
        </div>
    }
}
