use payloads::requests::CreatePost;
use yew::prelude::*;

use crate::components::post_form::{PostForm, PostFormValues};
use crate::get_api_client;
use crate::hooks::use_post_nav;

#[function_component]
pub fn PostCreatePage() -> Html {
    let nav = use_post_nav();
    let error_message = use_state(|| None::<String>);
    let is_saving = use_state(|| false);

    let on_submit = {
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
                let details = CreatePost {
                    title: values.title,
                    content: values.content,
                };
                match api_client.create_post(&details).await {
                    Ok(post) => to_post.emit(post.id),
                    Err(e) => error_message.set(Some(e.to_string())),
                }

                is_saving.set(false);
            });
        })
    };

    html! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold">{"New post"}</h1>
            {if let Some(error) = &*error_message {
                html! {
                    <p class="text-sm text-red-700 dark:text-red-400">{error}</p>
                }
            } else {
                html! {}
            }}
            <PostForm
                submit_label="Create post"
                is_busy={*is_saving}
                {on_submit}
            />
        </div>
    }
}
