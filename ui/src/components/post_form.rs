use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct PostFormValues {
    pub title: String,
    pub content: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub initial_title: String,
    #[prop_or_default]
    pub initial_content: String,
    pub submit_label: AttrValue,
    pub on_submit: Callback<PostFormValues>,
    #[prop_or(false)]
    pub is_busy: bool,
}

/// Shared create/edit post form.
#[function_component]
pub fn PostForm(props: &Props) -> Html {
    let title_ref = use_node_ref();
    let content_ref = use_node_ref();
    let error_message = use_state(|| None::<String>);

    let on_submit = {
        let title_ref = title_ref.clone();
        let content_ref = content_ref.clone();
        let error_message = error_message.clone();
        let on_submit = props.on_submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let title = title_ref.cast::<HtmlInputElement>().unwrap().value();
            let content =
                content_ref.cast::<HtmlTextAreaElement>().unwrap().value();

            if title.trim().is_empty() {
                error_message
                    .set(Some("Please enter a title".to_string()));
                return;
            }

            error_message.set(None);
            on_submit.emit(PostFormValues { title, content });
        })
    };

    let input_class = "w-full px-3 py-2 border border-neutral-300 \
                       dark:border-neutral-600 rounded-md bg-white \
                       dark:bg-neutral-700 text-gray-900 dark:text-gray-100";

    html! {
        <form onsubmit={on_submit} class="space-y-4">
            {if let Some(error) = &*error_message {
                html! {
                    <div class="p-3 rounded-md bg-red-50 dark:bg-red-900/20 \
                               border border-red-200 dark:border-red-800">
                        <p class="text-sm text-red-700 dark:text-red-400">{error}</p>
                    </div>
                }
            } else {
                html! {}
            }}
            <div>
                <label class="block text-sm font-medium mb-1">{"Title"}</label>
                <input
                    ref={title_ref}
                    type="text"
                    class={input_class}
                    value={props.initial_title.clone()}
                />
            </div>
            <div>
                <label class="block text-sm font-medium mb-1">{"Content"}</label>
                <textarea
                    ref={content_ref}
                    rows="8"
                    class={input_class}
                    value={props.initial_content.clone()}
                />
            </div>
            <button
                type="submit"
                disabled={props.is_busy}
                class="px-4 py-2 rounded-md text-sm font-medium text-white \
                       bg-blue-600 hover:bg-blue-700 disabled:opacity-50"
            >
                {props.submit_label.clone()}
            </button>
        </form>
    }
}
