use yew::prelude::*;

#[function_component]
pub fn AboutPage() -> Html {
    html! {
        <div>
            <h1 class="text-2xl font-bold">{"About"}</h1>
            <p class="mt-2 text-gray-600 dark:text-gray-300">
                {"A posts browser backed by a small JSON API. The list view \
                  re-fetches automatically when the page changes; everything \
                  else is plain CRUD."}
            </p>
        </div>
    }
}
