use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// Catch-all for paths the route table does not recognize.
#[function_component]
pub fn NotFoundPage() -> Html {
    html! {
        <div class="text-center py-12 space-y-4">
            <h1 class="text-4xl font-bold">{"404"}</h1>
            <p class="text-gray-600 dark:text-gray-300">
                {"There is nothing at this address."}
            </p>
            <Link<Route>
                to={Route::Posts}
                classes="inline-block text-sm text-blue-600 hover:underline"
            >
                {"Browse the posts instead"}
            </Link<Route>>
        </div>
    }
}
