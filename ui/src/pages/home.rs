use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::Route;
use crate::state::State;

#[function_component]
pub fn HomePage() -> Html {
    let (state, dispatch) = use_store::<State>();
    let on_increment = dispatch.reduce_mut_callback(|state| state.counter += 1);

    html! {
        <div class="space-y-8">
            <div>
                <h1 class="text-2xl font-bold">{"Home"}</h1>
                <p class="mt-2 text-gray-600 dark:text-gray-300">
                    {"A small posts app. Head over to "}
                    <Link<Route> to={Route::Posts} classes="text-blue-600 hover:underline">{"the posts"}</Link<Route>>
                    {" to browse."}
                </p>
            </div>

            <div class="p-4 rounded-md border border-gray-200 dark:border-gray-700 space-y-2">
                <p>{format!("Counter: {}", state.counter)}</p>
                <p>{format!("Double count: {}", state.double_count())}</p>
                <button
                    onclick={on_increment}
                    class="px-3 py-1.5 rounded-md text-sm font-medium text-white \
                           bg-blue-600 hover:bg-blue-700"
                >
                    {"Increment"}
                </button>
            </div>
        </div>
    }
}
