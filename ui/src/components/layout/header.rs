use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn Header() -> Html {
    let link_class = "text-sm font-medium text-gray-600 dark:text-gray-300 \
                      hover:text-gray-900 dark:hover:text-white";
    html! {
        <header class="bg-white dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700">
            <div class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex-shrink-0">
                        <h1 class="text-xl font-semibold text-gray-900 dark:text-white">{"Posts"}</h1>
                    </div>
                    <nav class="flex items-center space-x-4">
                        <Link<Route> to={Route::Home} classes={link_class}>{"Home"}</Link<Route>>
                        <Link<Route> to={Route::Posts} classes={link_class}>{"Posts"}</Link<Route>>
                        <Link<Route> to={Route::About} classes={link_class}>{"About"}</Link<Route>>
                    </nav>
                </div>
            </div>
        </header>
    }
}
