use std::rc::Rc;

use payloads::APIClient;
use reactive_fetch::HttpTransport;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod hooks;
mod logs;
pub mod pages;
pub mod state;

use components::layout::Header;
use pages::{
    AboutPage, HomePage, NotFoundPage, PostCreatePage, PostDetailPage,
    PostEditPage, PostListPage,
};

/// Backend base address - configurable at build time, defaulting to the
/// local posts API.
pub fn backend_address() -> String {
    option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| "http://localhost:5000".to_string())
}

pub fn get_api_client() -> APIClient {
    APIClient::new(backend_address())
}

pub fn get_transport() -> Rc<HttpTransport> {
    Rc::new(HttpTransport::new(backend_address()))
}

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/posts")]
    Posts,
    #[at("/posts/new")]
    PostCreate,
    #[at("/posts/:id")]
    PostDetail { id: i64 },
    #[at("/posts/:id/edit")]
    PostEdit { id: i64 },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::About => html! { <AboutPage /> },
        Route::Posts => html! { <PostListPage /> },
        Route::PostCreate => html! { <PostCreatePage /> },
        // Keyed so navigating between posts resets the page's fetch state
        Route::PostDetail { id } => {
            html! { <PostDetailPage key={id.to_string()} {id} /> }
        }
        Route::PostEdit { id } => {
            html! { <PostEditPage key={id.to_string()} {id} /> }
        }
        Route::NotFound => html! { <NotFoundPage /> },
    }
}


#[function_component]
pub fn App() -> Html {
    logs::init_logging();
    html! {
        <BrowserRouter>
            <div class="min-h-screen bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100 transition-colors">
                <Header />
                <main class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                    <Switch<Route> render={switch} />
                </main>
            </div>
        </BrowserRouter>
    }
}
