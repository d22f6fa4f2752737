use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, debug};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use crate::components::toast::ToastProvider;

pub mod api;
pub mod components;
pub mod config;
pub mod countdown;
pub mod state;
pub mod storage;
pub mod pages {
    pub mod not_found;
    pub mod tracker;
}

use pages::{not_found::NotFound, tracker::ContestTracker};

#[cfg(test)]
mod tests;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Tracker,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <ToastProvider>
            <BrowserRouter>
                <div class="min-h-screen flex flex-col bg-gray-100">
                    <header class="bg-gradient-to-r from-slate-800 to-blue-600 text-white shadow">
                        <div class="container mx-auto px-4 py-5">
                            <h1 class="text-2xl sm:text-3xl font-bold tracking-tight">{"Coding Contest Tracker"}</h1>
                            <p class="text-blue-100 text-sm">{"Codeforces, CodeChef and LeetCode in one place"}</p>
                        </div>
                    </header>
                    <main class="flex-1">
                        <Switch<Route> render={switch} />
                    </main>
                </div>
            </BrowserRouter>
        </ToastProvider>
    }
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::Tracker => html! { <ContestTracker /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    console_error_panic_hook::set_once();

    info!("Mounting contest tracker, API at {}", config::Config::api_base_url());
    yew::Renderer::<App>::new().render();
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            log::error!("Failed to start app: {:?}", e);
        }
    });
    Ok(())
}
