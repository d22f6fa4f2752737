use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="container mx-auto px-4 py-24 text-center">
            <h1 class="text-3xl font-bold text-gray-900 mb-2">{"404 - Page Not Found"}</h1>
            <p class="text-gray-600 mb-6">{"There are no contests here."}</p>
            <Link<Route> to={Route::Tracker} classes="text-blue-600 hover:underline">
                {"Back to the contest tracker"}
            </Link<Route>>
        </div>
    }
}
