use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

/// Shown when routing fails to match a known view.
#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="page not-found" data-testid="not-found-screen">
            <h1>{ "Page not found" }</h1>
            <p>{ "That page does not exist. The calculators are this way." }</p>
            <Link<Route> classes="btn" to={Route::Home}>{ "Back to home" }</Link<Route>>
        </main>
    }
}
