use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(CalculatorsPage)]
pub fn calculators_page() -> Html {
    html! {
        <main class="page" data-testid="calculators-screen">
            <h1>{ "Calculators" }</h1>
            <p class="page-blurb">{ "Choose a product calculator below." }</p>

            <div class="card-grid">
                <div class="card">
                    <div class="card-title">{ "Topps Dynasty UEFA" }</div>
                    <p class="card-blurb">
                        { "Checklist-based odds with player/team filtering and variation breakdown." }
                    </p>
                    <Link<Route> classes="card-link" to={Route::Dynasty}>
                        { "Open \u{2192}" }
                    </Link<Route>>
                </div>
            </div>
        </main>
    }
}
