use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

const INSTAGRAM_URL: &str = "https://www.instagram.com/breakvault";

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <main class="page" data-testid="home-screen">
            <div class="hero">
                <div class="brand">{ "BREAKVAULT" }</div>
                <h1>{ "Break Calculators for Soccer Cards" }</h1>
                <p class="hero-blurb">
                    { "Checklist-based odds calculators for box, case, and product breaks. \
                       Built for transparency, speed, and accuracy." }
                </p>
                <div class="hero-actions">
                    <Link<Route> classes="btn" to={Route::Calculators}>
                        { "View calculators" }
                    </Link<Route>>
                    <a
                        class="btn btn-accent"
                        href={INSTAGRAM_URL}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        { "Follow Breakvault" }
                    </a>
                </div>
            </div>

            <div class="card-grid">
                <div class="card">
                    <div class="card-title">{ "Topps Dynasty UEFA (Current)" }</div>
                    <p class="card-blurb">{ "Player & team odds with variation breakdowns." }</p>
                    <Link<Route> classes="card-link" to={Route::Dynasty}>
                        { "Open calculator \u{2192}" }
                    </Link<Route>>
                </div>
                <div class="card card-placeholder">
                    <div class="card-title">{ "More calculators coming" }</div>
                    <p class="card-blurb">{ "Additional products will be added here." }</p>
                    <Link<Route> classes="card-link" to={Route::Calculators}>
                        { "See all calculators \u{2192}" }
                    </Link<Route>>
                </div>
            </div>
        </main>
    }
}
