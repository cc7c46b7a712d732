use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::calculators::CalculatorsPage;
use crate::pages::dynasty::DynastyPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::router::Route;

#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Calculators => html! { <CalculatorsPage /> },
        Route::Dynasty => html! { <DynastyPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[cfg(test)]
mod tests {
    use super::switch;
    use crate::router::Route;

    #[test]
    fn every_route_renders_some_view() {
        for route in [
            Route::Home,
            Route::Calculators,
            Route::Dynasty,
            Route::NotFound,
        ] {
            let _ = switch(route);
        }
    }
}
