use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/calculators")]
    Calculators,
    #[at("/calculators/dynasty")]
    Dynasty,
    #[at("/404")]
    #[not_found]
    NotFound,
}
