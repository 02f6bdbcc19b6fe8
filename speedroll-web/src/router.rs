use speedroll_checkout::View;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Checkout,
    #[at("/confirmation")]
    Confirmation,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub const fn from_view(view: View) -> Self {
        match view {
            View::Checkout => Self::Checkout,
            View::Confirmation => Self::Confirmation,
        }
    }
}
