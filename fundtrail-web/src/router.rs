use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/map")]
    Map,
    #[at("/stories")]
    Stories,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Title shown in the browser tab.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Home => "20,000 km | Home",
            Self::Map => "20,000 km | Route map",
            Self::Stories => "20,000 km | Stories",
            Self::NotFound => "20,000 km | Not found",
        }
    }
}
