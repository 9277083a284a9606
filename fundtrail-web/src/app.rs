#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::components::{footer::Footer, header::Header};
#[cfg(target_arch = "wasm32")]
use crate::hooks::MotionProvider;
#[cfg(target_arch = "wasm32")]
use crate::pages::{
    home::HomePage, map::MapPage, not_found::NotFound, stories::StoriesPage,
};
#[cfg(target_arch = "wasm32")]
use crate::router::Route;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <MotionProvider>
                <AppInner />
            </MotionProvider>
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
fn app_inner() -> Html {
    let navigator = use_navigator();
    let route = use_route::<Route>().unwrap_or(Route::NotFound);

    use_effect_with(route.clone(), |route| {
        if let Some(doc) = crate::dom::document() {
            doc.set_title(route.title());
        }
    });

    let page = match route {
        Route::Home => html! { <HomePage /> },
        Route::Map => html! { <MapPage /> },
        Route::Stories => html! { <StoriesPage /> },
        Route::NotFound => {
            let on_go_home = Callback::from(move |()| {
                if let Some(nav) = &navigator {
                    nav.push(&Route::Home);
                }
            });
            html! { <NotFound {on_go_home} /> }
        }
    };

    html! {
        <>
            <style>{ crate::a11y::visible_focus_css() }</style>
            <Header />
            <main id="main" role="main">{ page }</main>
            <Footer />
        </>
    }
}
