use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::motion_toggle::MotionToggle;
use crate::router::Route;
use crate::site;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header role="banner" class="site-header">
            <a href="#main" class="sr-only">{ "Skip to content" }</a>
            <div class="header-content">
                <Link<Route> to={Route::Home} classes="site-header__brand">{ site::SITE_NAME }</Link<Route>>
                <nav aria-label="Main" class="site-header__nav">
                    <Link<Route> to={Route::Map}>{ "Map" }</Link<Route>>
                    <Link<Route> to={Route::Stories}>{ "Stories" }</Link<Route>>
                </nav>
                <MotionToggle />
            </div>
        </header>
    }
}
