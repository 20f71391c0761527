use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1 class="not-found-code">{"404"}</h1>
            <p class="not-found-message">{"Oops! This page got lost in the confetti."}</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary">{"Return to Home"}</Link<Route>>
        </div>
    }
}
