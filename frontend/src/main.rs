mod components;
mod hooks;
mod services;

use shared::{CelebrationConfig, StartPage};
use yew::prelude::*;
use yew_router::prelude::*;

use components::{BirthdayPage, NotFound, ToastProvider};
use services::logging::Logger;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/birthday")]
    Birthday,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn load_config() -> CelebrationConfig {
    match CelebrationConfig::load() {
        Ok(config) => config,
        Err(e) => {
            Logger::error_with_component("app", &format!("Using default celebration config: {}", e));
            CelebrationConfig::default()
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| load_config());

    let switch = {
        let config = config.clone();
        move |route: Route| -> Html {
            match route {
                Route::Home => html! { <BirthdayPage start={StartPage::Intro} config={(*config).clone()} /> },
                Route::Birthday => html! { <BirthdayPage start={StartPage::Celebration} config={(*config).clone()} /> },
                Route::NotFound => html! { <NotFound /> },
            }
        }
    };

    html! {
        <BrowserRouter>
            <ToastProvider>
                <Switch<Route> render={switch} />
            </ToastProvider>
        </BrowserRouter>
    }
}

fn main() {
    Logger::info_with_component("app", "Starting birthday greeting");
    yew::Renderer::<App>::new().render();
}
