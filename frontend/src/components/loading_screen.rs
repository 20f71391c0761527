use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingScreenProps {
    pub name: AttrValue,
}

#[function_component(LoadingScreen)]
pub fn loading_screen(props: &LoadingScreenProps) -> Html {
    html! {
        <div class="loading-screen">
            <div class="loading-cake" aria-hidden="true">{"🎂"}</div>
            <div class="loading-spinner" />
            <p class="loading-text">{format!("Preparing {}'s celebration...", props.name)}</p>
        </div>
    }
}
