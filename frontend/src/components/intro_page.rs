use shared::countdown::format_long_date;
use shared::{CelebrantProfile, CelebrationConfig};
use web_sys::MouseEvent;
use yew::prelude::*;

use super::photo_picker::PhotoPicker;

#[derive(Properties, PartialEq)]
pub struct IntroPageProps {
    pub config: CelebrationConfig,
    pub celebrant: CelebrantProfile,
    pub on_enter: Callback<()>,
    pub on_photo: Callback<String>,
}

#[function_component(IntroPage)]
pub fn intro_page(props: &IntroPageProps) -> Html {
    let show_photo_form = use_state(|| false);

    let on_enter = {
        let on_enter = props.on_enter.clone();
        Callback::from(move |_: MouseEvent| on_enter.emit(()))
    };

    let on_toggle_photo_form = {
        let show_photo_form = show_photo_form.clone();
        Callback::from(move |_: MouseEvent| show_photo_form.set(!*show_photo_form))
    };

    html! {
        <div class="intro-page">
            <div class="intro-card">
                <p class="intro-kicker">{"A special surprise for"}</p>
                <h1 class="intro-name">{&props.celebrant.name}</h1>
                <p class="intro-date">{format_long_date(props.config.display_date)}</p>
                <p class="intro-text">
                    {"Get ready for a magical birthday experience, filled with personalized wishes, unforgettable milestones, and the most beautiful celebrations!"}
                </p>

                <button type="button" class="btn btn-primary btn-large intro-enter" onclick={on_enter}>
                    {"🎁 Open My Wishes"}
                </button>

                <div class="intro-photo">
                    if props.celebrant.photo.is_none() || *show_photo_form {
                        <button type="button" class="btn btn-link" onclick={on_toggle_photo_form}>
                            {if *show_photo_form { "Hide photo options" } else { "Add a photo" }}
                        </button>
                    }
                    if *show_photo_form {
                        <PhotoPicker
                            photo={props.celebrant.photo.clone().map(AttrValue::from)}
                            on_photo={props.on_photo.clone()}
                        />
                    }
                </div>
            </div>
        </div>
    }
}
