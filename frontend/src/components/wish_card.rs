use shared::wishes::{compose_voice_message, pick};
use shared::VoiceGender;
use yew::prelude::*;

use super::sharing_buttons::SharingButtons;
use super::voice_message::VoiceMessage;
use crate::services::date_utils;

#[derive(Properties, PartialEq)]
pub struct WishCardProps {
    pub name: AttrValue,
    pub wishes: Vec<String>,
    pub is_dark_mode: bool,
    #[prop_or_default]
    pub photo: Option<AttrValue>,
    #[prop_or_default]
    pub voice: VoiceGender,
    pub share_filename: AttrValue,
    pub share_title: AttrValue,
}

/// The birthday letter with one wish picked when the card mounts
#[function_component(WishCard)]
pub fn wish_card(props: &WishCardProps) -> Html {
    let card_ref = use_node_ref();
    let wish = {
        let wishes = props.wishes.clone();
        use_state(move || pick(date_utils::clock_seed(), &wishes).cloned().unwrap_or_default())
    };
    let message = compose_voice_message(&props.name, &wish);

    html! {
        <section class="card wish-card">
            <div ref={card_ref.clone()} class="card-capture">
                <h2 class="card-title">{"❤ Birthday Wishes"}</h2>
                <div class="wish-body">
                    if let Some(photo) = &props.photo {
                        <img class="wish-photo" src={photo.clone()} alt={format!("{}'s photo", props.name)} />
                    }
                    <div class="wish-text">
                        {for message.split("\n\n").map(|paragraph| html! {
                            <p class="wish-paragraph">
                                {for paragraph.lines().enumerate().map(|(i, line)| html! {
                                    <>
                                        if i > 0 { <br /> }
                                        {line.to_string()}
                                    </>
                                })}
                            </p>
                        })}
                    </div>
                </div>
            </div>
            <VoiceMessage message={AttrValue::from(message.clone())} initial_gender={props.voice} />
            <SharingButtons
                target={card_ref}
                filename={props.share_filename.clone()}
                title={props.share_title.clone()}
                is_dark_mode={props.is_dark_mode}
            />
        </section>
    }
}
