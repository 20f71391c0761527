use shared::{Notice, VoiceGender};
use web_sys::{HtmlSelectElement, MouseEvent};
use yew::prelude::*;

use crate::hooks::use_toast::use_toast;
use crate::services::logging::Logger;
use crate::services::speech::Speech;

#[derive(Properties, PartialEq)]
pub struct VoiceMessageProps {
    pub message: AttrValue,
    #[prop_or_default]
    pub initial_gender: VoiceGender,
}

/// Reads the birthday letter aloud with speech synthesis
#[function_component(VoiceMessage)]
pub fn voice_message(props: &VoiceMessageProps) -> Html {
    let notify = use_toast();
    let gender = use_state(|| props.initial_gender);
    let is_speaking = use_state(|| false);
    let speech = use_mut_ref(|| Option::<Speech>::None);

    // Cancel speech on unmount
    {
        let speech = speech.clone();
        use_effect_with((), move |_| move || drop(speech.borrow_mut().take()));
    }

    let on_toggle = {
        let gender = gender.clone();
        let is_speaking = is_speaking.clone();
        let speech = speech.clone();
        let message = props.message.clone();
        Callback::from(move |_: MouseEvent| {
            if *is_speaking {
                drop(speech.borrow_mut().take());
                is_speaking.set(false);
                return;
            }

            // A finished reading still holds the synth; release it first
            drop(speech.borrow_mut().take());
            let on_end = {
                let is_speaking = is_speaking.clone();
                move || is_speaking.set(false)
            };
            match Speech::start(&message, *gender, on_end) {
                Ok(started) => {
                    *speech.borrow_mut() = Some(started);
                    is_speaking.set(true);
                }
                Err(e) => {
                    Logger::warn_with_component("voice-message", &e.to_string());
                    notify.emit(Notice::destructive(
                        "Voice message unavailable",
                        "Your browser does not support speech synthesis",
                    ));
                }
            }
        })
    };

    let on_gender_change = {
        let gender = gender.clone();
        let is_speaking = is_speaking.clone();
        let speech = speech.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(selected) = VoiceGender::from_name(&select.value()) {
                // Switching voice stops the current reading
                drop(speech.borrow_mut().take());
                is_speaking.set(false);
                gender.set(selected);
            }
        })
    };

    html! {
        <div class="voice-message">
            <select class="voice-select" onchange={on_gender_change} aria-label="Voice">
                {for [VoiceGender::Male, VoiceGender::Female].iter().map(|option| html! {
                    <option value={option.name()} selected={*option == *gender}>{option.label()}</option>
                })}
            </select>
            <button type="button" class="btn btn-primary voice-button" onclick={on_toggle}>
                {if *is_speaking { "⏹ Stop Message" } else { "▶ Play Voice Message" }}
            </button>
        </div>
    }
}
