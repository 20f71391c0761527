use std::rc::Rc;

use shared::Notice;
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::hooks::use_toast::use_toast;
use crate::hooks::use_visibility::use_page_hidden;
use crate::services::audio::BackgroundMusic;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct AudioControllerProps {
    /// Track for the current stage; switching tracks keeps the play state
    pub src: AttrValue,
    #[prop_or(0.5)]
    pub volume: f64,
    /// Try to start the first track on mount
    #[prop_or(true)]
    pub autoplay: bool,
}

/// Whether a freshly loaded track should start playing
fn starts_on_load(was_playing: bool, autoplay_pending: bool) -> bool {
    was_playing || autoplay_pending
}

/// Play/pause control for the looping background track
#[function_component(AudioController)]
pub fn audio_controller(props: &AudioControllerProps) -> Html {
    let notify = use_toast();
    let music = use_mut_ref(|| Option::<Rc<BackgroundMusic>>::None);
    let is_playing = use_state(|| false);
    let has_track = use_state(|| false);
    // Consumed by the first track only
    let autoplay_pending = use_mut_ref(|| props.autoplay);

    // New element per track. The previous one is paused when dropped.
    {
        let music = music.clone();
        let is_playing = is_playing.clone();
        let has_track = has_track.clone();
        let notify = notify.clone();
        let volume = props.volume;
        let autoplay_pending = autoplay_pending.clone();
        use_effect_with(props.src.clone(), move |src| {
            let autoplay = std::mem::replace(&mut *autoplay_pending.borrow_mut(), false);
            match BackgroundMusic::new(src, volume) {
                Ok(track) => {
                    let track = Rc::new(track);
                    if starts_on_load(*is_playing, autoplay) {
                        is_playing.set(true);
                        let track = track.clone();
                        let is_playing = is_playing.clone();
                        let notify = notify.clone();
                        spawn_local(async move {
                            if let Err(e) = track.play().await {
                                Logger::warn_with_component("audio", &e.to_string());
                                notify.emit(Notice::playback_denied());
                                is_playing.set(false);
                            }
                        });
                    }
                    *music.borrow_mut() = Some(track);
                    has_track.set(true);
                }
                Err(e) => {
                    Logger::error_with_component("audio", &format!("Could not load {}: {}", src, e));
                    has_track.set(false);
                }
            }
            // The element is released when the last handle drops
            move || drop(music.borrow_mut().take())
        });
    }

    {
        let music = music.clone();
        let is_playing = is_playing.clone();
        use_page_hidden(Callback::from(move |_| {
            if let Some(track) = music.borrow().as_ref() {
                if track.is_playing() {
                    track.pause();
                    is_playing.set(false);
                }
            }
        }));
    }

    let on_toggle = {
        let music = music.clone();
        let is_playing = is_playing.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(track) = music.borrow().clone() else {
                return;
            };
            if *is_playing {
                track.pause();
                is_playing.set(false);
                return;
            }
            is_playing.set(true);
            let is_playing = is_playing.clone();
            let notify = notify.clone();
            spawn_local(async move {
                match track.play().await {
                    Ok(()) => Logger::info_with_component("audio", &format!("Playing {}", track.src())),
                    Err(e) => {
                        Logger::warn_with_component("audio", &e.to_string());
                        notify.emit(Notice::playback_denied());
                        is_playing.set(false);
                    }
                }
            });
        })
    };

    let label = if *is_playing { "Pause Music" } else { "Play Music" };

    html! {
        <button
            type="button"
            class={classes!("audio-controller", (*is_playing).then_some("playing"))}
            title={label}
            onclick={on_toggle}
            disabled={!*has_track}
        >
            <span class="audio-icon" aria-hidden="true">{if *is_playing { "🔊" } else { "🔇" }}</span>
            {label}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_autoplay_is_on_by_default() {
        let props = yew::props!(AudioControllerProps {
            src: AttrValue::from("/HB MUSIC 2.mp3"),
        });
        assert!(props.autoplay);
        assert_eq!(props.volume, 0.5);
    }

    #[wasm_bindgen_test]
    fn test_starts_on_load() {
        // First track with autoplay
        assert!(starts_on_load(false, true));
        // Track switch keeps the play state
        assert!(starts_on_load(true, false));
        assert!(!starts_on_load(false, false));
    }
}
