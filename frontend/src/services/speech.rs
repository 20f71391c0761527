use shared::voice::SPEECH_RATE;
use shared::{MediaError, VoiceGender};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{SpeechSynthesis, SpeechSynthesisUtterance, SpeechSynthesisVoice};

use crate::services::js_message;
use crate::services::logging::Logger;

fn synthesis() -> Result<SpeechSynthesis, MediaError> {
    web_sys::window()
        .ok_or_else(|| MediaError::Unavailable("no window".to_string()))?
        .speech_synthesis()
        .map_err(|e| MediaError::Unavailable(js_message(&e)))
}

/// One spoken rendition of the birthday letter. Dropping it cancels speech.
pub struct Speech {
    synth: SpeechSynthesis,
    utterance: SpeechSynthesisUtterance,
    _on_end: Closure<dyn FnMut()>,
}

impl Speech {
    /// Cancel whatever is being spoken and start `message`. `on_end` fires
    /// when the utterance finishes or errors.
    pub fn start(message: &str, gender: VoiceGender, on_end: impl FnMut() + 'static) -> Result<Self, MediaError> {
        let synth = synthesis()?;
        synth.cancel();

        let utterance = SpeechSynthesisUtterance::new_with_text(message)
            .map_err(|e| MediaError::Unavailable(js_message(&e)))?;
        utterance.set_rate(SPEECH_RATE);
        utterance.set_pitch(gender.pitch());

        let voices = synth.get_voices();
        let names: Vec<String> = voices
            .iter()
            .map(|v| v.unchecked_into::<SpeechSynthesisVoice>().name())
            .collect();
        if let Some(index) = gender.choose_voice(&names) {
            if let Ok(voice) = voices.get(index as u32).dyn_into::<SpeechSynthesisVoice>() {
                Logger::debug_with_component("speech", &format!("Using voice {}", voice.name()));
                utterance.set_voice(Some(&voice));
            }
        }

        let on_end = Closure::wrap(Box::new(on_end) as Box<dyn FnMut()>);
        utterance.set_onend(Some(on_end.as_ref().unchecked_ref()));
        utterance.set_onerror(Some(on_end.as_ref().unchecked_ref()));

        synth.speak(&utterance);
        Ok(Self {
            synth,
            utterance,
            _on_end: on_end,
        })
    }
}

impl Drop for Speech {
    fn drop(&mut self) {
        self.utterance.set_onend(None);
        self.utterance.set_onerror(None);
        self.synth.cancel();
    }
}
