use shared::MediaError;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

use crate::services::js_message;

/// A looping background track
pub struct BackgroundMusic {
    element: HtmlAudioElement,
}

impl BackgroundMusic {
    pub fn new(src: &str, volume: f64) -> Result<Self, MediaError> {
        let element = HtmlAudioElement::new_with_src(src)
            .map_err(|e| MediaError::Unavailable(js_message(&e)))?;
        element.set_loop(true);
        element.set_volume(volume.clamp(0.0, 1.0));
        Ok(Self { element })
    }

    /// Start playback. Browsers reject this until the user has interacted
    /// with the page.
    pub async fn play(&self) -> Result<(), MediaError> {
        let promise = self
            .element
            .play()
            .map_err(|e| MediaError::Playback(js_message(&e)))?;
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| MediaError::Playback(js_message(&e)))
    }

    pub fn pause(&self) {
        let _ = self.element.pause();
    }

    pub fn is_playing(&self) -> bool {
        !self.element.paused()
    }

    pub fn src(&self) -> String {
        self.element.src()
    }
}

impl Drop for BackgroundMusic {
    fn drop(&mut self) {
        self.pause();
        self.element.set_src("");
    }
}
