use shared::MediaError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, MediaStream, MediaStreamConstraints, MediaStreamTrack};

use crate::services::js_message;
use crate::services::logging::Logger;

/// Live camera stream attached to a preview `<video>`. Dropping it stops
/// every track.
pub struct CameraSession {
    stream: MediaStream,
}

impl CameraSession {
    pub async fn open(preview: &HtmlVideoElement) -> Result<Self, MediaError> {
        let devices = web_sys::window()
            .ok_or_else(|| MediaError::Unavailable("no window".to_string()))?
            .navigator()
            .media_devices()
            .map_err(|e| MediaError::Unavailable(js_message(&e)))?;

        let constraints = MediaStreamConstraints::new();
        constraints.set_video(&JsValue::TRUE);
        let promise = devices
            .get_user_media_with_constraints(&constraints)
            .map_err(|e| MediaError::Unavailable(js_message(&e)))?;
        let stream = JsFuture::from(promise)
            .await
            .map_err(|e| MediaError::PermissionDenied(js_message(&e)))?
            .dyn_into::<MediaStream>()
            .map_err(|_| MediaError::Unavailable("getUserMedia returned no stream".to_string()))?;

        preview.set_src_object(Some(&stream));
        if let Ok(play) = preview.play() {
            let _ = JsFuture::from(play).await;
        }
        Logger::info_with_component("camera", "Camera stream opened");
        Ok(Self { stream })
    }

    /// Draw the current preview frame onto a canvas and encode it as PNG
    pub fn snapshot(&self, preview: &HtmlVideoElement) -> Result<String, MediaError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| MediaError::Unavailable("no document".to_string()))?;
        let canvas = document
            .create_element("canvas")
            .map_err(|e| MediaError::Unavailable(js_message(&e)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| MediaError::Unavailable("not a canvas".to_string()))?;
        canvas.set_width(preview.video_width());
        canvas.set_height(preview.video_height());

        let context = canvas
            .get_context("2d")
            .map_err(|e| MediaError::Unavailable(js_message(&e)))?
            .ok_or_else(|| MediaError::Unavailable("no 2d context".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| MediaError::Unavailable("not a 2d context".to_string()))?;
        context
            .draw_image_with_html_video_element(preview, 0.0, 0.0)
            .map_err(|e| MediaError::Unavailable(js_message(&e)))?;

        canvas
            .to_data_url_with_type("image/png")
            .map_err(|e| MediaError::Unavailable(js_message(&e)))
    }
}

impl Drop for CameraSession {
    fn drop(&mut self) {
        for track in self.stream.get_tracks().iter() {
            track.unchecked_into::<MediaStreamTrack>().stop();
        }
        Logger::debug_with_component("camera", "Camera tracks stopped");
    }
}
