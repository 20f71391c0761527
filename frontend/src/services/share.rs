use async_trait::async_trait;
use gloo::net::http::Request;
use js_sys::{Array, Function, Object, Reflect, Uint8Array};
use shared::{CapturedImage, Notice, ShareError, SharePayload, ShareSink};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FilePropertyBag, HtmlAnchorElement};
use yew::Callback;

use crate::services::js_message;
use crate::services::logging::Logger;

/// Share sink backed by the Web Share API, window.open and an anchor
/// download. Notices go to the toast callback.
pub struct BrowserShareSink {
    notify: Callback<Notice>,
}

impl BrowserShareSink {
    pub fn new(notify: Callback<Notice>) -> Self {
        Self { notify }
    }
}

fn navigator_method(name: &str) -> Option<(JsValue, Function)> {
    let navigator: JsValue = web_sys::window()?.navigator().into();
    let method = Reflect::get(&navigator, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()?;
    Some((navigator, method))
}

async fn image_file(image: &CapturedImage) -> Result<File, ShareError> {
    let response = Request::get(&image.data_url)
        .send()
        .await
        .map_err(|e| ShareError::Rejected(e.to_string()))?;
    let bytes = response
        .binary()
        .await
        .map_err(|e| ShareError::Rejected(e.to_string()))?;

    let parts = Array::new();
    parts.push(&Uint8Array::from(bytes.as_slice()));
    let properties = FilePropertyBag::new();
    properties.set_type("image/png");
    File::new_with_u8_array_sequence_and_options(&parts, &image.file_name, &properties)
        .map_err(|e| ShareError::Rejected(js_message(&e)))
}

fn share_data(payload: &SharePayload, file: &File) -> Result<Object, JsValue> {
    let data = Object::new();
    Reflect::set(&data, &"title".into(), &JsValue::from_str(&payload.title))?;
    Reflect::set(&data, &"text".into(), &JsValue::from_str(&payload.text))?;
    Reflect::set(&data, &"files".into(), &Array::of1(file))?;
    Ok(data)
}

#[async_trait(?Send)]
impl ShareSink for BrowserShareSink {
    fn can_share_natively(&self) -> bool {
        navigator_method("share").is_some() && navigator_method("canShare").is_some()
    }

    async fn share_natively(&self, image: &CapturedImage, payload: &SharePayload) -> Result<(), ShareError> {
        let (navigator, share) = navigator_method("share").ok_or(ShareError::Unsupported)?;
        let (_, can_share) = navigator_method("canShare").ok_or(ShareError::Unsupported)?;

        let file = image_file(image).await?;
        let data = share_data(payload, &file).map_err(|e| ShareError::Rejected(js_message(&e)))?;

        let accepted = can_share
            .call1(&navigator, &data)
            .map(|v| v.is_truthy())
            .unwrap_or(false);
        if !accepted {
            return Err(ShareError::Unsupported);
        }

        let promise = share
            .call1(&navigator, &data)
            .map_err(|e| ShareError::Rejected(js_message(&e)))?
            .dyn_into::<js_sys::Promise>()
            .map_err(|_| ShareError::Rejected("navigator.share returned no promise".to_string()))?;
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| ShareError::Rejected(js_message(&e)))
    }

    fn open_intent(&self, url: &str) -> Result<(), ShareError> {
        let window = web_sys::window().ok_or_else(|| ShareError::Intent("no window".to_string()))?;
        if url.starts_with("mailto:") {
            return window
                .location()
                .set_href(url)
                .map_err(|e| ShareError::Intent(js_message(&e)));
        }
        match window.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(ShareError::Intent("popup blocked".to_string())),
            Err(e) => Err(ShareError::Intent(js_message(&e))),
        }
    }

    fn download(&self, image: &CapturedImage) -> Result<(), ShareError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| ShareError::Download("no document".to_string()))?;
        let body = document
            .body()
            .ok_or_else(|| ShareError::Download("no body".to_string()))?;

        let anchor = document
            .create_element("a")
            .map_err(|e| ShareError::Download(js_message(&e)))?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|_| ShareError::Download("not an anchor".to_string()))?;
        anchor.set_href(&image.data_url);
        anchor.set_download(&image.file_name);

        body.append_child(&anchor)
            .map_err(|e| ShareError::Download(js_message(&e)))?;
        anchor.click();
        anchor.remove();

        Logger::info_with_component("share", &format!("Downloaded {}", image.file_name));
        Ok(())
    }

    fn notify(&self, notice: Notice) {
        self.notify.emit(notice);
    }

    fn report(&self, error: &ShareError) {
        Logger::warn_with_component("share", &format!("Falling back: {}", error));
    }
}
