use async_trait::async_trait;
use js_sys::{Object, Promise, Reflect};
use shared::{CaptureError, CaptureOptions, Rasterizer};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlCanvasElement, HtmlElement};
use yew::NodeRef;

use crate::services::js_message;
use crate::services::logging::Logger;

#[wasm_bindgen]
extern "C" {
    // Loaded by index.html from the CDN
    #[wasm_bindgen(catch, js_namespace = globalThis, js_name = html2canvas)]
    fn html2canvas(element: &HtmlElement, options: &JsValue) -> Result<Promise, JsValue>;
}

/// Rasterizes the element behind a `NodeRef` with html2canvas
pub struct DomRasterizer {
    target: NodeRef,
}

impl DomRasterizer {
    pub fn new(target: NodeRef) -> Self {
        Self { target }
    }
}

fn html2canvas_options(options: &CaptureOptions) -> Result<JsValue, JsValue> {
    let object = Object::new();
    Reflect::set(&object, &"scale".into(), &JsValue::from_f64(options.scale))?;
    Reflect::set(&object, &"backgroundColor".into(), &JsValue::from_str(&options.background))?;
    Reflect::set(&object, &"useCORS".into(), &JsValue::TRUE)?;
    Reflect::set(&object, &"logging".into(), &JsValue::FALSE)?;
    Ok(object.into())
}

#[async_trait(?Send)]
impl Rasterizer for DomRasterizer {
    async fn rasterize(&self, options: &CaptureOptions) -> Result<String, CaptureError> {
        let element = self
            .target
            .cast::<HtmlElement>()
            .ok_or(CaptureError::TargetMissing)?;

        let js_options =
            html2canvas_options(options).map_err(|e| CaptureError::Rasterize(js_message(&e)))?;
        let promise = html2canvas(&element, &js_options).map_err(|e| {
            Logger::error_with_component("capture", &format!("html2canvas unavailable: {}", js_message(&e)));
            CaptureError::Rasterize(js_message(&e))
        })?;
        let canvas = JsFuture::from(promise)
            .await
            .map_err(|e| CaptureError::Rasterize(js_message(&e)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| CaptureError::Rasterize("html2canvas did not return a canvas".to_string()))?;

        canvas
            .to_data_url_with_type("image/png")
            .map_err(|e| CaptureError::Encode(js_message(&e)))
    }
}
