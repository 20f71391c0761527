use std::cell::RefCell;
use std::rc::Rc;

use gloo::file::callbacks::{read_as_data_url, FileReader};
use gloo::file::File;
use shared::{MediaError, Notice};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlVideoElement, MouseEvent};
use yew::prelude::*;

use crate::hooks::use_toast::use_toast;
use crate::services::camera::CameraSession;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct PhotoPickerProps {
    pub photo: Option<AttrValue>,
    pub on_photo: Callback<String>,
}

/// One-time photo form: upload an image or take a camera snapshot
#[function_component(PhotoPicker)]
pub fn photo_picker(props: &PhotoPickerProps) -> Html {
    let notify = use_toast();
    let preview_ref = use_node_ref();
    let camera = use_mut_ref(|| Option::<CameraSession>::None);
    let camera_open = use_state(|| false);
    let camera_available = use_state(|| true);
    // Keeps the in-flight read alive; dropping it aborts the read.
    let reader = use_mut_ref(|| Option::<FileReader>::None);

    // Stop the camera if the form goes away mid-capture
    {
        let camera = camera.clone();
        use_effect_with((), move |_| move || drop(camera.borrow_mut().take()));
    }

    let on_file_change = {
        let on_photo = props.on_photo.clone();
        let reader = reader.clone();
        let notify = notify.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let file = File::from(file);
            let on_photo = on_photo.clone();
            let notify = notify.clone();
            let slot: Rc<RefCell<Option<FileReader>>> = reader.clone();
            let task = read_as_data_url(&file, move |result| match result {
                Ok(data_url) => on_photo.emit(data_url),
                Err(e) => {
                    Logger::error_with_component("photo-picker", &format!("Could not read photo: {}", e));
                    notify.emit(Notice::destructive("Could not read photo", "Please try a different image"));
                }
            });
            *slot.borrow_mut() = Some(task);
        })
    };

    let on_open_camera = {
        let preview_ref = preview_ref.clone();
        let camera = camera.clone();
        let camera_open = camera_open.clone();
        let camera_available = camera_available.clone();
        let notify = notify.clone();
        Callback::from(move |_: MouseEvent| {
            let preview_ref = preview_ref.clone();
            let camera = camera.clone();
            let camera_open = camera_open.clone();
            let camera_available = camera_available.clone();
            let notify = notify.clone();
            // The preview element must be in the DOM before the stream attaches
            camera_open.set(true);
            spawn_local(async move {
                let Some(preview) = preview_ref.cast::<HtmlVideoElement>() else {
                    camera_open.set(false);
                    return;
                };
                match CameraSession::open(&preview).await {
                    Ok(session) => {
                        *camera.borrow_mut() = Some(session);
                    }
                    Err(e) => {
                        Logger::warn_with_component("photo-picker", &format!("Camera unavailable: {}", e));
                        if matches!(e, MediaError::PermissionDenied(_)) {
                            notify.emit(Notice::camera_denied());
                        }
                        camera_open.set(false);
                        camera_available.set(false);
                    }
                }
            });
        })
    };

    let on_take_photo = {
        let preview_ref = preview_ref.clone();
        let camera = camera.clone();
        let camera_open = camera_open.clone();
        let on_photo = props.on_photo.clone();
        let notify = notify.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(preview) = preview_ref.cast::<HtmlVideoElement>() else {
                return;
            };
            let Some(session) = camera.borrow_mut().take() else {
                return;
            };
            match session.snapshot(&preview) {
                Ok(data_url) => on_photo.emit(data_url),
                Err(e) => {
                    Logger::error_with_component("photo-picker", &format!("Snapshot failed: {}", e));
                    notify.emit(Notice::destructive("Could not take photo", "Please upload a photo instead"));
                }
            }
            // Dropping the session stops the camera tracks
            drop(session);
            camera_open.set(false);
        })
    };

    let on_cancel_camera = {
        let camera = camera.clone();
        let camera_open = camera_open.clone();
        Callback::from(move |_: MouseEvent| {
            drop(camera.borrow_mut().take());
            camera_open.set(false);
        })
    };

    html! {
        <div class="photo-picker">
            if let Some(photo) = &props.photo {
                <img class="photo-preview" src={photo.clone()} alt="Selected photo" />
            }
            <video
                ref={preview_ref}
                class={classes!("camera-preview", (!*camera_open).then_some("hidden"))}
                autoplay=true
                playsinline=true
                muted=true
            />
            <div class="photo-picker-actions">
                if *camera_open {
                    <button type="button" class="btn btn-primary" onclick={on_take_photo}>{"Take Photo"}</button>
                    <button type="button" class="btn btn-secondary" onclick={on_cancel_camera}>{"Cancel"}</button>
                } else {
                    <label class="btn btn-secondary file-button">
                        {"Upload Photo"}
                        <input type="file" accept="image/*" class="hidden" onchange={on_file_change} />
                    </label>
                    if *camera_available {
                        <button type="button" class="btn btn-secondary" onclick={on_open_camera}>{"Use Camera"}</button>
                    }
                }
            </div>
        </div>
    }
}
