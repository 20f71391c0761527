use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::services::document;
use crate::services::logging::Logger;

/// Calls `on_hidden` whenever the page becomes hidden (tab switch,
/// minimised window). The listener is removed on unmount.
#[hook]
pub fn use_page_hidden(on_hidden: Callback<()>) {
    use_effect_with((), move |_| {
        let target = web_sys::window().and_then(|w| w.document());

        let handle_visibility = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            if document::is_hidden() {
                Logger::debug_with_component("visibility", "Page hidden");
                on_hidden.emit(());
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(target) = &target {
            let _ = target.add_event_listener_with_callback(
                "visibilitychange",
                handle_visibility.as_ref().unchecked_ref(),
            );
        }

        move || {
            if let Some(target) = &target {
                let _ = target.remove_event_listener_with_callback(
                    "visibilitychange",
                    handle_visibility.as_ref().unchecked_ref(),
                );
            }
        }
    });
}
