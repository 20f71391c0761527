use shared::{capture_and_share, CaptureOptions, ShareOutcome, SharePayload, ShareTarget};
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::hooks::use_toast::use_toast;
use crate::services::capture::DomRasterizer;
use crate::services::document;
use crate::services::logging::Logger;
use crate::services::share::BrowserShareSink;

#[derive(Properties, PartialEq)]
pub struct SharingButtonsProps {
    /// Element rasterized into the shared image
    pub target: NodeRef,
    pub filename: AttrValue,
    pub title: AttrValue,
    pub is_dark_mode: bool,
    #[prop_or(true)]
    pub include_whatsapp: bool,
}

fn icon(target: ShareTarget) -> &'static str {
    match target {
        ShareTarget::Facebook => "f",
        ShareTarget::Twitter => "𝕏",
        ShareTarget::WhatsApp => "🟢",
        ShareTarget::Email => "✉",
        ShareTarget::Instagram => "📷",
        ShareTarget::Download => "⬇",
    }
}

#[function_component(SharingButtons)]
pub fn sharing_buttons(props: &SharingButtonsProps) -> Html {
    let notify = use_toast();
    let is_busy = use_state(|| false);

    let on_share = {
        let notify = notify.clone();
        let is_busy = is_busy.clone();
        let target = props.target.clone();
        let filename = props.filename.clone();
        let title = props.title.clone();
        let is_dark_mode = props.is_dark_mode;
        Callback::from(move |share_target: ShareTarget| {
            if *is_busy {
                return;
            }
            is_busy.set(true);

            let notify = notify.clone();
            let is_busy = is_busy.clone();
            let rasterizer = DomRasterizer::new(target.clone());
            let payload = SharePayload::new(&title, &filename, &document::page_url());
            spawn_local(async move {
                let sink = BrowserShareSink::new(notify);
                let options = CaptureOptions::for_dark_mode(is_dark_mode);
                match capture_and_share(&rasterizer, &sink, share_target, &payload, &options).await {
                    Ok(ShareOutcome::Shared) => {
                        Logger::info_with_component("sharing-buttons", &format!("Shared via {}", share_target.label()));
                    }
                    Ok(ShareOutcome::Downloaded { intent_opened }) => {
                        Logger::info_with_component(
                            "sharing-buttons",
                            &format!("{} fallback download (intent opened: {})", share_target.label(), intent_opened),
                        );
                    }
                    Ok(ShareOutcome::Failed) => {
                        Logger::error_with_component("sharing-buttons", "Download fallback failed");
                    }
                    Err(e) => {
                        Logger::error_with_component("sharing-buttons", &format!("Capture failed: {}", e));
                    }
                }
                is_busy.set(false);
            });
        })
    };

    html! {
        <div class="sharing-buttons">
            {for ShareTarget::ALL
                .iter()
                .filter(|t| props.include_whatsapp || **t != ShareTarget::WhatsApp)
                .map(|t| {
                    let share_target = *t;
                    let onclick = {
                        let on_share = on_share.clone();
                        Callback::from(move |_: MouseEvent| on_share.emit(share_target))
                    };
                    html! {
                        <button
                            type="button"
                            class={classes!("share-button", format!("share-{}", share_target.label().to_lowercase()))}
                            title={share_target.button_title()}
                            disabled={*is_busy}
                            {onclick}
                        >
                            <span aria-hidden="true">{icon(share_target)}</span>
                            <span class="sr-only">{share_target.label()}</span>
                        </button>
                    }
                })}
        </div>
    }
}
