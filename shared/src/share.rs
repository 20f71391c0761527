//! Capture-and-share orchestration.
//!
//! The browser pieces sit behind two seams: a `Rasterizer` that turns the
//! card on screen into a PNG, and a `ShareSink` that knows how to hand that
//! PNG to the platform share sheet, open a web intent, trigger a download
//! and show a toast. `capture_and_share` decides the order and the
//! fallbacks; it guarantees the user ends with a share or a downloaded file,
//! or sees a failure notice.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{CaptureError, ShareError};
use crate::theme::Notice;

/// Destination picked from the share buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareTarget {
    Facebook,
    Twitter,
    WhatsApp,
    Email,
    Instagram,
    Download,
}

impl ShareTarget {
    pub const ALL: [ShareTarget; 6] = [
        ShareTarget::Facebook,
        ShareTarget::Twitter,
        ShareTarget::WhatsApp,
        ShareTarget::Email,
        ShareTarget::Instagram,
        ShareTarget::Download,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ShareTarget::Facebook => "Facebook",
            ShareTarget::Twitter => "Twitter",
            ShareTarget::WhatsApp => "WhatsApp",
            ShareTarget::Email => "Email",
            ShareTarget::Instagram => "Instagram",
            ShareTarget::Download => "Download",
        }
    }

    pub fn button_title(&self) -> String {
        match self {
            ShareTarget::Download => "Download image".to_string(),
            ShareTarget::Email => "Share via Email".to_string(),
            other => format!("Share on {}", other.label()),
        }
    }

    /// Instagram has no web share entry point and Download is local only.
    pub fn supports_native_share(&self) -> bool {
        !matches!(self, ShareTarget::Instagram | ShareTarget::Download)
    }

    /// Web intent opened next to the fallback download
    pub fn intent_url(&self, payload: &SharePayload) -> Option<String> {
        match self {
            ShareTarget::Facebook => Some(format!(
                "https://www.facebook.com/sharer/sharer.php?u={}",
                urlencoding::encode(&payload.page_url)
            )),
            ShareTarget::Twitter => Some(format!(
                "https://twitter.com/intent/tweet?text={}",
                urlencoding::encode(&payload.text)
            )),
            ShareTarget::WhatsApp => Some(format!(
                "https://wa.me/?text={}",
                urlencoding::encode(&payload.text)
            )),
            ShareTarget::Email => Some(format!(
                "mailto:?subject={}&body={}",
                urlencoding::encode(&payload.title),
                urlencoding::encode(&format!("{} (Image attached)", payload.text))
            )),
            ShareTarget::Instagram | ShareTarget::Download => None,
        }
    }

    /// Toast shown once the image has been downloaded instead of shared
    pub fn fallback_notice(&self) -> Notice {
        match self {
            ShareTarget::Facebook => Notice::info(
                "Direct sharing not supported",
                "The image has been downloaded. You can manually upload it to Facebook.",
            ),
            ShareTarget::Twitter => Notice::info(
                "Image downloaded",
                "The image has been downloaded. You can attach it to your tweet manually.",
            ),
            ShareTarget::WhatsApp => Notice::info(
                "Image downloaded for WhatsApp",
                "Open WhatsApp and select this image to share.",
            ),
            ShareTarget::Email => Notice::info(
                "Image downloaded for email",
                "Attach the downloaded image to your email manually.",
            ),
            ShareTarget::Instagram => Notice::info(
                "Image downloaded for Instagram",
                "Open Instagram and select this image to share.",
            ),
            ShareTarget::Download => Notice::info(
                "Image downloaded",
                "Your image has been saved to your device.",
            ),
        }
    }
}

/// Text that accompanies the shared image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    /// File name without extension
    pub filename: String,
    pub page_url: String,
}

impl SharePayload {
    pub fn new(title: &str, filename: &str, page_url: &str) -> Self {
        Self {
            title: title.to_string(),
            text: format!("{} - Special celebration card", title),
            filename: filename.to_string(),
            page_url: page_url.to_string(),
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.png", self.filename)
    }
}

/// Rasterizer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureOptions {
    pub scale: f64,
    pub background: String,
}

impl CaptureOptions {
    pub fn for_dark_mode(is_dark_mode: bool) -> Self {
        Self {
            scale: 3.0,
            background: if is_dark_mode { "#111827" } else { "#ffffff" }.to_string(),
        }
    }
}

/// PNG produced by the rasterizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedImage {
    pub data_url: String,
    pub file_name: String,
}

/// How a capture-and-share run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Downloaded { intent_opened: bool },
    Failed,
}

#[async_trait(?Send)]
pub trait Rasterizer {
    async fn rasterize(&self, options: &CaptureOptions) -> Result<String, CaptureError>;
}

#[async_trait(?Send)]
pub trait ShareSink {
    fn can_share_natively(&self) -> bool;
    async fn share_natively(&self, image: &CapturedImage, payload: &SharePayload) -> Result<(), ShareError>;
    fn open_intent(&self, url: &str) -> Result<(), ShareError>;
    fn download(&self, image: &CapturedImage) -> Result<(), ShareError>;
    fn notify(&self, notice: Notice);
    /// Diagnostics for branch failures that were absorbed by a fallback
    fn report(&self, _error: &ShareError) {}
}

fn sharing_failed() -> Notice {
    Notice::destructive(
        "Sharing failed",
        "There was an error capturing or sharing the content.",
    )
}

/// Rasterize the card and hand it to `target`, falling back to a download.
///
/// Only a rasterization failure is returned as `Err`; every failure after
/// that is absorbed into a fallback and a notice.
pub async fn capture_and_share<R, S>(
    rasterizer: &R,
    sink: &S,
    target: ShareTarget,
    payload: &SharePayload,
    options: &CaptureOptions,
) -> Result<ShareOutcome, CaptureError>
where
    R: Rasterizer + ?Sized,
    S: ShareSink + ?Sized,
{
    sink.notify(Notice::info(
        "Capturing content...",
        "Please wait while we prepare your image.",
    ));

    let data_url = match rasterizer.rasterize(options).await {
        Ok(data_url) => data_url,
        Err(e) => {
            sink.notify(sharing_failed());
            return Err(e);
        }
    };
    let image = CapturedImage {
        data_url,
        file_name: payload.file_name(),
    };

    sink.notify(Notice::info("Image captured!", "Now sharing your content."));

    if target.supports_native_share() {
        if sink.can_share_natively() {
            match sink.share_natively(&image, payload).await {
                Ok(()) => return Ok(ShareOutcome::Shared),
                Err(e) => sink.report(&e),
            }
        } else {
            sink.report(&ShareError::Unsupported);
        }
    }

    // Download before opening the intent: a mailto: link may navigate away.
    if let Err(e) = sink.download(&image) {
        sink.report(&e);
        sink.notify(sharing_failed());
        return Ok(ShareOutcome::Failed);
    }

    let intent_opened = match target.intent_url(payload) {
        Some(url) => match sink.open_intent(&url) {
            Ok(()) => true,
            Err(e) => {
                sink.report(&e);
                false
            }
        },
        None => false,
    };

    sink.notify(target.fallback_notice());
    Ok(ShareOutcome::Downloaded { intent_opened })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        NativeShare(String),
        Intent(String),
        Download(String),
        Notice(String),
        Report(ShareError),
    }

    struct FakeRasterizer {
        fail: bool,
    }

    #[async_trait(?Send)]
    impl Rasterizer for FakeRasterizer {
        async fn rasterize(&self, _options: &CaptureOptions) -> Result<String, CaptureError> {
            if self.fail {
                Err(CaptureError::Rasterize("tainted canvas".to_string()))
            } else {
                Ok("data:image/png;base64,AAAA".to_string())
            }
        }
    }

    #[derive(Default)]
    struct FakeSink {
        native_available: bool,
        native_fails: bool,
        intent_fails: bool,
        download_fails: bool,
        events: RefCell<Vec<Event>>,
    }

    impl FakeSink {
        fn events(&self) -> Vec<Event> {
            self.events.borrow().clone()
        }

        fn downloads(&self) -> usize {
            self.events()
                .iter()
                .filter(|e| matches!(e, Event::Download(_)))
                .count()
        }

        fn notice_titles(&self) -> Vec<String> {
            self.events()
                .into_iter()
                .filter_map(|e| match e {
                    Event::Notice(title) => Some(title),
                    _ => None,
                })
                .collect()
        }
    }

    #[async_trait(?Send)]
    impl ShareSink for FakeSink {
        fn can_share_natively(&self) -> bool {
            self.native_available
        }

        async fn share_natively(&self, image: &CapturedImage, _payload: &SharePayload) -> Result<(), ShareError> {
            self.events.borrow_mut().push(Event::NativeShare(image.file_name.clone()));
            if self.native_fails {
                Err(ShareError::Rejected("AbortError".to_string()))
            } else {
                Ok(())
            }
        }

        fn open_intent(&self, url: &str) -> Result<(), ShareError> {
            self.events.borrow_mut().push(Event::Intent(url.to_string()));
            if self.intent_fails {
                Err(ShareError::Intent("popup blocked".to_string()))
            } else {
                Ok(())
            }
        }

        fn download(&self, image: &CapturedImage) -> Result<(), ShareError> {
            self.events.borrow_mut().push(Event::Download(image.file_name.clone()));
            if self.download_fails {
                Err(ShareError::Download("no document".to_string()))
            } else {
                Ok(())
            }
        }

        fn notify(&self, notice: Notice) {
            self.events.borrow_mut().push(Event::Notice(notice.title));
        }

        fn report(&self, error: &ShareError) {
            self.events.borrow_mut().push(Event::Report(error.clone()));
        }
    }

    fn payload() -> SharePayload {
        SharePayload::new("Birthday Wishes", "Snigdha-birthday-wish", "https://example.com/birthday")
    }

    async fn run(sink: &FakeSink, target: ShareTarget) -> Result<ShareOutcome, CaptureError> {
        capture_and_share(
            &FakeRasterizer { fail: false },
            sink,
            target,
            &payload(),
            &CaptureOptions::for_dark_mode(true),
        )
        .await
    }

    #[tokio::test]
    async fn test_native_share_success() {
        let sink = FakeSink { native_available: true, ..Default::default() };
        let outcome = run(&sink, ShareTarget::Facebook).await.unwrap();

        assert_eq!(outcome, ShareOutcome::Shared);
        assert_eq!(sink.downloads(), 0);
        assert!(sink.events().contains(&Event::NativeShare("Snigdha-birthday-wish.png".to_string())));
    }

    #[tokio::test]
    async fn test_native_share_failure_falls_back_to_download() {
        let sink = FakeSink { native_available: true, native_fails: true, ..Default::default() };
        let outcome = run(&sink, ShareTarget::WhatsApp).await.unwrap();

        assert_eq!(outcome, ShareOutcome::Downloaded { intent_opened: true });
        assert_eq!(sink.downloads(), 1);
        assert!(sink.events().contains(&Event::Report(ShareError::Rejected("AbortError".to_string()))));
        assert!(sink.events().iter().any(|e| matches!(e, Event::Intent(url) if url.starts_with("https://wa.me/?text="))));
        assert_eq!(sink.notice_titles().last().unwrap(), "Image downloaded for WhatsApp");
    }

    #[tokio::test]
    async fn test_every_target_ends_in_share_or_download() {
        for native_available in [false, true] {
            for native_fails in [false, true] {
                for target in ShareTarget::ALL {
                    let sink = FakeSink { native_available, native_fails, ..Default::default() };
                    let outcome = run(&sink, target).await.unwrap();
                    match outcome {
                        ShareOutcome::Shared => assert_eq!(sink.downloads(), 0),
                        ShareOutcome::Downloaded { .. } => assert_eq!(sink.downloads(), 1),
                        ShareOutcome::Failed => panic!("download did not fail, outcome must not be Failed"),
                    }
                }
            }
        }
    }

    #[tokio::test]
    async fn test_instagram_skips_native_share() {
        let sink = FakeSink { native_available: true, ..Default::default() };
        let outcome = run(&sink, ShareTarget::Instagram).await.unwrap();

        assert_eq!(outcome, ShareOutcome::Downloaded { intent_opened: false });
        assert!(!sink.events().iter().any(|e| matches!(e, Event::NativeShare(_))));
        assert_eq!(sink.notice_titles().last().unwrap(), "Image downloaded for Instagram");
    }

    #[tokio::test]
    async fn test_intent_failure_still_downloads() {
        let sink = FakeSink { intent_fails: true, ..Default::default() };
        let outcome = run(&sink, ShareTarget::Twitter).await.unwrap();

        assert_eq!(outcome, ShareOutcome::Downloaded { intent_opened: false });
        assert_eq!(sink.downloads(), 1);
    }

    #[tokio::test]
    async fn test_download_failure_is_reported() {
        let sink = FakeSink { download_fails: true, ..Default::default() };
        let outcome = run(&sink, ShareTarget::Download).await.unwrap();

        assert_eq!(outcome, ShareOutcome::Failed);
        assert_eq!(sink.notice_titles().last().unwrap(), "Sharing failed");
    }

    #[tokio::test]
    async fn test_rasterize_failure_aborts() {
        let sink = FakeSink { native_available: true, ..Default::default() };
        let result = capture_and_share(
            &FakeRasterizer { fail: true },
            &sink,
            ShareTarget::Email,
            &payload(),
            &CaptureOptions::for_dark_mode(false),
        )
        .await;

        assert!(matches!(result, Err(CaptureError::Rasterize(_))));
        assert_eq!(sink.downloads(), 0);
        assert_eq!(sink.notice_titles(), vec!["Capturing content...", "Sharing failed"]);
    }

    #[test]
    fn test_intent_urls() {
        let payload = payload();
        assert_eq!(
            ShareTarget::Facebook.intent_url(&payload).unwrap(),
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fexample.com%2Fbirthday"
        );
        assert_eq!(
            ShareTarget::Twitter.intent_url(&payload).unwrap(),
            "https://twitter.com/intent/tweet?text=Birthday%20Wishes%20-%20Special%20celebration%20card"
        );
        assert!(ShareTarget::Email
            .intent_url(&payload)
            .unwrap()
            .starts_with("mailto:?subject=Birthday%20Wishes&body="));
        assert!(ShareTarget::Download.intent_url(&payload).is_none());
    }

    #[test]
    fn test_capture_background() {
        assert_eq!(CaptureOptions::for_dark_mode(true).background, "#111827");
        assert_eq!(CaptureOptions::for_dark_mode(false).background, "#ffffff");
    }
}
