use shared::{MediaItem, PlaybackCommand};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlVideoElement, MouseEvent};
use yew::prelude::*;

use crate::hooks::use_carousel::use_carousel;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct MemoryCarouselProps {
    pub media: Vec<MediaItem>,
    pub interval_ms: u32,
}

fn apply_playback(plan: &[PlaybackCommand], videos: &[NodeRef]) {
    for command in plan {
        match *command {
            PlaybackCommand::Pause(index) => {
                if let Some(video) = videos.get(index).and_then(|r| r.cast::<HtmlVideoElement>()) {
                    let _ = video.pause();
                    video.set_current_time(0.0);
                }
            }
            PlaybackCommand::Play(index) => {
                if let Some(video) = videos.get(index).and_then(|r| r.cast::<HtmlVideoElement>()) {
                    if let Ok(promise) = video.play() {
                        wasm_bindgen_futures::spawn_local(async move {
                            // Autoplay can be refused; the poster stays visible
                            if JsFuture::from(promise).await.is_err() {
                                Logger::debug_with_component("carousel", "Video autoplay refused");
                            }
                        });
                    }
                }
            }
        }
    }
}

/// Slideshow of photos and videos
#[function_component(MemoryCarousel)]
pub fn memory_carousel(props: &MemoryCarouselProps) -> Html {
    let carousel = use_carousel(&props.media, props.interval_ms);
    let videos = use_memo(props.media.len(), |len| (0..*len).map(|_| NodeRef::default()).collect::<Vec<_>>());

    {
        let videos = videos.clone();
        let plan = carousel.playback_plan.clone();
        use_effect_with(carousel.current_index, move |_| {
            apply_playback(&plan, &videos);
        });
    }

    if props.media.is_empty() {
        return html! {};
    }

    let actions = carousel.actions.clone();
    let on_previous = {
        let previous = actions.previous.clone();
        Callback::from(move |_: MouseEvent| previous.emit(()))
    };
    let on_next = {
        let next = actions.next.clone();
        Callback::from(move |_: MouseEvent| next.emit(()))
    };
    let on_toggle = {
        let toggle = actions.toggle_playback.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    html! {
        <section class="card memory-carousel">
            <h2 class="card-title">{"Beautiful Memories"}</h2>
            <div class="carousel-viewport">
                {for props.media.iter().enumerate().map(|(index, item)| {
                    let is_current = index == carousel.current_index;
                    let class = classes!(
                        "carousel-slide",
                        is_current.then_some("active"),
                        is_current.then_some(carousel.direction.css_class()),
                    );
                    let content = match item {
                        MediaItem::Image { src, alt } => html! {
                            <img src={src.clone()} alt={alt.clone().unwrap_or_default()} loading="lazy" />
                        },
                        MediaItem::Video { src, poster } => html! {
                            <video
                                ref={videos[index].clone()}
                                src={src.clone()}
                                poster={poster.clone()}
                                muted=true
                                loop=true
                                playsinline=true
                                preload="metadata"
                            />
                        },
                    };
                    html! { <div key={index} {class} aria-hidden={(!is_current).to_string()}>{content}</div> }
                })}
                <button type="button" class="carousel-nav prev" aria-label="Previous" onclick={on_previous}>{"‹"}</button>
                <button type="button" class="carousel-nav next" aria-label="Next" onclick={on_next}>{"›"}</button>
            </div>
            <div class="carousel-controls">
                <div class="carousel-dots">
                    {for (0..props.media.len()).map(|index| {
                        let jump_to = actions.jump_to.clone();
                        let onclick = Callback::from(move |_: MouseEvent| jump_to.emit(index));
                        let class = classes!("carousel-dot", (index == carousel.current_index).then_some("active"));
                        html! { <button type="button" {class} aria-label={format!("Go to slide {}", index + 1)} {onclick} /> }
                    })}
                </div>
                <button type="button" class="btn btn-secondary carousel-toggle" onclick={on_toggle}>
                    {if carousel.playback_enabled { "Pause" } else { "Play" }}
                </button>
            </div>
        </section>
    }
}
