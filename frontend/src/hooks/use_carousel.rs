use std::rc::Rc;

use shared::carousel::MANUAL_COOLDOWN_MS;
use shared::{Carousel, Direction, MediaItem, PauseTicket, PlaybackCommand};
use yew::prelude::*;

use crate::hooks::use_interval::{use_interval, use_timeout, IntervalConfig};

pub enum CarouselAction {
    Advance(Direction),
    JumpTo(usize),
    Resume(PauseTicket),
    Tick,
    SetPlayback(bool),
}

#[derive(Clone, PartialEq)]
pub struct CarouselState {
    carousel: Carousel,
    // Cooldown started by the latest manual move
    cooldown: Option<PauseTicket>,
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            CarouselAction::Advance(direction) => match next.carousel.advance(direction) {
                Some(ticket) => {
                    next.cooldown = Some(ticket);
                    true
                }
                None => false,
            },
            CarouselAction::JumpTo(index) => match next.carousel.jump_to(index) {
                Some(ticket) => {
                    next.cooldown = Some(ticket);
                    true
                }
                None => false,
            },
            CarouselAction::Resume(ticket) => {
                let resumed = next.carousel.resume(ticket);
                if resumed {
                    next.cooldown = None;
                }
                resumed
            }
            CarouselAction::Tick => next.carousel.auto_advance(),
            CarouselAction::SetPlayback(enabled) => {
                next.carousel.set_playback_enabled(enabled);
                enabled != self.carousel.playback_enabled()
            }
        };
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct UseCarouselActions {
    pub previous: Callback<()>,
    pub next: Callback<()>,
    pub jump_to: Callback<usize>,
    pub toggle_playback: Callback<()>,
}

pub struct UseCarouselResult {
    pub current_index: usize,
    pub direction: Direction,
    pub is_paused: bool,
    pub playback_enabled: bool,
    pub playback_plan: Vec<PlaybackCommand>,
    pub actions: UseCarouselActions,
}

/// Drives a `Carousel` over `media` with an auto-advance interval and a
/// cooldown timer per manual move.
#[hook]
pub fn use_carousel(media: &[MediaItem], interval_ms: u32) -> UseCarouselResult {
    let len = media.len();
    let state = use_reducer(|| CarouselState {
        carousel: Carousel::new(len),
        cooldown: None,
    });
    let dispatcher = state.dispatcher();

    {
        let dispatcher = dispatcher.clone();
        use_interval(
            IntervalConfig {
                interval_ms,
                label: "carousel",
                ..IntervalConfig::default()
            },
            Callback::from(move |_| dispatcher.dispatch(CarouselAction::Tick)),
            state.carousel.is_paused() || !state.carousel.playback_enabled() || len < 2,
        );
    }

    {
        let dispatcher = dispatcher.clone();
        use_timeout(
            state.cooldown,
            MANUAL_COOLDOWN_MS,
            Callback::from(move |ticket| dispatcher.dispatch(CarouselAction::Resume(ticket))),
        );
    }

    let actions = {
        let previous = {
            let dispatcher = dispatcher.clone();
            Callback::from(move |_| dispatcher.dispatch(CarouselAction::Advance(Direction::Backward)))
        };
        let next = {
            let dispatcher = dispatcher.clone();
            Callback::from(move |_| dispatcher.dispatch(CarouselAction::Advance(Direction::Forward)))
        };
        let jump_to = {
            let dispatcher = dispatcher.clone();
            Callback::from(move |index| dispatcher.dispatch(CarouselAction::JumpTo(index)))
        };
        let enabled = state.carousel.playback_enabled();
        let toggle_playback = Callback::from(move |_| dispatcher.dispatch(CarouselAction::SetPlayback(!enabled)));
        UseCarouselActions {
            previous,
            next,
            jump_to,
            toggle_playback,
        }
    };

    UseCarouselResult {
        current_index: state.carousel.current_index(),
        direction: state.carousel.direction(),
        is_paused: state.carousel.is_paused(),
        playback_enabled: state.carousel.playback_enabled(),
        playback_plan: state.carousel.playback_plan(media),
        actions,
    }
}
