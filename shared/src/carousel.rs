//! Media carousel sequencing.
//!
//! `Carousel` only tracks indices and pause state. The frontend owns the
//! timers: a repeating auto-advance interval and a one-shot cooldown per
//! manual navigation, whose `PauseTicket` it hands back to `resume`.

use serde::{Deserialize, Serialize};

pub const DEFAULT_AUTO_ADVANCE_MS: u32 = 2000;
pub const MANUAL_COOLDOWN_MS: u32 = 2000;

/// One memory in the slideshow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MediaItem {
    Image {
        src: String,
        #[serde(default)]
        alt: Option<String>,
    },
    Video {
        src: String,
        #[serde(default)]
        poster: Option<String>,
    },
}

impl MediaItem {
    pub fn src(&self) -> &str {
        match self {
            MediaItem::Image { src, .. } | MediaItem::Video { src, .. } => src,
        }
    }

    pub fn is_video(&self) -> bool {
        matches!(self, MediaItem::Video { .. })
    }
}

/// Direction of the last move, used for slide-in animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Backward,
    Forward,
}

impl Direction {
    pub fn step(&self) -> i64 {
        match self {
            Direction::Backward => -1,
            Direction::Forward => 1,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Direction::Backward => "slide-from-left",
            Direction::Forward => "slide-from-right",
        }
    }
}

/// Identifies the cooldown started by one manual navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PauseTicket(u64);

/// What a video element should be doing after a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    Play(usize),
    Pause(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current_index: usize,
    direction: Direction,
    is_paused: bool,
    playback_enabled: bool,
    pause_generation: u64,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current_index: 0,
            direction: Direction::Forward,
            is_paused: false,
            playback_enabled: true,
            pause_generation: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn playback_enabled(&self) -> bool {
        self.playback_enabled
    }

    pub fn set_playback_enabled(&mut self, enabled: bool) {
        self.playback_enabled = enabled;
    }

    fn step(&mut self, direction: Direction) {
        let len = self.len as i64;
        let next = (self.current_index as i64 + direction.step()).rem_euclid(len);
        self.current_index = next as usize;
        self.direction = direction;
    }

    fn pause(&mut self) -> PauseTicket {
        self.pause_generation += 1;
        self.is_paused = true;
        PauseTicket(self.pause_generation)
    }

    /// Manual move by one slide, wrapping at both ends. Starts a cooldown.
    pub fn advance(&mut self, direction: Direction) -> Option<PauseTicket> {
        if self.is_empty() {
            return None;
        }
        self.step(direction);
        Some(self.pause())
    }

    /// Manual jump to `index`. No-op for the current slide or an index out
    /// of range.
    pub fn jump_to(&mut self, index: usize) -> Option<PauseTicket> {
        if index >= self.len || index == self.current_index {
            return None;
        }
        self.direction = if index > self.current_index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.current_index = index;
        Some(self.pause())
    }

    /// End of a cooldown. Only the most recent manual move can unpause.
    pub fn resume(&mut self, ticket: PauseTicket) -> bool {
        if !self.is_paused || ticket.0 != self.pause_generation {
            return false;
        }
        self.is_paused = false;
        true
    }

    /// Repeating timer tick. Moves forward unless paused or disabled.
    pub fn auto_advance(&mut self) -> bool {
        if self.is_empty() || self.is_paused || !self.playback_enabled {
            return false;
        }
        self.step(Direction::Forward);
        true
    }

    /// Play the current slide if it is a video and pause every other video.
    pub fn playback_plan(&self, media: &[MediaItem]) -> Vec<PlaybackCommand> {
        media
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_video())
            .map(|(index, _)| {
                if index == self.current_index {
                    PlaybackCommand::Play(index)
                } else {
                    PlaybackCommand::Pause(index)
                }
            })
            .collect()
    }
}
