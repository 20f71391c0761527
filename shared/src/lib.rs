pub mod carousel;
pub mod config;
pub mod countdown;
pub mod error;
pub mod share;
pub mod stage;
pub mod theme;
pub mod voice;
pub mod wishes;

pub use carousel::{Carousel, Direction, MediaItem, PauseTicket, PlaybackCommand};
pub use config::{CelebrantProfile, CelebrationConfig, Gender, MusicTracks, ShareNames};
pub use countdown::{
    countdown, elapsed_since, milestone_for, CountdownSnapshot, ElapsedStats, Milestone, TimeRemaining,
};
pub use error::{CaptureError, ConfigError, MediaError, ShareError};
pub use share::{
    capture_and_share, CaptureOptions, CapturedImage, Rasterizer, ShareOutcome, SharePayload, ShareSink,
    ShareTarget,
};
pub use stage::{LoadingSchedule, LoadingTicket, SessionState, Stage, StageController, StartPage};
pub use theme::{ColorTheme, Notice, NoticeVariant};
pub use voice::VoiceGender;
