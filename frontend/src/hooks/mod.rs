pub mod use_carousel;
pub mod use_countdown;
pub mod use_interval;
pub mod use_stage;
pub mod use_toast;
pub mod use_visibility;
