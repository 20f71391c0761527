pub mod age_stats;
pub mod audio_controller;
pub mod birthday_page;
pub mod celebration;
pub mod countdown_card;
pub mod dark_mode_toggle;
pub mod intro_page;
pub mod loading_screen;
pub mod memory_carousel;
pub mod not_found;
pub mod photo_picker;
pub mod sharing_buttons;
pub mod theme_selector;
pub mod toaster;
pub mod voice_message;
pub mod wish_card;

pub use birthday_page::BirthdayPage;
pub use not_found::NotFound;
pub use toaster::ToastProvider;
