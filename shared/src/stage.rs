//! Stage sequencing for the greeting page.
//!
//! The page moves through three presentation phases:
//!
//! ```text
//! Intro --enter()--> Loading --finish_loading(ticket)--> Celebration
//!   ^                                                        |
//!   +--------------------- return_home() --------------------+
//! ```
//!
//! `Intro -> Loading` and `Celebration -> Intro` are user actions.
//! `Loading -> Celebration` fires from a one-shot timer owned by the caller;
//! the ticket handed out by `enter()` lets the controller ignore a timer that
//! outlived the loading phase it was scheduled for.

use serde::{Deserialize, Serialize};

use crate::theme::ColorTheme;

/// Delay between pressing "start" and the celebration appearing.
pub const DEFAULT_LOADING_DELAY_MS: u32 = 2000;

/// One of the three top-level presentation phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Intro,
    Loading,
    Celebration,
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Intro => "intro",
            Stage::Loading => "loading",
            Stage::Celebration => "celebration",
        }
    }
}

/// Where a route starts the sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartPage {
    Intro,
    Celebration,
}

impl From<StartPage> for Stage {
    fn from(start: StartPage) -> Self {
        match start {
            StartPage::Intro => Stage::Intro,
            StartPage::Celebration => Stage::Celebration,
        }
    }
}

/// Identifies one scheduled `Loading -> Celebration` timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadingTicket(u64);

/// Returned by `enter()`: the caller schedules `finish_loading(ticket)`
/// after `delay_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingSchedule {
    pub ticket: LoadingTicket,
    pub delay_ms: u32,
}

/// Session state owned by the top-level page component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub stage: Stage,
    pub is_dark_mode: bool,
    pub color_theme: ColorTheme,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            stage: Stage::Intro,
            is_dark_mode: true,
            color_theme: ColorTheme::default(),
        }
    }
}

/// Explicit owner of `SessionState`; every mutation goes through a
/// transition method.
#[derive(Debug, Clone, PartialEq)]
pub struct StageController {
    session: SessionState,
    loading_delay_ms: u32,
    // Bumped on every transition so older loading tickets go stale.
    generation: u64,
    pending: Option<LoadingTicket>,
}

impl StageController {
    pub fn new(start: StartPage, is_dark_mode: bool) -> Self {
        Self {
            session: SessionState {
                stage: start.into(),
                is_dark_mode,
                color_theme: ColorTheme::default(),
            },
            loading_delay_ms: DEFAULT_LOADING_DELAY_MS,
            generation: 0,
            pending: None,
        }
    }

    pub fn with_loading_delay(mut self, delay_ms: u32) -> Self {
        self.loading_delay_ms = delay_ms;
        self
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn stage(&self) -> Stage {
        self.session.stage
    }

    pub fn is_dark_mode(&self) -> bool {
        self.session.is_dark_mode
    }

    pub fn color_theme(&self) -> ColorTheme {
        self.session.color_theme
    }

    /// The loading timer still waiting to fire, if any
    pub fn pending_loading(&self) -> Option<LoadingSchedule> {
        self.pending.map(|ticket| LoadingSchedule {
            ticket,
            delay_ms: self.loading_delay_ms,
        })
    }

    /// `Intro -> Loading`. Returns the timer the caller has to schedule, or
    /// `None` when not on the intro stage.
    pub fn enter(&mut self) -> Option<LoadingSchedule> {
        if self.session.stage != Stage::Intro {
            return None;
        }
        self.generation += 1;
        let ticket = LoadingTicket(self.generation);
        self.pending = Some(ticket);
        self.session.stage = Stage::Loading;
        Some(LoadingSchedule {
            ticket,
            delay_ms: self.loading_delay_ms,
        })
    }

    /// `Loading -> Celebration` for the timer identified by `ticket`.
    /// Stale tickets are ignored.
    pub fn finish_loading(&mut self, ticket: LoadingTicket) -> bool {
        if self.session.stage != Stage::Loading || self.pending != Some(ticket) {
            return false;
        }
        self.pending = None;
        self.session.stage = Stage::Celebration;
        true
    }

    /// Abandon an in-flight loading phase, e.g. when its timer was torn
    /// down before firing.
    pub fn cancel_loading(&mut self) -> bool {
        if self.session.stage != Stage::Loading {
            return false;
        }
        self.pending = None;
        self.generation += 1;
        self.session.stage = Stage::Intro;
        true
    }

    /// `Celebration -> Intro`, immediate.
    pub fn return_home(&mut self) -> bool {
        if self.session.stage != Stage::Celebration {
            return false;
        }
        self.generation += 1;
        self.session.stage = Stage::Intro;
        true
    }

    pub fn toggle_dark_mode(&mut self) -> bool {
        self.session.is_dark_mode = !self.session.is_dark_mode;
        self.session.is_dark_mode
    }

    pub fn set_color_theme(&mut self, theme: ColorTheme) {
        self.session.color_theme = theme;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_sequence() {
        let mut controller = StageController::new(StartPage::Intro, false);
        assert_eq!(controller.stage(), Stage::Intro);

        let schedule = controller.enter().unwrap();
        assert_eq!(schedule.delay_ms, DEFAULT_LOADING_DELAY_MS);
        assert_eq!(controller.stage(), Stage::Loading);

        assert_eq!(controller.pending_loading(), Some(schedule));

        assert!(controller.finish_loading(schedule.ticket));
        assert_eq!(controller.stage(), Stage::Celebration);
        assert!(controller.pending_loading().is_none());

        assert!(controller.return_home());
        assert_eq!(controller.stage(), Stage::Intro);
    }

    #[test]
    fn test_birthday_route_starts_at_celebration() {
        let controller = StageController::new(StartPage::Celebration, true);
        assert_eq!(controller.stage(), Stage::Celebration);
        assert!(controller.is_dark_mode());
    }

    #[test]
    fn test_invalid_transitions_are_ignored() {
        let mut controller = StageController::new(StartPage::Intro, true);
        assert!(!controller.return_home());
        assert!(!controller.cancel_loading());

        controller.enter().unwrap();
        // Entering twice must not schedule a second timer
        assert!(controller.enter().is_none());
        assert!(!controller.return_home());
    }

    #[test]
    fn test_stale_ticket_does_not_move_stage() {
        let mut controller = StageController::new(StartPage::Intro, true);
        let first = controller.enter().unwrap();
        assert!(controller.cancel_loading());

        let second = controller.enter().unwrap();
        assert_ne!(first.ticket, second.ticket);

        assert!(!controller.finish_loading(first.ticket));
        assert_eq!(controller.stage(), Stage::Loading);
        assert!(controller.finish_loading(second.ticket));
        assert_eq!(controller.stage(), Stage::Celebration);

        // A ticket is single use
        assert!(!controller.finish_loading(second.ticket));
    }

    #[test]
    fn test_custom_loading_delay() {
        let mut controller = StageController::new(StartPage::Intro, true).with_loading_delay(500);
        assert_eq!(controller.enter().unwrap().delay_ms, 500);
    }

    #[test]
    fn test_session_flags() {
        let mut controller = StageController::new(StartPage::Intro, true);
        assert!(!controller.toggle_dark_mode());
        assert!(controller.toggle_dark_mode());

        controller.set_color_theme(ColorTheme::Purple);
        assert_eq!(controller.color_theme(), ColorTheme::Purple);
        assert_eq!(controller.session().stage, Stage::Intro);
    }

    #[test]
    fn test_stage_names() {
        assert_eq!(Stage::Intro.name(), "intro");
        assert_eq!(Stage::Loading.name(), "loading");
        assert_eq!(Stage::Celebration.name(), "celebration");
    }
}
