use std::rc::Rc;

use shared::{ColorTheme, LoadingTicket, SessionState, StageController, StartPage};
use yew::prelude::*;

use crate::hooks::use_interval::use_timeout;
use crate::services::document;
use crate::services::logging::Logger;

pub enum StageAction {
    Enter,
    FinishLoading(LoadingTicket),
    ReturnHome,
    ToggleDarkMode,
    SetColorTheme(ColorTheme),
}

#[derive(Clone, PartialEq)]
pub struct StageState {
    controller: StageController,
}

impl Reducible for StageState {
    type Action = StageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut controller = self.controller.clone();
        let changed = match action {
            StageAction::Enter => controller.enter().is_some(),
            StageAction::FinishLoading(ticket) => controller.finish_loading(ticket),
            StageAction::ReturnHome => controller.return_home(),
            StageAction::ToggleDarkMode => {
                controller.toggle_dark_mode();
                true
            }
            StageAction::SetColorTheme(theme) => {
                controller.set_color_theme(theme);
                true
            }
        };
        if !changed {
            return self;
        }
        Logger::debug_with_component("stage", &format!("Stage is now {}", controller.stage().name()));
        Rc::new(Self { controller })
    }
}

#[derive(Clone, PartialEq)]
pub struct UseStageActions {
    pub enter: Callback<()>,
    pub return_home: Callback<()>,
    pub toggle_dark_mode: Callback<()>,
    pub set_color_theme: Callback<ColorTheme>,
}

pub struct UseStageResult {
    pub session: SessionState,
    pub actions: UseStageActions,
}

/// Owns the page's `StageController`.
///
/// The `Loading -> Celebration` timer is keyed on the pending loading
/// ticket, so leaving the loading stage cancels it and a late firing is
/// ignored by the controller.
#[hook]
pub fn use_stage(start: StartPage, loading_delay_ms: u32) -> UseStageResult {
    let state = use_reducer(|| StageState {
        controller: StageController::new(start, document::prefers_dark()).with_loading_delay(loading_delay_ms),
    });

    let pending = state.controller.pending_loading();
    {
        let dispatcher = state.dispatcher();
        use_timeout(
            pending.map(|schedule| schedule.ticket),
            pending.map(|schedule| schedule.delay_ms).unwrap_or(loading_delay_ms),
            Callback::from(move |ticket| dispatcher.dispatch(StageAction::FinishLoading(ticket))),
        );
    }

    let is_dark_mode = state.controller.is_dark_mode();
    use_effect_with(is_dark_mode, |is_dark_mode| {
        document::apply_dark_class(*is_dark_mode);
    });

    let color_theme = state.controller.color_theme();
    use_effect_with(color_theme, |theme| {
        document::apply_theme_class(*theme);
    });

    let actions = {
        let dispatcher = state.dispatcher();
        let enter = {
            let dispatcher = dispatcher.clone();
            Callback::from(move |_| dispatcher.dispatch(StageAction::Enter))
        };
        let return_home = {
            let dispatcher = dispatcher.clone();
            Callback::from(move |_| dispatcher.dispatch(StageAction::ReturnHome))
        };
        let toggle_dark_mode = {
            let dispatcher = dispatcher.clone();
            Callback::from(move |_| dispatcher.dispatch(StageAction::ToggleDarkMode))
        };
        let set_color_theme = Callback::from(move |theme| dispatcher.dispatch(StageAction::SetColorTheme(theme)));
        UseStageActions {
            enter,
            return_home,
            toggle_dark_mode,
            set_color_theme,
        }
    };

    UseStageResult {
        session: state.controller.session().clone(),
        actions,
    }
}
