use shared::{CelebrationConfig, Notice, Stage, StartPage};
use yew::prelude::*;
use yew_router::prelude::*;

use super::audio_controller::AudioController;
use super::celebration::Celebration;
use super::dark_mode_toggle::DarkModeToggle;
use super::intro_page::IntroPage;
use super::loading_screen::LoadingScreen;
use super::theme_selector::ThemeSelector;
use crate::hooks::use_stage::use_stage;
use crate::hooks::use_toast::use_toast;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct BirthdayPageProps {
    pub start: StartPage,
    pub config: CelebrationConfig,
}

/// Top-level page: owns the session and switches between stages
#[function_component(BirthdayPage)]
pub fn birthday_page(props: &BirthdayPageProps) -> Html {
    let stage = use_stage(props.start, props.config.loading_delay_ms);
    let celebrant = use_state(|| props.config.celebrant.clone());
    let navigator = use_navigator();
    let notify = use_toast();

    let session = &stage.session;
    let actions = stage.actions.clone();

    let on_photo = {
        let celebrant = celebrant.clone();
        Callback::from(move |data_url: String| celebrant.set(celebrant.with_photo(data_url)))
    };

    let on_home = {
        let return_home = actions.return_home.clone();
        Callback::from(move |_: ()| {
            notify.emit(Notice::returning_home());
            return_home.emit(());
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
            }
        })
    };

    let music = &props.config.music;
    let track = match session.stage {
        Stage::Intro | Stage::Loading => music.intro.clone(),
        Stage::Celebration => music.celebration.clone(),
    };

    let content = match session.stage {
        Stage::Intro => html! {
            <IntroPage
                config={props.config.clone()}
                celebrant={(*celebrant).clone()}
                on_enter={actions.enter.clone()}
                {on_photo}
            />
        },
        Stage::Loading => html! {
            <LoadingScreen name={celebrant.name.clone()} />
        },
        Stage::Celebration => html! {
            <Celebration
                config={props.config.clone()}
                celebrant={(*celebrant).clone()}
                is_dark_mode={session.is_dark_mode}
                {on_home}
            />
        },
    };

    html! {
        <div class={classes!("birthday-page", format!("stage-{}", session.stage.name()))}>
            <div class="page-controls">
                <AudioController src={track} volume={music.volume} />
                <ThemeSelector current={session.color_theme} on_select={actions.set_color_theme.clone()} />
                <DarkModeToggle is_dark_mode={session.is_dark_mode} on_toggle={actions.toggle_dark_mode.clone()} />
            </div>
            <main class="stage-content">
                {content}
            </main>
        </div>
    }
}
