use shared::countdown::format_long_date;
use shared::{CelebrantProfile, CelebrationConfig};
use web_sys::MouseEvent;
use yew::prelude::*;

use super::age_stats::AgeStats;
use super::countdown_card::CountdownCard;
use super::memory_carousel::MemoryCarousel;
use super::wish_card::WishCard;
use crate::hooks::use_countdown::use_countdown;

#[derive(Properties, PartialEq)]
pub struct CelebrationProps {
    pub config: CelebrationConfig,
    pub celebrant: CelebrantProfile,
    pub is_dark_mode: bool,
    pub on_home: Callback<()>,
}

fn ordinal_suffix(n: u32) -> &'static str {
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

#[function_component(Celebration)]
pub fn celebration(props: &CelebrationProps) -> Html {
    let countdown = use_countdown(props.celebrant.date_of_birth);
    let config = &props.config;
    let celebrant = &props.celebrant;

    let on_home = {
        let on_home = props.on_home.clone();
        Callback::from(move |_: MouseEvent| on_home.emit(()))
    };

    html! {
        <div class="celebration">
            <header class="celebration-header">
                <h1 class="celebration-title">
                    {format!(
                        "Happy {}{} Birthday, {}!",
                        config.display_age,
                        ordinal_suffix(config.display_age),
                        celebrant.name
                    )}
                </h1>
                <p class="celebration-date">{format_long_date(config.display_date)}</p>
            </header>

            <div class="celebration-grid">
                <AgeStats
                    elapsed={countdown.elapsed}
                    is_dark_mode={props.is_dark_mode}
                    share_filename={config.share.stats_filename.clone()}
                    share_title={config.share.stats_title.clone()}
                />
                <CountdownCard snapshot={countdown.snapshot} />
            </div>

            <MemoryCarousel media={config.memories.clone()} interval_ms={config.carousel_interval_ms} />

            <WishCard
                name={celebrant.name.clone()}
                wishes={config.wishes.clone()}
                is_dark_mode={props.is_dark_mode}
                photo={celebrant.photo.clone().map(AttrValue::from)}
                voice={celebrant.gender.voice()}
                share_filename={config.share.wish_filename.clone()}
                share_title={config.share.wish_title.clone()}
            />

            <footer class="celebration-footer">
                <p>{"Wishing you a day as special as you are!"}</p>
                <button type="button" class="btn btn-secondary" onclick={on_home}>{"Back to Start"}</button>
            </footer>
        </div>
    }
}
