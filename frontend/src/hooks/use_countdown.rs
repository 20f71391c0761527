use chrono::{NaiveDate, NaiveDateTime};
use shared::{countdown, elapsed_since, CountdownSnapshot, ElapsedStats};
use yew::prelude::*;

use crate::hooks::use_interval::{use_interval, IntervalConfig};
use crate::services::date_utils;

pub struct UseCountdownResult {
    pub now: NaiveDateTime,
    pub snapshot: CountdownSnapshot,
    pub elapsed: ElapsedStats,
}

/// Wall clock sampled once per second, with the countdown and elapsed
/// figures for `date_of_birth` derived from it.
#[hook]
pub fn use_countdown(date_of_birth: NaiveDate) -> UseCountdownResult {
    let now = use_state(date_utils::now_local);

    {
        let now = now.clone();
        use_interval(
            IntervalConfig {
                label: "countdown",
                ..IntervalConfig::default()
            },
            Callback::from(move |_| now.set(date_utils::now_local())),
            false,
        );
    }

    UseCountdownResult {
        now: *now,
        snapshot: countdown(date_of_birth, *now),
        elapsed: elapsed_since(date_of_birth, *now),
    }
}
