//! Birthday countdown and elapsed-time statistics.
//!
//! Everything here is a pure function of the date of birth and a wall-clock
//! reading. The frontend calls these once per second; nothing is stored
//! between ticks.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Text shown when the anniversary is today
pub const BIRTHDAY_TODAY_TEXT: &str = "It's your birthday today!";

/// Time elapsed since birth, each unit counted independently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ElapsedStats {
    pub years: i64,
    pub months: i64,
    pub weeks: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

/// Remaining time split into display units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeRemaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

/// One tick of the birthday countdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownSnapshot {
    /// Whole days until the next anniversary, rounded up. Zero only on the day.
    pub days_until: u32,
    pub remaining: TimeRemaining,
    pub time_remaining: String,
    pub is_birthday_today: bool,
    /// Date of the anniversary being counted down to
    pub target: NaiveDate,
}

impl CountdownSnapshot {
    pub fn days_until_label(&self) -> String {
        match self.days_until {
            0 => "It's today!".to_string(),
            1 => "Tomorrow!".to_string(),
            n => format!("{} days left", n),
        }
    }
}

/// Midnight at the start of the date of birth
pub fn birth_instant(dob: NaiveDate) -> NaiveDateTime {
    dob.and_time(NaiveTime::MIN)
}

/// Whole calendar months from `start` to `end`. Adding months clamps to the
/// end of shorter months, so Jan 31 + 1 month is Feb 28/29.
fn whole_months_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    if end <= start {
        return 0;
    }
    let estimate = (end.year() - start.year()) as i64 * 12 + end.month() as i64 - start.month() as i64;
    let mut months = estimate.max(0);
    while months > 0 {
        match start.checked_add_months(Months::new(months as u32)) {
            Some(shifted) if shifted <= end => break,
            _ => months -= 1,
        }
    }
    months
}

/// Elapsed years/months/weeks/days/hours/minutes/seconds since birth.
/// All zero when `now` is before the date of birth.
pub fn elapsed_since(dob: NaiveDate, now: NaiveDateTime) -> ElapsedStats {
    let born = birth_instant(dob);
    if now <= born {
        return ElapsedStats::default();
    }

    let months = whole_months_between(born, now);
    let delta = now - born;
    let days = delta.num_days();

    ElapsedStats {
        years: months / 12,
        months,
        weeks: days / 7,
        days,
        hours: delta.num_hours(),
        minutes: delta.num_minutes(),
        seconds: delta.num_seconds(),
    }
}

/// Completed years of age on `on`
pub fn age_on(dob: NaiveDate, on: NaiveDate) -> u32 {
    if on <= dob {
        return 0;
    }
    let mut age = on.year() - dob.year();
    if (on.month(), on.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    age.max(0) as u32
}

/// Date counted down to for the anniversary of `dob` in `year`. A
/// February 29 birthday counts down to March 1 in non-leap years.
pub fn anniversary_in(dob: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, dob.month(), dob.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(dob)
}

/// Exact month and day match with the date of birth
pub fn is_anniversary(dob: NaiveDate, date: NaiveDate) -> bool {
    (date.month(), date.day()) == (dob.month(), dob.day())
}

/// Next anniversary on or after `today`, comparing dates only. `today` is
/// only returned on an exact month and day match.
pub fn next_anniversary(dob: NaiveDate, today: NaiveDate) -> NaiveDate {
    let this_year = anniversary_in(dob, today.year());
    if today < this_year || (today == this_year && is_anniversary(dob, today)) {
        this_year
    } else {
        anniversary_in(dob, today.year() + 1)
    }
}

/// Countdown to the next anniversary as seen at `now`
pub fn countdown(dob: NaiveDate, now: NaiveDateTime) -> CountdownSnapshot {
    let today = now.date();
    let target = next_anniversary(dob, today);

    if is_anniversary(dob, today) {
        return CountdownSnapshot {
            days_until: 0,
            remaining: TimeRemaining::default(),
            time_remaining: BIRTHDAY_TODAY_TEXT.to_string(),
            is_birthday_today: true,
            target,
        };
    }

    let total = (birth_instant(target) - now).num_seconds().max(0);
    let remaining = TimeRemaining {
        days: total / SECONDS_PER_DAY,
        hours: (total % SECONDS_PER_DAY) / 3600,
        minutes: (total % 3600) / 60,
        seconds: total % 60,
    };
    // Round up so the day before reads "Tomorrow!" all day long
    let days_until = ((total + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY) as u32;

    CountdownSnapshot {
        days_until,
        remaining,
        time_remaining: format!(
            "{}d {}h {}m {}s",
            remaining.days, remaining.hours, remaining.minutes, remaining.seconds
        ),
        is_birthday_today: false,
        target,
    }
}

/// Age milestone card contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub title: &'static str,
    pub message: &'static str,
}

pub fn milestone_for(years: i64) -> Milestone {
    if years < 18 {
        Milestone {
            title: "Chapters of Change 📖✨",
            message: "These formative years are perfect for exploration, learning, and discovering your passions. 🌱 Embrace every opportunity to grow and learn! 🌟",
        }
    } else if years < 25 {
        Milestone {
            title: "Early Twenties 🌟💫",
            message: "Your twenties are perfect for exploration and building your foundation. 🏗️ Set bold goals and take inspired action toward your dreams! 🚀",
        }
    } else if years < 30 {
        Milestone {
            title: "Late Twenties 🕰️🎯",
            message: "This is a time of refinement and focus. 🔍 You're gaining clarity about your path and have the energy to pursue it with dedication! 🔥",
        }
    } else {
        Milestone {
            title: "Thirties and Beyond 🎉🌍",
            message: "A time of confidence and achievement. 🏆 You've gained valuable experience and are positioned to make your most significant contributions! 💼💡",
        }
    }
}

/// "May 12, 2007" style date for headings
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Duration};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, s).unwrap()
    }

    #[test]
    fn test_countdown_on_birthday() {
        let dob = date(2007, 5, 12);
        let snapshot = countdown(dob, at(2025, 5, 12, 0, 0, 0));

        assert!(snapshot.is_birthday_today);
        assert_eq!(snapshot.days_until, 0);
        assert_eq!(snapshot.time_remaining, BIRTHDAY_TODAY_TEXT);
        assert_eq!(snapshot.remaining, TimeRemaining::default());
        assert_eq!(snapshot.days_until_label(), "It's today!");

        let stats = elapsed_since(dob, at(2025, 5, 12, 0, 0, 0));
        assert_eq!(stats.years, 18);
    }

    #[test]
    fn test_birthday_holds_all_day() {
        let dob = date(2007, 5, 12);
        let snapshot = countdown(dob, at(2025, 5, 12, 23, 59, 59));
        assert!(snapshot.is_birthday_today);
        assert_eq!(snapshot.target, date(2025, 5, 12));
    }

    #[test]
    fn test_countdown_rolls_to_next_year() {
        let dob = date(2007, 5, 12);
        let snapshot = countdown(dob, at(2025, 5, 13, 0, 0, 0));

        assert!(!snapshot.is_birthday_today);
        assert_eq!(snapshot.target, date(2026, 5, 12));
        assert_eq!(snapshot.days_until, 364);
        assert_eq!(snapshot.time_remaining, "364d 0h 0m 0s");
    }

    #[test]
    fn test_countdown_day_before() {
        let dob = date(2007, 5, 12);
        let snapshot = countdown(dob, at(2025, 5, 11, 18, 30, 15));

        assert_eq!(snapshot.target, date(2025, 5, 12));
        assert_eq!(snapshot.days_until, 1);
        assert_eq!(snapshot.days_until_label(), "Tomorrow!");
        assert_eq!(
            snapshot.remaining,
            TimeRemaining { days: 0, hours: 5, minutes: 29, seconds: 45 }
        );
        assert_eq!(snapshot.time_remaining, "0d 5h 29m 45s");
    }

    #[test]
    fn test_days_until_range_over_two_years() {
        let dob = date(2007, 5, 12);
        let mut now = at(2024, 1, 1, 13, 0, 0);
        let end = at(2026, 1, 1, 0, 0, 0);

        while now < end {
            let snapshot = countdown(dob, now);
            assert!(snapshot.days_until <= 366);
            assert_eq!(snapshot.days_until == 0, is_anniversary(dob, now.date()));
            assert_eq!(snapshot.is_birthday_today, snapshot.days_until == 0);
            now += Duration::hours(7);
        }
    }

    #[test]
    fn test_leap_day_anniversary() {
        let dob = date(2004, 2, 29);
        assert_eq!(anniversary_in(dob, 2025), date(2025, 3, 1));
        assert_eq!(anniversary_in(dob, 2028), date(2028, 2, 29));

        let eve = countdown(dob, at(2025, 2, 28, 12, 0, 0));
        assert!(!eve.is_birthday_today);
        assert_eq!(eve.target, date(2025, 3, 1));
        assert_eq!(eve.days_until, 1);

        let march = countdown(dob, at(2025, 3, 1, 0, 0, 0));
        assert!(!march.is_birthday_today);
        assert_eq!(march.target, date(2026, 3, 1));
        assert_eq!(march.days_until, 365);

        let leap = countdown(dob, at(2028, 2, 29, 8, 0, 0));
        assert!(leap.is_birthday_today);
        assert_eq!(leap.target, date(2028, 2, 29));
    }

    #[test]
    fn test_zero_days_only_on_matching_month_and_day() {
        for dob in [date(2007, 5, 12), date(2004, 2, 29), date(2000, 1, 1), date(1999, 12, 31)] {
            let mut now = at(2024, 1, 1, 13, 0, 0);
            let end = at(2029, 1, 1, 0, 0, 0);
            while now < end {
                let snapshot = countdown(dob, now);
                let same_day = now.month() == dob.month() && now.day() == dob.day();
                assert_eq!(snapshot.days_until == 0, same_day, "dob {} at {}", dob, now);
                assert_eq!(snapshot.is_birthday_today, same_day);
                assert!((1..=366).contains(&snapshot.days_until) || same_day);
                now += Duration::hours(11);
            }
        }
    }

    #[test]
    fn test_days_until_labels() {
        let dob = date(2007, 5, 12);
        let snapshot = countdown(dob, at(2025, 5, 2, 0, 0, 0));
        assert_eq!(snapshot.days_until, 10);
        assert_eq!(snapshot.days_until_label(), "10 days left");
    }

    #[test]
    fn test_elapsed_counts() {
        let dob = date(2007, 5, 12);
        let stats = elapsed_since(dob, at(2007, 6, 20, 6, 30, 10));

        assert_eq!(stats.years, 0);
        assert_eq!(stats.months, 1);
        assert_eq!(stats.days, 39);
        assert_eq!(stats.weeks, 5);
        assert_eq!(stats.hours, 39 * 24 + 6);
        assert_eq!(stats.minutes, (39 * 24 + 6) * 60 + 30);
        assert_eq!(stats.seconds, ((39 * 24 + 6) * 60 + 30) * 60 + 10);
    }

    #[test]
    fn test_elapsed_month_end_clamping() {
        let dob = date(2023, 1, 31);
        assert_eq!(elapsed_since(dob, at(2023, 2, 27, 23, 0, 0)).months, 0);
        assert_eq!(elapsed_since(dob, at(2023, 2, 28, 0, 0, 0)).months, 1);
    }

    #[test]
    fn test_elapsed_before_birth_is_zero() {
        let dob = date(2007, 5, 12);
        assert_eq!(elapsed_since(dob, at(2000, 1, 1, 0, 0, 0)), ElapsedStats::default());
    }

    #[test]
    fn test_elapsed_non_decreasing_across_ticks() {
        let dob = date(2007, 5, 12);
        let mut now = at(2025, 5, 11, 23, 59, 0);
        let mut previous = elapsed_since(dob, now);

        for _ in 0..180 {
            now += Duration::seconds(1);
            let current = elapsed_since(dob, now);
            assert!(current.years >= previous.years);
            assert!(current.months >= previous.months);
            assert!(current.weeks >= previous.weeks);
            assert!(current.days >= previous.days);
            assert!(current.hours >= previous.hours);
            assert!(current.minutes >= previous.minutes);
            assert_eq!(current.seconds, previous.seconds + 1);
            previous = current;
        }
        assert_eq!(previous.years, 18);
    }

    #[test]
    fn test_age_on() {
        let dob = date(2007, 5, 12);
        assert_eq!(age_on(dob, date(2025, 5, 11)), 17);
        assert_eq!(age_on(dob, date(2025, 5, 12)), 18);
        assert_eq!(age_on(dob, date(2006, 1, 1)), 0);
    }

    #[test]
    fn test_milestones() {
        assert!(milestone_for(17).title.starts_with("Chapters of Change"));
        assert!(milestone_for(18).title.starts_with("Early Twenties"));
        assert!(milestone_for(27).title.starts_with("Late Twenties"));
        assert!(milestone_for(30).title.starts_with("Thirties and Beyond"));
    }

    #[test]
    fn test_format_long_date() {
        assert_eq!(format_long_date(date(2007, 5, 12)), "May 12, 2007");
    }
}
