use shared::{milestone_for, ElapsedStats};
use yew::prelude::*;

use super::sharing_buttons::SharingButtons;

#[derive(Properties, PartialEq)]
pub struct AgeStatsProps {
    pub elapsed: ElapsedStats,
    pub is_dark_mode: bool,
    pub share_filename: AttrValue,
    pub share_title: AttrValue,
}

fn stat_tile(label: &'static str, value: i64) -> Html {
    html! {
        <div class="stat-tile">
            <div class="stat-value">{format_count(value)}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}

/// Thousands separators for the larger counters
fn format_count(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if value < 0 {
        out.insert(0, '-');
    }
    out
}

/// Live "time on earth" counters with the milestone message
#[function_component(AgeStats)]
pub fn age_stats(props: &AgeStatsProps) -> Html {
    let card_ref = use_node_ref();
    let elapsed = props.elapsed;
    let milestone = milestone_for(elapsed.years);

    html! {
        <section class="card age-stats">
            <div ref={card_ref.clone()} class="card-capture">
                <h2 class="card-title">{"Your Life in Numbers"}</h2>
                <div class="stat-grid">
                    {stat_tile("Years", elapsed.years)}
                    {stat_tile("Months", elapsed.months)}
                    {stat_tile("Weeks", elapsed.weeks)}
                    {stat_tile("Days", elapsed.days)}
                    {stat_tile("Hours", elapsed.hours)}
                    {stat_tile("Minutes", elapsed.minutes)}
                    {stat_tile("Seconds", elapsed.seconds)}
                </div>
                <div class="milestone">
                    <h3 class="milestone-title">{milestone.title}</h3>
                    <p class="milestone-message">{milestone.message}</p>
                </div>
            </div>
            <SharingButtons
                target={card_ref}
                filename={props.share_filename.clone()}
                title={props.share_title.clone()}
                is_dark_mode={props.is_dark_mode}
            />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(6575), "6,575");
        assert_eq!(format_count(568_080_000), "568,080,000");
    }
}
