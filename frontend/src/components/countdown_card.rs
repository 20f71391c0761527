use shared::countdown::{format_long_date, BIRTHDAY_TODAY_TEXT};
use shared::CountdownSnapshot;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CountdownCardProps {
    pub snapshot: CountdownSnapshot,
}

#[function_component(CountdownCard)]
pub fn countdown_card(props: &CountdownCardProps) -> Html {
    let snapshot = &props.snapshot;

    if snapshot.is_birthday_today {
        return html! {
            <section class="card countdown-card birthday-today">
                <h2 class="card-title">{"🎉 "}{BIRTHDAY_TODAY_TEXT}{" 🎉"}</h2>
                <p class="countdown-label">{snapshot.days_until_label()}</p>
            </section>
        };
    }

    let remaining = snapshot.remaining;
    html! {
        <section class="card countdown-card">
            <h2 class="card-title">{"Next Birthday Countdown"}</h2>
            <p class="countdown-target">{format_long_date(snapshot.target)}</p>
            <div class="countdown-grid">
                <div class="countdown-unit"><span class="countdown-value">{remaining.days}</span><span>{"Days"}</span></div>
                <div class="countdown-unit"><span class="countdown-value">{remaining.hours}</span><span>{"Hours"}</span></div>
                <div class="countdown-unit"><span class="countdown-value">{remaining.minutes}</span><span>{"Minutes"}</span></div>
                <div class="countdown-unit"><span class="countdown-value">{remaining.seconds}</span><span>{"Seconds"}</span></div>
            </div>
            <p class="countdown-label" title={snapshot.time_remaining.clone()}>{snapshot.days_until_label()}</p>
        </section>
    }
}
