use chrono::{DateTime, Utc};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::countdown::{pad2, TimeLeft};

#[derive(Properties, PartialEq)]
pub struct CountdownProps {
    pub target: DateTime<Utc>,
    #[prop_or_default]
    pub class: Classes,
}

#[derive(Properties, PartialEq)]
struct TimeUnitProps {
    value: i64,
    label: AttrValue,
}

#[function_component(TimeUnit)]
fn time_unit(props: &TimeUnitProps) -> Html {
    html! {
        <div class="countdown-unit">
            <span>{pad2(props.value)}</span>
            <span class="countdown-label">{props.label.clone()}</span>
        </div>
    }
}

/// Time left until the next price raise, refreshed every second.
#[function_component(Countdown)]
pub fn countdown(props: &CountdownProps) -> Html {
    let target = props.target;
    let time_left = use_state_eq(|| TimeLeft::until(target, Utc::now()));

    {
        let time_left = time_left.clone();
        use_effect_with_deps(
            move |target: &DateTime<Utc>| {
                time_left.set(TimeLeft::until(*target, Utc::now()));
                || ()
            },
            target,
        );
    }

    {
        let time_left = time_left.clone();
        use_interval(
            move || {
                time_left.set(TimeLeft::until(target, Utc::now()));
            },
            1000,
        );
    }

    let left = *time_left;

    html! {
        <div class={classes!("countdown", props.class.clone())}>
            <style>
                {r#"
                    .countdown {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }
                    .countdown-caption {
                        font-size: 0.875rem;
                        color: #525252;
                        margin: 0;
                    }
                    .countdown-digits {
                        display: flex;
                        gap: 0.5rem;
                        font-size: 1.5rem;
                        font-weight: 500;
                        color: #0a0a0a;
                    }
                    .countdown-unit {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                    }
                    .countdown-label {
                        font-size: 0.75rem;
                        color: #737373;
                    }
                    .countdown-separator {
                        color: #a3a3a3;
                    }
                "#}
            </style>
            <p class="countdown-caption">{"До підняття ціни:"}</p>
            <div class="countdown-digits">
                <TimeUnit value={left.days} label="Днів" />
                <span class="countdown-separator">{":"}</span>
                <TimeUnit value={left.hours} label="Годин" />
                <span class="countdown-separator">{":"}</span>
                <TimeUnit value={left.minutes} label="Хвилин" />
                <span class="countdown-separator">{":"}</span>
                <TimeUnit value={left.seconds} label="Секунд" />
            </div>
        </div>
    }
}
