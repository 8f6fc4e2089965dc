use chrono::{Duration, Utc};
use yew::prelude::*;

use crate::components::campaign_results::CampaignResults;
use crate::components::countdown::Countdown;
use crate::components::notification::Notification;
use crate::components::strategy_call_form::StrategyCallForm;
use crate::config;
use crate::lead;

#[function_component(Landing)]
pub fn landing() -> Html {
    let price_raise_at =
        use_state(|| Utc::now() + Duration::minutes(config::COUNTDOWN_HORIZON_MINUTES));

    let on_cta_click = Callback::from(|_: ()| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(lead::FORM_ANCHOR);
        }
    });

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .landing-page {
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        color: #0a0a0a;
                        background: #fff;
                    }
                    .hero {
                        position: relative;
                        max-width: 80rem;
                        margin: 6rem auto 0;
                        padding: 0 1.5rem;
                    }
                    .hero-content {
                        max-width: 48rem;
                    }
                    .availability {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        margin-bottom: 1.5rem;
                    }
                    .availability-dot {
                        position: relative;
                        display: flex;
                        width: 0.75rem;
                        height: 0.75rem;
                        align-items: center;
                        justify-content: center;
                    }
                    .availability-dot::before {
                        content: '';
                        position: absolute;
                        width: 0.75rem;
                        height: 0.75rem;
                        border-radius: 50%;
                        background: #22c55e;
                        opacity: 0.75;
                        animation: availabilityPing 1s cubic-bezier(0, 0, 0.2, 1) infinite;
                    }
                    .availability-dot::after {
                        content: '';
                        position: relative;
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 50%;
                        background: #22c55e;
                    }
                    @keyframes availabilityPing {
                        75%, 100% { transform: scale(2); opacity: 0; }
                    }
                    .availability-text {
                        font-size: 0.875rem;
                        font-weight: 500;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                        color: #404040;
                    }
                    .hero h1 {
                        font-size: 3rem;
                        font-weight: 500;
                        letter-spacing: -0.025em;
                        margin: 0;
                    }
                    .hero h1 .accent {
                        color: #8f00ff;
                    }
                    .hero-subtitle {
                        margin-top: 1.5rem;
                        font-size: 1.25rem;
                        color: #525252;
                    }
                    .hero-countdown {
                        margin-top: 2rem;
                        display: flex;
                        padding-left: 0.625rem;
                    }
                    @media (min-width: 640px) {
                        .hero { margin-top: 8rem; }
                        .hero h1 { font-size: 4.5rem; }
                    }
                "#}
            </style>
            <header class="hero">
                <div class="hero-content">
                    <div class="availability">
                        <div class="availability-dot"></div>
                        <span class="availability-text">{"ДЛЯ B2B АГЕНЦІЙ З РЕВЕНЮ >$30K/МІС."}</span>
                    </div>
                    <h1>
                        {"Наша система яка приносить нам "}
                        <span class="accent">{"+20 лідів/місяць з чеком від $7k"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"і як ми можемо впровадити такий самий BehanceIQ™ фреймворк для вас."}
                    </p>
                    <StrategyCallForm />
                    <div class="hero-countdown">
                        <Countdown target={*price_raise_at} />
                    </div>
                </div>
            </header>

            <CampaignResults class="landing-section" />

            <Notification on_cta_click={on_cta_click} />
        </div>
    }
}
