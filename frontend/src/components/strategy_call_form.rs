use gloo_net::http::Request;
use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;
use crate::lead::{
    rejection, validate_email, StrategyCallRequest, StrategyCallResponse, SubmitError, FORM_ANCHOR,
    SUBMIT_PATH,
};
use crate::scheduler::DelayedTask;

async fn submit(request: StrategyCallRequest) -> Result<(), SubmitError> {
    let response = Request::post(&format!("{}{}", config::get_backend_url(), SUBMIT_PATH))
        .json(&request)
        .map_err(|e| SubmitError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    if response.ok() {
        if let Ok(body) = response.json::<StrategyCallResponse>().await {
            info!(
                "Strategy call accepted (success={}): {}",
                body.success,
                body.message.as_deref().unwrap_or("no message")
            );
        }
        return Ok(());
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(rejection(status, &body))
}

/// Email capture: submit button on the left, address on the right.
#[function_component(StrategyCallForm)]
pub fn strategy_call_form() -> Html {
    let email = use_state(String::new);
    let is_submitting = use_state(|| false);
    let show_success = use_state(|| false);
    let error = use_state(|| None::<String>);
    let success_timer = use_mut_ref(DelayedTask::new);

    {
        let success_timer = success_timer.clone();
        use_effect_with_deps(
            move |_| move || success_timer.borrow_mut().cancel(),
            (),
        );
    }

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let is_submitting = is_submitting.clone();
        let show_success = show_success.clone();
        let error = error.clone();
        let success_timer = success_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }

            let request = match validate_email(&email) {
                Ok(request) => request,
                Err(err) => {
                    error.set(Some(err.to_string()));
                    return;
                }
            };

            error.set(None);
            is_submitting.set(true);

            let email = email.clone();
            let is_submitting = is_submitting.clone();
            let show_success = show_success.clone();
            let error = error.clone();
            let success_timer = success_timer.clone();
            spawn_local(async move {
                match submit(request).await {
                    Ok(()) => {
                        info!("Strategy call request submitted");
                        email.set(String::new());
                        show_success.set(true);
                        let show_success = show_success.clone();
                        success_timer
                            .borrow_mut()
                            .arm(config::FORM_SUCCESS_VISIBLE_MS, move || show_success.set(false));
                    }
                    Err(err) => {
                        error!("Error submitting form: {}", err);
                        error.set(Some(err.to_string()));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    if *show_success {
        return html! {
            <div style="margin-top: 4rem; display: flex; justify-content: center;">
                <p style="color: #16a34a; font-size: 1.125rem; font-weight: 500;">
                    {"Thanks you, we will contact to you in shortly"}
                </p>
            </div>
        };
    }

    html! {
        <>
            <style>
                {r#"
                    .strategy-call-form {
                        margin-top: 4rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .strategy-call-form button {
                        padding: 1rem 1.5rem;
                        font-size: 1.25rem;
                        white-space: nowrap;
                        border: none;
                        border-radius: 999px;
                        background: #0a0a0a;
                        color: #fff;
                        cursor: pointer;
                    }
                    .strategy-call-form button:disabled,
                    .strategy-call-form input:disabled {
                        opacity: 0.5;
                        cursor: not-allowed;
                    }
                    .strategy-call-form input {
                        width: 100%;
                        box-sizing: border-box;
                        border: 1px solid #d4d4d4;
                        border-radius: 999px;
                        background: transparent;
                        padding: 1rem 1.5rem;
                        font-size: 1rem;
                        color: #0a0a0a;
                    }
                    .strategy-call-form input:focus {
                        border-color: #0a0a0a;
                        outline: none;
                    }
                    .strategy-call-error {
                        color: #dc2626;
                        font-size: 0.875rem;
                        margin: 0.5rem 0 0;
                    }
                    @media (min-width: 640px) {
                        .strategy-call-form {
                            flex-direction: row;
                            align-items: center;
                        }
                    }
                "#}
            </style>
            <form id={FORM_ANCHOR} class="strategy-call-form" {onsubmit}>
                <button type="submit" disabled={*is_submitting}>
                    { if *is_submitting { "Submitting..." } else { "FREE-КОНСУЛЬТАЦІЯ" } }
                </button>
                <div style="flex: 1;">
                    <input
                        type="email"
                        value={(*email).clone()}
                        {oninput}
                        placeholder="Enter your email address"
                        required=true
                        disabled={*is_submitting}
                        autocomplete="email"
                    />
                </div>
            </form>
            {
                if let Some(message) = (*error).as_ref() {
                    html! { <p class="strategy-call-error">{message.clone()}</p> }
                } else {
                    html! {}
                }
            }
        </>
    }
}
