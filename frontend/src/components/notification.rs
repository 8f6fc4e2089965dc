use std::cell::RefCell;
use std::rc::Rc;

use log::info;
use web_sys::js_sys::Math;
use yew::prelude::*;

use crate::scheduler::{notification_wait_ms, CycleAction, DelayedTask, NotificationCycle};

#[derive(Clone, PartialEq)]
pub struct Member {
    pub name: AttrValue,
    pub image: AttrValue,
    pub message: AttrValue,
    pub cta: Option<AttrValue>,
}

pub fn default_members() -> Vec<Member> {
    vec![
        Member {
            name: "Max Yakubovych".into(),
            image: "/avatars/1697718809001.jpeg".into(),
            message: "Щойнов взяв консультацію".into(),
            cta: Some("Забронювати місце".into()),
        },
        Member {
            name: "Taras Oliinyk".into(),
            image: "/avatars/1718570589655.jpeg".into(),
            message: "Придбав кервіництво по Behance".into(),
            cta: Some("Отримати доступ".into()),
        },
        Member {
            name: "Ivan Anisimov".into(),
            image: "/avatars/276.jpeg".into(),
            message: "Отримав доступ до BehanceIQ™".into(),
            cta: Some("Почати використання".into()),
        },
    ]
}

#[derive(Properties, PartialEq)]
pub struct NotificationProps {
    #[prop_or_else(default_members)]
    pub members: Vec<Member>,
    #[prop_or_else(|| AttrValue::from("Start with him"))]
    pub cta_text: AttrValue,
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
    #[prop_or_default]
    pub on_cta_click: Option<Callback<()>>,
    #[prop_or_default]
    pub class: Classes,
}

fn random_wait() -> u32 {
    notification_wait_ms(Math::random())
}

/// Everything a timer callback needs to advance the cycle and re-render.
#[derive(Clone)]
struct CycleDriver {
    cycle: Rc<RefCell<NotificationCycle>>,
    timer: Rc<RefCell<DelayedTask>>,
    view: UseStateHandle<(bool, usize)>,
}

impl CycleDriver {
    fn apply(&self, action: CycleAction) {
        {
            let cycle = self.cycle.borrow();
            self.view.set((cycle.is_visible(), cycle.member()));
        }
        match action {
            CycleAction::Schedule(delay) => {
                let driver = self.clone();
                self.timer.borrow_mut().arm(delay, move || {
                    let next = driver.cycle.borrow_mut().on_elapsed(random_wait());
                    driver.apply(next);
                });
            }
            CycleAction::Cancel => self.timer.borrow_mut().cancel(),
            CycleAction::Nothing => {}
        }
    }
}

/// Social proof pop-up: appears after a random wait, shows the next member
/// for a few seconds, hides and repeats.
#[function_component(Notification)]
pub fn notification(props: &NotificationProps) -> Html {
    let view = use_state_eq(|| (false, 0usize));
    let cycle = use_mut_ref(|| NotificationCycle::new(props.members.len()));
    let timer = use_mut_ref(DelayedTask::new);

    let driver = CycleDriver {
        cycle: cycle.clone(),
        timer: timer.clone(),
        view: view.clone(),
    };

    {
        let driver = driver.clone();
        use_effect_with_deps(
            move |member_count: &usize| {
                let action = driver.cycle.borrow_mut().reset(*member_count, random_wait());
                driver.apply(action);
                info!("Notification cycle started with {} members", member_count);

                move || {
                    driver.cycle.borrow_mut().stop();
                    driver.timer.borrow_mut().cancel();
                }
            },
            props.members.len(),
        );
    }

    let handle_close = {
        let driver = driver.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            let action = driver.cycle.borrow_mut().dismiss(random_wait());
            driver.apply(action);
            if let Some(on_close) = &on_close {
                on_close.emit(());
            }
        })
    };

    let handle_cta = {
        let on_cta_click = props.on_cta_click.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(on_cta_click) = &on_cta_click {
                on_cta_click.emit(());
            }
        })
    };

    let (visible, member_index) = *view;
    let member = match props.members.get(member_index).or_else(|| props.members.first()) {
        Some(member) if visible => member.clone(),
        _ => return html! {},
    };
    let cta = member.cta.clone().unwrap_or_else(|| props.cta_text.clone());

    html! {
        <div class={classes!("social-proof", props.class.clone())}>
            <style>
                {r#"
                    @keyframes socialProofIn {
                        from { opacity: 0; transform: translateY(-8px) scale(0.98); }
                        to { opacity: 1; transform: translateY(0) scale(1); }
                    }
                    .social-proof {
                        position: fixed;
                        bottom: 15vh;
                        right: 1rem;
                        z-index: 50;
                        width: 100%;
                        max-width: 24rem;
                        animation: socialProofIn 0.25s ease-out forwards;
                    }
                    .social-proof-card {
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                        padding: 1rem;
                        background: #fff;
                        border-radius: 16px;
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                        border: 1px solid rgba(10, 10, 10, 0.05);
                    }
                    .social-proof-card img {
                        width: 48px;
                        height: 48px;
                        border-radius: 50%;
                        object-fit: cover;
                    }
                    .social-proof-name {
                        font-size: 0.875rem;
                        font-weight: 600;
                        color: #0a0a0a;
                        margin: 0;
                    }
                    .social-proof-message {
                        font-size: 0.875rem;
                        color: #525252;
                        margin: 0.25rem 0 0;
                    }
                    .social-proof-cta {
                        margin-top: 0.75rem;
                        height: 2rem;
                        padding: 0 0.75rem;
                        font-size: 0.75rem;
                        border: none;
                        border-radius: 999px;
                        background: #0a0a0a;
                        color: #fff;
                        cursor: pointer;
                    }
                    .social-proof-close {
                        width: 2rem;
                        height: 2rem;
                        border: none;
                        border-radius: 50%;
                        background: transparent;
                        color: #a3a3a3;
                        cursor: pointer;
                        font-size: 1.25rem;
                    }
                    .social-proof-close:hover {
                        background: #f5f5f5;
                        color: #525252;
                    }
                    @media (min-width: 640px) {
                        .social-proof { right: 1.5rem; }
                    }
                "#}
            </style>
            <div class="social-proof-card">
                <img src={member.image.clone()} alt={member.name.clone()} width="48" height="48" />
                <div style="flex: 1; min-width: 0;">
                    <p class="social-proof-name">{member.name.clone()}</p>
                    <p class="social-proof-message">{member.message.clone()}</p>
                    <button class="social-proof-cta" onclick={handle_cta}>{cta}</button>
                </div>
                <button
                    type="button"
                    class="social-proof-close"
                    aria-label="Close notification"
                    onclick={handle_close}
                >
                    {"×"}
                </button>
            </div>
        </div>
    }
}
