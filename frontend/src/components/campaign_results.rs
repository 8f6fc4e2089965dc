use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{AddEventListenerOptions, Element, HtmlElement, ResizeObserver, ResizeObserverEntry};
use yew::prelude::*;

use crate::config;
use crate::gallery::{FrameScheduler, GalleryController, ScrollSample, SpringConfig};
use crate::scheduler::DelayedTask;

#[derive(Clone, PartialEq)]
pub struct CampaignCase {
    pub id: u32,
    pub client: AttrValue,
    pub metric: AttrValue,
    pub metric_label: AttrValue,
    pub description: AttrValue,
    pub duration: AttrValue,
    pub industry: AttrValue,
    /// CSS gradient used for the metric badge.
    pub accent: AttrValue,
}

pub fn default_cases() -> Vec<CampaignCase> {
    vec![
        CampaignCase {
            id: 1,
            client: "Peiko Agency".into(),
            metric: "+350%".into(),
            metric_label: "Збільшення кількості лідів".into(),
            description: "Впровадження BehanceIQ™ дало стабільний потік лідів".into(),
            duration: "90 днів".into(),
            industry: "Дизайн для B2B".into(),
            accent: "linear-gradient(135deg, #a855f7, #ec4899)".into(),
        },
        CampaignCase {
            id: 2,
            client: "DizArm Agency".into(),
            metric: "+20".into(),
            metric_label: "Кваліфікованих лідів на місяць".into(),
            description: "Стабільний щомісячний потік лідів із середнім чеком від $7k".into(),
            duration: "60 днів".into(),
            industry: "Креативна агенція".into(),
            accent: "linear-gradient(135deg, #3b82f6, #06b6d4)".into(),
        },
        CampaignCase {
            id: 3,
            client: "Marketing Agency".into(),
            metric: "$140k+".into(),
            metric_label: "Згенерований дохід".into(),
            description: "Конвертація кейсів в лідген за допомогою фреймворку BehanceIQ™".into(),
            duration: "120 днів".into(),
            industry: "B2B Services".into(),
            accent: "linear-gradient(135deg, #22c55e, #10b981)".into(),
        },
    ]
}

#[derive(Properties, PartialEq)]
pub struct CampaignResultsProps {
    #[prop_or_else(default_cases)]
    pub cases: Vec<CampaignCase>,
    #[prop_or_default]
    pub class: Classes,
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `requestAnimationFrame` backed scheduler. The callback is installed once
/// the controller exists, since the callback needs a handle back to it.
struct AnimationFrames {
    callback: FrameCallback,
}

impl FrameScheduler for AnimationFrames {
    type Token = i32;

    fn request_frame(&mut self) -> Option<i32> {
        let window = web_sys::window()?;
        let callback = self.callback.borrow();
        let callback = callback.as_ref()?;
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => Some(id),
            Err(e) => {
                warn!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, token: i32) {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(token);
        }
    }
}

fn read_sample(region: &NodeRef) -> Option<ScrollSample> {
    let window = web_sys::window()?;
    let region = region.cast::<Element>()?;
    let scroll_y = window.scroll_y().ok()?;
    Some(ScrollSample {
        scroll_y,
        region_top: region.get_bounding_client_rect().top(),
    })
}

fn row_width(row: &NodeRef) -> Option<f64> {
    row.cast::<Element>().map(|row| row.scroll_width() as f64)
}

fn ghost_width(ghost: &NodeRef) -> Option<f64> {
    ghost.cast::<Element>().map(|ghost| ghost.client_width() as f64)
}

fn window_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

fn apply_offset(row: &NodeRef, offset: f64) {
    if let Some(row) = row.cast::<HtmlElement>() {
        let _ = row
            .style()
            .set_property("transform", &format!("translate3d({}px, 0px, 0px)", offset));
    }
}

#[function_component(CampaignResults)]
pub fn campaign_results(props: &CampaignResultsProps) -> Html {
    let region_ref = use_node_ref();
    let row_ref = use_node_ref();
    let ghost_ref = use_node_ref();
    let pannable = use_state_eq(|| 0.0_f64);

    {
        let region_ref = region_ref.clone();
        let row_ref = row_ref.clone();
        let ghost_ref = ghost_ref.clone();
        let pannable = pannable.clone();
        use_effect_with_deps(
            move |card_count: &usize| {
                let frame_callback: FrameCallback = Rc::new(RefCell::new(None));
                let gallery = Rc::new(RefCell::new(GalleryController::new(
                    *card_count,
                    SpringConfig::default(),
                    AnimationFrames {
                        callback: frame_callback.clone(),
                    },
                )));

                {
                    let gallery = Rc::downgrade(&gallery);
                    let region_ref = region_ref.clone();
                    let row_ref = row_ref.clone();
                    let pannable = pannable.clone();
                    *frame_callback.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
                        let Some(gallery) = gallery.upgrade() else {
                            return;
                        };
                        let snapshot = gallery.borrow_mut().on_frame(now, read_sample(&region_ref));
                        if let Some(snapshot) = snapshot {
                            apply_offset(&row_ref, snapshot.offset);
                            pannable.set(snapshot.pannable_distance);
                        }
                    }) as Box<dyn FnMut(f64)>));
                }

                let initial = gallery.borrow_mut().mount(
                    row_width(&row_ref),
                    ghost_width(&ghost_ref),
                    read_sample(&region_ref),
                );
                if let Some(snapshot) = initial {
                    apply_offset(&row_ref, snapshot.offset);
                    pannable.set(snapshot.pannable_distance);
                }
                info!("Campaign results gallery mounted with {} cards", card_count);

                let window = web_sys::window();

                let scroll_callback = {
                    let gallery = gallery.clone();
                    Closure::wrap(Box::new(move || {
                        gallery.borrow_mut().on_scroll();
                    }) as Box<dyn FnMut()>)
                };

                // Viewport width comes from observing the ghost spacer; the
                // window width only stands in when ResizeObserver is missing.
                let observer_callback = {
                    let gallery = gallery.clone();
                    Closure::wrap(Box::new(move |entries: Array| {
                        for entry in entries.iter() {
                            if let Ok(entry) = entry.dyn_into::<ResizeObserverEntry>() {
                                gallery
                                    .borrow_mut()
                                    .observe_viewport(entry.content_rect().width());
                            }
                        }
                    }) as Box<dyn FnMut(Array)>)
                };
                let observer = match ResizeObserver::new(observer_callback.as_ref().unchecked_ref()) {
                    Ok(observer) => {
                        if let Some(ghost) = ghost_ref.cast::<Element>() {
                            observer.observe(&ghost);
                        }
                        Some(observer)
                    }
                    Err(_) => {
                        debug!("ResizeObserver unavailable, tracking window width");
                        if let Some(width) = window_width() {
                            gallery.borrow_mut().observe_viewport(width);
                        }
                        None
                    }
                };
                let observing = observer.is_some();

                let resize_callback = {
                    let gallery = gallery.clone();
                    let row_ref = row_ref.clone();
                    Closure::wrap(Box::new(move || {
                        let mut gallery = gallery.borrow_mut();
                        gallery.measure(row_width(&row_ref));
                        if !observing {
                            if let Some(width) = window_width() {
                                gallery.observe_viewport(width);
                            }
                        }
                        gallery.on_resize();
                    }) as Box<dyn FnMut()>)
                };

                if let Some(window) = window.as_ref() {
                    let mut options = AddEventListenerOptions::new();
                    options.passive(true);
                    if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        warn!("Failed to attach gallery scroll listener: {:?}", e);
                    }
                    if let Err(e) = window.add_event_listener_with_callback(
                        "resize",
                        resize_callback.as_ref().unchecked_ref(),
                    ) {
                        warn!("Failed to attach gallery resize listener: {:?}", e);
                    }
                }

                let mut settle = DelayedTask::new();
                {
                    let gallery = Rc::downgrade(&gallery);
                    let row_ref = row_ref.clone();
                    settle.arm(config::GALLERY_SETTLE_DELAY_MS, move || {
                        if let Some(gallery) = gallery.upgrade() {
                            gallery.borrow_mut().measure(row_width(&row_ref));
                        }
                    });
                }

                move || {
                    settle.cancel();
                    if let Some(window) = window.as_ref() {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                        let _ = window.remove_event_listener_with_callback(
                            "resize",
                            resize_callback.as_ref().unchecked_ref(),
                        );
                    }
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    gallery.borrow_mut().teardown();
                    frame_callback.borrow_mut().take();
                    drop(observer_callback);
                    info!("Campaign results gallery unmounted");
                }
            },
            props.cases.len(),
        );
    }

    let ghost_height = if *pannable > 0.0 {
        format!("{}px", *pannable)
    } else {
        "100vh".to_string()
    };

    html! {
        <section id="campaign-results" class={classes!("campaign-results", props.class.clone())}>
            <style>
                {r#"
                    .campaign-results {
                        position: relative;
                        width: 100%;
                    }
                    .campaign-results-header {
                        display: flex;
                        justify-content: center;
                        padding: 3rem 1.5rem;
                        text-align: center;
                        background: linear-gradient(to bottom, #fff, #fafafa);
                    }
                    .campaign-results-header h2 {
                        font-size: 2.5rem;
                        font-weight: 500;
                        color: #0a0a0a;
                        margin: 0;
                    }
                    .campaign-results-header p {
                        margin-top: 1rem;
                        font-size: 1.125rem;
                        color: #525252;
                    }
                    .campaign-region {
                        position: relative;
                    }
                    .campaign-pin {
                        position: sticky;
                        top: 0;
                        height: 100vh;
                        width: 100%;
                        overflow: hidden;
                        background: linear-gradient(to bottom, #fafafa, #fff);
                    }
                    .campaign-row {
                        display: flex;
                        height: 100%;
                        will-change: transform;
                    }
                    .campaign-slot {
                        flex-shrink: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 100vw;
                        height: 100vh;
                    }
                    .campaign-card {
                        position: relative;
                        background: #fff;
                        border: 2px solid #e5e5e5;
                        border-radius: 16px;
                        padding: 2.5rem;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        max-width: 32rem;
                        width: 100%;
                        margin: 0 1rem;
                        transition: box-shadow 0.3s ease;
                    }
                    .campaign-card:hover {
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15);
                    }
                    .campaign-label {
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #737373;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                    }
                    .campaign-client {
                        font-size: 1.5rem;
                        font-weight: 600;
                        color: #0a0a0a;
                        margin: 0.5rem 0 1rem;
                    }
                    .campaign-metric {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        min-width: 5rem;
                        height: 5rem;
                        padding: 0 0.75rem;
                        border-radius: 16px;
                        color: #fff;
                        font-size: 1.875rem;
                        font-weight: 700;
                    }
                    .campaign-metric-label {
                        font-size: 1.125rem;
                        font-weight: 600;
                        color: #0a0a0a;
                        margin-top: 0.5rem;
                    }
                    .campaign-description {
                        color: #525252;
                        line-height: 1.6;
                        margin-bottom: 1.5rem;
                    }
                    .campaign-duration {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding-top: 1rem;
                        border-top: 1px solid #e5e5e5;
                        font-size: 0.875rem;
                        color: #404040;
                    }
                    .campaign-duration span.dot {
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 50%;
                        background: #22c55e;
                    }
                    .campaign-caption {
                        text-align: center;
                        color: #525252;
                    }
                "#}
            </style>
            <header class="campaign-results-header">
                <div>
                    <h2>{"Одні з найрезультативніших кейсів"}</h2>
                    <p>{"Реальні метрики від агенцій, які використовують BehanceIQ™ фреймворк"}</p>
                </div>
            </header>

            <div ref={region_ref} class="campaign-region">
                <div class="campaign-pin">
                    <div ref={row_ref} class="campaign-row" style="transform: translate3d(0px, 0px, 0px);">
                        { for props.cases.iter().enumerate().map(|(index, case)| html! {
                            <div key={case.id} class="campaign-slot">
                                <div class="campaign-card">
                                    <span class="campaign-label">{format!("#{:03}", index + 1)}</span>
                                    <div style="margin: 1rem 0;">
                                        <span class="campaign-label">{case.industry.clone()}</span>
                                        <h3 class="campaign-client">{case.client.clone()}</h3>
                                    </div>
                                    <div style="margin-bottom: 1.5rem;">
                                        <div class="campaign-metric" style={format!("background: {};", case.accent)}>
                                            {case.metric.split('/').next().unwrap_or_default().to_string()}
                                        </div>
                                        {
                                            if let Some((_, per)) = case.metric.split_once('/') {
                                                html! { <div class="campaign-label">{per.to_string()}</div> }
                                            } else {
                                                html! {}
                                            }
                                        }
                                        <p class="campaign-metric-label">{case.metric_label.clone()}</p>
                                    </div>
                                    <p class="campaign-description">{case.description.clone()}</p>
                                    <div class="campaign-duration">
                                        <span class="dot"></span>
                                        <span>{format!("Результати за {}", case.duration)}</span>
                                    </div>
                                </div>
                            </div>
                        })}
                    </div>
                </div>
                <div
                    ref={ghost_ref}
                    aria-hidden="true"
                    style={format!("position: relative; height: {}; width: 1px; opacity: 0; pointer-events: none;", ghost_height)}
                />
            </div>

            <p class="campaign-caption">
                {"Результати від агенцій, які використовують "}
                <span style="font-weight: 600; color: #0a0a0a;">{"BehanceIQ™"}</span>
            </p>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cases_have_unique_ids() {
        let cases = default_cases();
        assert_eq!(cases.len(), 3);
        let mut ids: Vec<u32> = cases.iter().map(|c| c.id).collect();
        ids.dedup();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
