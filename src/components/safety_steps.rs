//! Safety Steps Section Component
//!
//! The three core safety steps, with a timed practice walkthrough that
//! advances through a fixed script.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::Section;
use crate::content::{PRACTICE_STEPS, SAFETY_STEPS};

/// Milliseconds each practice step stays on screen
const PRACTICE_STEP_MS: u32 = 2000;

#[component]
pub fn SafetyStepsSection() -> impl IntoView {
    view! {
        <Section id="steps">
            <h2>"防震三步驟"</h2>
            <p class="section-lede">"地震發生的當下，三個動作決定你的安全。"</p>

            <div class="steps-grid">
                {SAFETY_STEPS.iter().enumerate().map(|(index, step)| view! {
                    <div class="step-card">
                        <div class="step-number">{index + 1}</div>
                        <h3>
                            {step.title}
                            <span class="step-subtitle">{step.subtitle}</span>
                        </h3>
                        <ul>
                            {step.points.iter().map(|point| view! { <li>{*point}</li> }).collect_view()}
                        </ul>
                    </div>
                }).collect_view()}
            </div>

            <PracticeWalkthrough />
        </Section>
    }
}

/// Practice button driving the fixed walkthrough script. Once started, the
/// sequence always runs to its end.
#[component]
fn PracticeWalkthrough() -> impl IntoView {
    let (step, set_step) = signal::<Option<usize>>(None);
    let (running, set_running) = signal(false);

    let start = move |_| {
        if running.get() {
            return;
        }
        set_running.set(true);
        spawn_local(async move {
            for index in 0..PRACTICE_STEPS.len() {
                set_step.set(Some(index));
                TimeoutFuture::new(PRACTICE_STEP_MS).await;
            }
            set_step.set(None);
            set_running.set(false);
        });
    };

    view! {
        <div class="practice-box">
            <button class="practice-btn" disabled=move || running.get() on:click=start>
                "跟著演練一次"
            </button>
            {move || step.get().map(|index| view! {
                <p class="practice-step">{PRACTICE_STEPS[index]}</p>
            })}
        </div>
    }
}
