//! Home Section Component
//!
//! Hero banner plus shortcut cards into the main feature sections.

use leptos::prelude::*;

use crate::components::Section;
use crate::context::AppContext;

/// Shortcut cards as (target section, title, blurb)
const FEATURES: &[(&str, &str, &str)] = &[
    ("steps", "防震三步驟", "掌握趴下、掩護、穩住的保命動作"),
    ("situations", "情境應變", "不同場所的臨震守則"),
    ("mistakes", "常見錯誤", "破解流傳已久的避難迷思"),
    ("checklist", "防災清單", "一步步打造家庭防災包"),
];

#[component]
pub fn HomeSection() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <Section id="home">
            <div class="hero">
                <h1>"地震來了，你準備好了嗎？"</h1>
                <p class="hero-lede">
                    "台灣平均每年有感地震超過千次。花十分鐘讀完這一頁，"
                    "學會保護自己與家人。"
                </p>
                <button
                    class="cta-button"
                    data-section="steps"
                    on:click=move |_| ctx.navigate_to("steps")
                >
                    "立即學習"
                </button>
            </div>

            <div class="feature-grid">
                {FEATURES.iter().map(|(target, title, blurb)| {
                    let target = *target;
                    view! {
                        <button
                            class="feature-card"
                            data-section=target
                            on:click=move |_| ctx.navigate_to(target)
                        >
                            <h3>{*title}</h3>
                            <p>{*blurb}</p>
                        </button>
                    }
                }).collect_view()}
            </div>
        </Section>
    }
}
