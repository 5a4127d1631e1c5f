//! Mistakes Section Component
//!
//! Common wrong-versus-right pairs grouped into category tabs.

use leptos::prelude::*;

use crate::components::{CategoryNav, Section};
use crate::content::MISTAKE_CATEGORIES;

#[component]
pub fn MistakesSection() -> impl IntoView {
    let (active_category, set_active_category) = signal(MISTAKE_CATEGORIES[0].id);
    let tabs: Vec<_> = MISTAKE_CATEGORIES.iter().map(|c| (c.id, c.label)).collect();

    view! {
        <Section id="mistakes">
            <h2>"常見錯誤"</h2>
            <p class="section-lede">"這些流傳已久的做法，反而讓你更危險。"</p>

            <CategoryNav tabs=tabs active=active_category set_active=set_active_category />

            {MISTAKE_CATEGORIES.iter().map(|category| {
                let id = category.id;
                let class = move || {
                    if active_category.get() == id {
                        "mistake-category active"
                    } else {
                        "mistake-category"
                    }
                };
                view! {
                    <div id=format!("{id}-mistakes") class=class>
                        {category.entries.iter().map(|mistake| view! {
                            <div class="mistake-card">
                                <p class="mistake-wrong">"✗ " {mistake.wrong}</p>
                                <p class="mistake-right">"✓ " {mistake.right}</p>
                            </div>
                        }).collect_view()}
                    </div>
                }
            }).collect_view()}
        </Section>
    }
}
