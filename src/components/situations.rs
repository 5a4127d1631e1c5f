//! Situations Section Component
//!
//! Place-specific guidance grouped into category tabs.

use leptos::prelude::*;

use crate::components::{CategoryNav, Section};
use crate::content::SITUATION_CATEGORIES;

#[component]
pub fn SituationsSection() -> impl IntoView {
    let (active_category, set_active_category) = signal(SITUATION_CATEGORIES[0].id);
    let tabs: Vec<_> = SITUATION_CATEGORIES.iter().map(|c| (c.id, c.label)).collect();

    view! {
        <Section id="situations">
            <h2>"情境應變"</h2>
            <p class="section-lede">"你不會永遠剛好待在家裡。看看不同場所該怎麼做。"</p>

            <CategoryNav tabs=tabs active=active_category set_active=set_active_category />

            {SITUATION_CATEGORIES.iter().map(|category| {
                let id = category.id;
                let class = move || {
                    if active_category.get() == id {
                        "situation-category active"
                    } else {
                        "situation-category"
                    }
                };
                view! {
                    <div id=format!("{id}-situations") class=class>
                        {category.entries.iter().map(|situation| view! {
                            <div class="situation-card">
                                <h3>{situation.place}</h3>
                                <ul>
                                    {situation.actions.iter().map(|action| view! {
                                        <li>{*action}</li>
                                    }).collect_view()}
                                </ul>
                            </div>
                        }).collect_view()}
                    </div>
                }
            }).collect_view()}
        </Section>
    }
}
