//! Category Nav Component
//!
//! Reusable tab row where exactly one category button is active.

use leptos::prelude::*;

#[component]
pub fn CategoryNav(
    tabs: Vec<(&'static str, &'static str)>,
    active: ReadSignal<&'static str>,
    set_active: WriteSignal<&'static str>,
) -> impl IntoView {
    view! {
        <div class="category-nav">
            {tabs.into_iter().map(|(id, label)| {
                let class = move || {
                    if active.get() == id { "category-btn active" } else { "category-btn" }
                };
                view! {
                    <button class=class data-category=id on:click=move |_| set_active.set(id)>
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
