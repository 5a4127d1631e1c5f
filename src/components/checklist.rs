//! Checklist Section Component
//!
//! The preparation catalog grouped by category, with a progress bar and
//! batched check-all / clear-all actions.

use leptos::prelude::*;

use crate::components::Section;
use crate::models::ItemCategory;
use crate::store::{
    progress_percent, store_set_all, store_toggle_item, use_app_store, AppStateStoreFields,
    ProgressTier,
};

#[component]
pub fn ChecklistSection() -> impl IntoView {
    let store = use_app_store();
    let percent = Memo::new(move |_| progress_percent(&store.items().get()));

    view! {
        <Section id="checklist">
            <h2>"防災清單"</h2>
            <p class="section-lede">"勾選你已經準備好的物品，進度會自動保存在這台裝置上。"</p>

            <div class="progress-box">
                <div class="progress-track">
                    <div
                        class=move || ProgressTier::from_percent(percent.get()).bar_class()
                        style=move || format!("width: {}%", percent.get())
                    ></div>
                </div>
                <p class="progress-label">{move || format!("{}% 完成", percent.get())}</p>
                <p class="progress-message">
                    {move || ProgressTier::from_percent(percent.get()).message()}
                </p>
            </div>

            <div class="bulk-actions">
                <button on:click=move |_| store_set_all(&store, true)>"全部勾選"</button>
                <button on:click=move |_| store_set_all(&store, false)>"全部清除"</button>
            </div>

            {ItemCategory::ALL.iter().map(|category| {
                let category = *category;
                view! {
                    <div class="item-group">
                        <h3>{category.label()}</h3>
                        <For
                            each=move || {
                                store
                                    .items()
                                    .get()
                                    .into_iter()
                                    .filter(move |item| item.category == category)
                                    .collect::<Vec<_>>()
                            }
                            key=|item| (item.id.clone(), item.checked)
                            children=move |item| {
                                let id = item.id.clone();
                                let row_class =
                                    if item.checked { "check-item checked" } else { "check-item" };
                                view! {
                                    <label class=row_class>
                                        <input
                                            type="checkbox"
                                            checked=item.checked
                                            on:change=move |ev| {
                                                store_toggle_item(
                                                    &store,
                                                    &id,
                                                    event_target_checked(&ev),
                                                );
                                            }
                                        />
                                        <span class="check-name">{item.name.clone()}</span>
                                        <span class="check-desc">{item.description.clone()}</span>
                                    </label>
                                }
                            }
                        />
                    </div>
                }
            }).collect_view()}
        </Section>
    }
}
