//! Contacts Section Component
//!
//! Official emergency numbers, the user's own contact list, and the form
//! that feeds it. An empty field rejects the submission with no message.

use leptos::prelude::*;

use crate::components::Section;
use crate::store::{
    store_add_contact, store_remove_contact, use_app_store, AppStateStoreFields,
};

/// Official numbers shown above the personal list
const OFFICIAL_NUMBERS: &[(&str, &str)] = &[
    ("119", "消防救護"),
    ("110", "警察"),
    ("1991", "報平安留言平台"),
];

#[component]
pub fn ContactsSection() -> impl IntoView {
    let store = use_app_store();

    let (name, set_name) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (relationship, set_relationship) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let added = store_add_contact(&store, &name.get(), &phone.get(), &relationship.get());
        if added {
            set_name.set(String::new());
            set_phone.set(String::new());
            set_relationship.set(String::new());
        }
    };

    view! {
        <Section id="contacts">
            <h2>"緊急聯絡"</h2>
            <p class="section-lede">"災時通訊壅塞，先把重要號碼記在這裡。"</p>

            <div class="official-numbers">
                {OFFICIAL_NUMBERS.iter().map(|(number, label)| view! {
                    <div class="number-card">
                        <span class="number">{*number}</span>
                        <p>{*label}</p>
                    </div>
                }).collect_view()}
            </div>

            <form class="contact-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="姓名"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <input
                    type="tel"
                    placeholder="電話"
                    prop:value=move || phone.get()
                    on:input=move |ev| set_phone.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="關係"
                    prop:value=move || relationship.get()
                    on:input=move |ev| set_relationship.set(event_target_value(&ev))
                />
                <button type="submit">"新增聯絡人"</button>
            </form>

            <div class="contact-list">
                <For
                    each=move || {
                        store.contacts().get().into_iter().enumerate().collect::<Vec<_>>()
                    }
                    key=|(index, contact)| (*index, contact.name.clone(), contact.phone.clone())
                    children=move |(index, contact)| {
                        view! {
                            <div class="contact-row">
                                <span class="contact-name">{contact.name.clone()}</span>
                                <span class="contact-phone">{contact.phone.clone()}</span>
                                <span class="contact-relationship">{contact.relationship.clone()}</span>
                                <button
                                    class="contact-remove"
                                    on:click=move |_| store_remove_contact(&store, index)
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    }
                />
                <Show when=move || store.contacts().read().is_empty()>
                    <p class="contact-empty">"尚未新增聯絡人"</p>
                </Show>
            </div>
        </Section>
    }
}
