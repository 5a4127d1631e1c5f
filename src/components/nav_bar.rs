//! Navigation Bar Component
//!
//! Desktop link row plus the mobile menu with its toggle button. The toggle
//! exposes `aria-expanded` as the open/closed flag.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::navigation::SECTIONS;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <header class="top-nav">
            <div class="nav-inner">
                <a
                    href="#"
                    class="brand"
                    on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate_to("home");
                    }
                >
                    "地震防災指南"
                </a>

                <nav class="nav-links">
                    {SECTIONS.iter().map(|section| {
                        let id = section.id;
                        let class = move || {
                            if ctx.highlighted.get() == id { "nav-link active" } else { "nav-link" }
                        };
                        view! {
                            <a
                                href="#"
                                class=class
                                data-section=id
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    ctx.navigate_to(id);
                                }
                            >
                                {section.label}
                            </a>
                        }
                    }).collect_view()}
                </nav>

                <button
                    id="mobile-menu-button"
                    class="mobile-menu-button"
                    aria-label="切換選單"
                    aria-expanded=move || if ctx.menu_open.get() { "true" } else { "false" }
                    on:click=move |_| ctx.toggle_menu()
                >
                    "☰"
                </button>
            </div>

            <div
                id="mobile-menu"
                class=move || if ctx.menu_open.get() { "mobile-menu" } else { "mobile-menu hidden" }
            >
                {SECTIONS.iter().map(|section| {
                    let id = section.id;
                    let class = move || {
                        if ctx.highlighted.get() == id {
                            "nav-link-mobile active"
                        } else {
                            "nav-link-mobile"
                        }
                    };
                    view! {
                        <a
                            href="#"
                            class=class
                            data-section=id
                            on:click=move |ev| {
                                ev.prevent_default();
                                ctx.navigate_to(id);
                            }
                        >
                            {section.label}
                        </a>
                    }
                }).collect_view()}
            </div>
        </header>
    }
}
