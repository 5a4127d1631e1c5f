//! Quake-Ready App
//!
//! Root component: owns the store and navigation context, runs the entry
//! sequence, and lays out the page sections.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{
    ChecklistSection, ContactsSection, GoToTop, HomeSection, MistakesSection, NavBar,
    SafetyStepsSection, SituationsSection, SosButton,
};
use crate::context::AppContext;
use crate::navigation;
use crate::store::{self, AppState};

#[component]
pub fn App() -> impl IntoView {
    // State
    let app_store = Store::new(AppState::new());
    provide_context(app_store);
    store::store_restore(&app_store);

    let (active_section, set_active_section) = signal(navigation::HOME);
    let (highlighted, set_highlighted) = signal(navigation::HOME);
    let (menu_open, set_menu_open) = signal(false);
    let ctx = AppContext::new(
        (active_section, set_active_section),
        (highlighted, set_highlighted),
        (menu_open, set_menu_open),
    );
    provide_context(ctx);

    let (show_top, set_show_top) = signal(false);
    let (booting, set_booting) = signal(true);
    let (overlay_fading, set_overlay_fading) = signal(false);
    let (revealed, set_revealed) = signal(false);

    navigation::bind_scroll_chrome(ctx, set_show_top);
    navigation::bind_menu_dismissal(ctx);

    // Entry sequence: hold the loading overlay briefly, fade it out, then
    // reveal the page
    Effect::new(move |_| {
        spawn_local(async move {
            TimeoutFuture::new(500).await;
            set_overlay_fading.set(true);
            TimeoutFuture::new(400).await;
            set_booting.set(false);
            set_revealed.set(true);
        });
    });

    view! {
        <Show when=move || booting.get()>
            <div
                id="loading-indicator"
                class=move || {
                    if overlay_fading.get() { "loading-overlay fading" } else { "loading-overlay" }
                }
            >
                <div class="loading-spinner"></div>
                <p>"載入中..."</p>
            </div>
        </Show>

        <div id="app" class=move || if revealed.get() { "app-shell" } else { "app-shell hidden" }>
            <NavBar />

            <main>
                <HomeSection />
                <SafetyStepsSection />
                <SituationsSection />
                <MistakesSection />
                <ChecklistSection />
                <ContactsSection />
            </main>

            <footer class="site-footer">
                <p>"平時準備，震時不慌。"</p>
            </footer>

            <GoToTop visible=show_top />
            <SosButton />
        </div>
    }
}
