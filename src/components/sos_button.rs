//! SOS Button Component
//!
//! Floating emergency action: after an explicit confirmation it requests a
//! `tel:` dial and reads the device position best-effort. Everything here
//! degrades silently when the browser refuses.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

const EMERGENCY_NUMBER: &str = "119";

#[component]
pub fn SosButton() -> impl IntoView {
    let on_click = move |_| {
        let Some(win) = web_sys::window() else {
            return;
        };
        let confirmed = win
            .confirm_with_message(&format!("確定要撥打 {EMERGENCY_NUMBER} 求救嗎？"))
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        // Best-effort position read so it is at hand for the call
        if let Ok(geolocation) = win.navigator().geolocation() {
            let on_position = Closure::<dyn FnMut(JsValue)>::new(move |_position: JsValue| {
                web_sys::console::log_1(&"[SOS] Position acquired".into());
            });
            let _ = geolocation.get_current_position(on_position.as_ref().unchecked_ref());
            on_position.forget();
        }

        let _ = win.location().set_href(&format!("tel:{EMERGENCY_NUMBER}"));
    };

    view! {
        <button class="sos-button" aria-label="緊急求救" on:click=on_click>
            "SOS"
        </button>
    }
}
