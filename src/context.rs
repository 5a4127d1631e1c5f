//! Application Context
//!
//! Shared navigation state provided via Leptos Context API. The `Navigator`
//! owns which section is active; the signals mirror it for rendering.

use leptos::prelude::*;

use crate::navigation::{self, Navigator, SectionId};

/// App-wide navigation signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    navigator: StoredValue<Navigator>,
    /// The single revealed section - read
    pub active_section: ReadSignal<SectionId>,
    set_active_section: WriteSignal<SectionId>,
    /// Nav-control highlight, also driven by scroll-spy - read
    pub highlighted: ReadSignal<SectionId>,
    set_highlighted: WriteSignal<SectionId>,
    /// Mobile menu open state - read
    pub menu_open: ReadSignal<bool>,
    set_menu_open: WriteSignal<bool>,
}

impl AppContext {
    pub fn new(
        active_section: (ReadSignal<SectionId>, WriteSignal<SectionId>),
        highlighted: (ReadSignal<SectionId>, WriteSignal<SectionId>),
        menu_open: (ReadSignal<bool>, WriteSignal<bool>),
    ) -> Self {
        Self {
            navigator: StoredValue::new(Navigator::new()),
            active_section: active_section.0,
            set_active_section: active_section.1,
            highlighted: highlighted.0,
            set_highlighted: highlighted.1,
            menu_open: menu_open.0,
            set_menu_open: menu_open.1,
        }
    }

    /// Explicit navigation: reveal the target section, sync the nav
    /// highlight, collapse the mobile menu, and scroll the section into
    /// view. Unknown section names change nothing.
    pub fn navigate_to(&self, section: &str) {
        let mut target = None;
        self.navigator.update_value(|nav| target = nav.navigate_to(section));
        let Some(target) = target else {
            return;
        };
        self.set_active_section.set(target);
        self.set_highlighted.set(target);
        self.set_menu_open.set(false);
        navigation::scroll_to_section_deferred(target);
    }

    /// Scroll-spy update: nav highlight only, never section visibility
    pub fn highlight(&self, section: SectionId) {
        self.set_highlighted.set(section);
    }

    pub fn toggle_menu(&self) {
        self.set_menu_open.update(|open| *open = !*open);
    }

    pub fn close_menu(&self) {
        self.set_menu_open.set(false);
    }
}
