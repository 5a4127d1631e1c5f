//! Section Navigation
//!
//! Single-active-section state machine plus the scroll chrome around it:
//! scroll-spy nav highlighting, the go-to-top control, and mobile-menu
//! dismissal. The state machine and the spy computation are plain functions
//! so they run without a DOM; the `bind_*` functions attach the browser
//! listeners and coalesce bursts to one recomputation per animation frame.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::context::AppContext;

pub type SectionId = &'static str;

/// One navigable page section
pub struct SectionInfo {
    pub id: SectionId,
    pub label: &'static str,
}

/// The fixed section set, defined at startup and never changed
pub const SECTIONS: &[SectionInfo] = &[
    SectionInfo { id: "home", label: "首頁" },
    SectionInfo { id: "steps", label: "防震三步驟" },
    SectionInfo { id: "situations", label: "情境應變" },
    SectionInfo { id: "mistakes", label: "常見錯誤" },
    SectionInfo { id: "checklist", label: "防災清單" },
    SectionInfo { id: "contacts", label: "緊急聯絡" },
];

pub const HOME: SectionId = "home";

/// Scroll offset below which the go-to-top control stays hidden
pub const GO_TO_TOP_THRESHOLD: f64 = 300.0;

/// Viewport width at which the mobile menu stops existing
pub const DESKTOP_BREAKPOINT: f64 = 768.0;

/// Resolve an arbitrary section name against the fixed set
pub fn resolve(section: &str) -> Option<SectionId> {
    SECTIONS.iter().find(|s| s.id == section).map(|s| s.id)
}

/// DOM id of a section container
pub fn section_dom_id(id: SectionId) -> String {
    format!("{id}-section")
}

/// Single-active-section state machine. Exactly one section is active at all
/// times; navigating to an unknown name changes nothing.
pub struct Navigator {
    active: SectionId,
}

impl Navigator {
    pub fn new() -> Self {
        Self { active: HOME }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Activate `section` and return it, or `None` when the name does not
    /// resolve (the current section stays active).
    pub fn navigate_to(&mut self, section: &str) -> Option<SectionId> {
        let target = resolve(section)?;
        self.active = target;
        Some(target)
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

/// A section's vertical extent in document coordinates
pub struct SectionRect {
    pub id: SectionId,
    pub top: f64,
    pub height: f64,
}

/// Scroll-spy: the section whose region contains the reference point one
/// third down the viewport, if any.
pub fn section_at_offset(scroll_y: f64, viewport_height: f64, rects: &[SectionRect]) -> Option<SectionId> {
    let reference = scroll_y + viewport_height / 3.0;
    rects
        .iter()
        .find(|rect| reference >= rect.top && reference < rect.top + rect.height)
        .map(|rect| rect.id)
}

// ========================
// Browser Glue
// ========================

/// Measure every section present in the document. Missing sections are
/// simply skipped.
fn dom_section_rects() -> Vec<SectionRect> {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let scroll_y = web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0);
    SECTIONS
        .iter()
        .filter_map(|section| {
            let el = doc.get_element_by_id(&section_dom_id(section.id))?;
            let rect = el.get_bounding_client_rect();
            Some(SectionRect {
                id: section.id,
                top: rect.top() + scroll_y,
                height: rect.height(),
            })
        })
        .collect()
}

/// Smooth-scroll a section into view. No-op when the element is absent.
pub fn scroll_to_section(id: SectionId) {
    let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(&section_dom_id(id)))
    else {
        return;
    };
    let opts = web_sys::ScrollIntoViewOptions::new();
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    opts.set_block(web_sys::ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

/// Scroll a section into view on the next animation frame, after the
/// newly revealed section has rendered.
pub fn scroll_to_section_deferred(id: SectionId) {
    let Some(win) = web_sys::window() else {
        return;
    };
    let cb = Closure::once_into_js(move || scroll_to_section(id));
    let _ = win.request_animation_frame(cb.unchecked_ref());
}

/// Smooth-scroll the window back to the top
pub fn scroll_to_top() {
    let Some(win) = web_sys::window() else {
        return;
    };
    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&opts);
}

/// Recompute the scroll-driven chrome: nav highlight and go-to-top
/// visibility. Highlighting is assistive only; it never changes which
/// section is revealed.
fn update_scroll_chrome(ctx: AppContext, set_show_top: WriteSignal<bool>) {
    let Some(win) = web_sys::window() else {
        return;
    };
    let scroll_y = win.scroll_y().unwrap_or(0.0);
    let viewport = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);

    set_show_top.set(scroll_y > GO_TO_TOP_THRESHOLD);

    let rects = dom_section_rects();
    if let Some(id) = section_at_offset(scroll_y, viewport, &rects) {
        ctx.highlight(id);
    }
}

/// Attach the passive scroll listener. Scroll bursts collapse into a single
/// pending animation-frame recomputation.
pub fn bind_scroll_chrome(ctx: AppContext, set_show_top: WriteSignal<bool>) {
    let (ticking, set_ticking) = signal(false);

    let on_frame = Closure::<dyn FnMut()>::new(move || {
        set_ticking.set(false);
        update_scroll_chrome(ctx, set_show_top);
    });

    let on_scroll = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
        if ticking.get_untracked() {
            return;
        }
        set_ticking.set(true);
        if let Some(win) = web_sys::window() {
            let _ = win.request_animation_frame(on_frame.as_ref().unchecked_ref());
        }
    });

    if let Some(win) = web_sys::window() {
        let opts = web_sys::AddEventListenerOptions::new();
        opts.set_passive(true);
        let _ = win.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            on_scroll.as_ref().unchecked_ref(),
            &opts,
        );
    }
    on_scroll.forget();

    // Initial state before the first scroll event
    update_scroll_chrome(ctx, set_show_top);
}

/// Attach the listeners that force the mobile menu closed: Escape anywhere,
/// or the viewport growing past the desktop breakpoint.
pub fn bind_menu_dismissal(ctx: AppContext) {
    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            ctx.close_menu();
        }
    });
    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    }
    on_keydown.forget();

    let (ticking, set_ticking) = signal(false);
    let on_frame = Closure::<dyn FnMut()>::new(move || {
        set_ticking.set(false);
        let width = web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        if width >= DESKTOP_BREAKPOINT {
            ctx.close_menu();
        }
    });
    let on_resize = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
        if ticking.get_untracked() {
            return;
        }
        set_ticking.set(true);
        if let Some(win) = web_sys::window() {
            let _ = win.request_animation_frame(on_frame.as_ref().unchecked_ref());
        }
    });
    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    }
    on_resize.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rects() -> Vec<SectionRect> {
        // Three stacked sections of 600px starting at the document top
        vec![
            SectionRect { id: "home", top: 0.0, height: 600.0 },
            SectionRect { id: "steps", top: 600.0, height: 600.0 },
            SectionRect { id: "situations", top: 1200.0, height: 600.0 },
        ]
    }

    #[test]
    fn test_navigator_starts_on_home() {
        assert_eq!(Navigator::new().active(), HOME);
    }

    #[test]
    fn test_navigate_to_every_known_section() {
        let mut nav = Navigator::new();
        for section in SECTIONS {
            assert_eq!(nav.navigate_to(section.id), Some(section.id));
            assert_eq!(nav.active(), section.id);
        }
    }

    #[test]
    fn test_navigate_to_unknown_is_noop() {
        let mut nav = Navigator::new();
        nav.navigate_to("checklist");
        assert_eq!(nav.navigate_to("no-such-section"), None);
        assert_eq!(nav.active(), "checklist");
    }

    #[test]
    fn test_section_at_offset_picks_containing_region() {
        // viewport 900 -> reference point is scroll_y + 300
        assert_eq!(section_at_offset(0.0, 900.0, &rects()), Some("home"));
        assert_eq!(section_at_offset(500.0, 900.0, &rects()), Some("steps"));
        assert_eq!(section_at_offset(1400.0, 900.0, &rects()), Some("situations"));
    }

    #[test]
    fn test_section_at_offset_boundaries() {
        // reference exactly on a section top belongs to that section
        assert_eq!(section_at_offset(300.0, 900.0, &rects()), Some("steps"));
        // past the last section there is nothing to highlight
        assert_eq!(section_at_offset(5000.0, 900.0, &rects()), None);
        assert_eq!(section_at_offset(0.0, 900.0, &[]), None);
    }

    #[test]
    fn test_scroll_spy_does_not_change_active_section() {
        let mut nav = Navigator::new();
        nav.navigate_to("checklist");
        let highlighted = section_at_offset(700.0, 900.0, &rects());
        assert_eq!(highlighted, Some("steps"));
        assert_eq!(nav.active(), "checklist");
    }
}
