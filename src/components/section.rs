//! Section Container Component

use leptos::prelude::*;

use crate::context::AppContext;
use crate::navigation::{self, SectionId};

/// Container for one navigable section. Visibility follows the context's
/// single active section.
#[component]
pub fn Section(id: SectionId, children: Children) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let class = move || {
        if ctx.active_section.get() == id {
            "section active"
        } else {
            "section"
        }
    };

    view! {
        <section id=navigation::section_dom_id(id) class=class>
            <div class="section-inner">{children()}</div>
        </section>
    }
}
