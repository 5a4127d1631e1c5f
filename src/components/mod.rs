//! UI Components
//!
//! Leptos components for the page sections and shared chrome.

mod section;
mod nav_bar;
mod home;
mod safety_steps;
mod category_nav;
mod situations;
mod mistakes;
mod checklist;
mod contacts;
mod go_to_top;
mod sos_button;

pub use section::Section;
pub use nav_bar::NavBar;
pub use home::HomeSection;
pub use safety_steps::SafetyStepsSection;
pub use category_nav::CategoryNav;
pub use situations::SituationsSection;
pub use mistakes::MistakesSection;
pub use checklist::ChecklistSection;
pub use contacts::ContactsSection;
pub use go_to_top::GoToTop;
pub use sos_button::SosButton;
