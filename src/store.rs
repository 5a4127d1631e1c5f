//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The collection
//! mutations themselves are plain functions over the model types so they can
//! be exercised without a DOM; the `store_*` wrappers apply them to the
//! reactive store and mirror every change into browser storage.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{EmergencyContact, PersistedState, PreparationItem};
use crate::{content, storage};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Fixed preparation catalog; only `checked` mutates
    pub items: Vec<PreparationItem>,
    /// User-entered emergency contacts, dense and 0-based
    pub contacts: Vec<EmergencyContact>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            items: content::default_items(),
            contacts: Vec::new(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Pure Collection Ops
// ========================

/// Set `checked` on the matching catalog item. Unknown ids are a no-op.
pub fn toggle_item(items: &mut [PreparationItem], id: &str, checked: bool) -> bool {
    match items.iter_mut().find(|item| item.id == id) {
        Some(item) => {
            item.checked = checked;
            true
        }
        None => false,
    }
}

/// Uniformly set every item's `checked` flag
pub fn set_all_checked(items: &mut [PreparationItem], checked: bool) {
    for item in items {
        item.checked = checked;
    }
}

/// Checked count over total, rounded to the nearest integer percent
pub fn progress_percent(items: &[PreparationItem]) -> u32 {
    if items.is_empty() {
        return 0;
    }
    let checked = items.iter().filter(|item| item.checked).count();
    ((checked as f64 / items.len() as f64) * 100.0).round() as u32
}

/// Presentation tier derived from the progress percent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressTier {
    Complete,
    Good,
    Low,
}

impl ProgressTier {
    pub fn from_percent(percent: u32) -> Self {
        if percent == 100 {
            ProgressTier::Complete
        } else if percent >= 50 {
            ProgressTier::Good
        } else {
            ProgressTier::Low
        }
    }

    pub fn bar_class(&self) -> &'static str {
        match self {
            ProgressTier::Complete => "progress-bar complete",
            ProgressTier::Good => "progress-bar good",
            ProgressTier::Low => "progress-bar low",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ProgressTier::Complete => "防災包準備完成！記得定期檢查效期",
            ProgressTier::Good => "已完成一半以上，繼續加油",
            ProgressTier::Low => "開始準備你的防災包吧",
        }
    }
}

/// Append a contact. All three fields must be non-empty after trimming;
/// anything else about the text is accepted as-is.
pub fn add_contact(
    contacts: &mut Vec<EmergencyContact>,
    name: &str,
    phone: &str,
    relationship: &str,
) -> bool {
    let (name, phone, relationship) = (name.trim(), phone.trim(), relationship.trim());
    if name.is_empty() || phone.is_empty() || relationship.is_empty() {
        return false;
    }
    contacts.push(EmergencyContact {
        name: name.to_string(),
        phone: phone.to_string(),
        relationship: relationship.to_string(),
    });
    true
}

/// Remove the contact at `index`, shifting later entries down.
/// Out-of-range indices are rejected as a no-op.
pub fn remove_contact(contacts: &mut Vec<EmergencyContact>, index: usize) -> bool {
    if index >= contacts.len() {
        return false;
    }
    contacts.remove(index);
    true
}

/// Apply a restored record: copy `checked` onto catalog items with a matching
/// id (persisted ids not in the catalog are dropped, catalog ids not in the
/// record keep their default), and replace the contact list wholesale.
pub fn merge_persisted(
    items: &mut [PreparationItem],
    contacts: &mut Vec<EmergencyContact>,
    record: PersistedState,
) {
    for saved in &record.preparation_items {
        if let Some(item) = items.iter_mut().find(|item| item.id == saved.id) {
            item.checked = saved.checked;
        }
    }
    *contacts = record.emergency_contacts;
}

// ========================
// Store Helper Functions
// ========================

/// Toggle one checklist item and persist the change
pub fn store_toggle_item(store: &AppStore, id: &str, checked: bool) {
    let changed = toggle_item(&mut *store.items().write(), id, checked);
    if changed {
        store_persist(store);
    }
}

/// Check or uncheck the whole catalog in one batched update
pub fn store_set_all(store: &AppStore, checked: bool) {
    set_all_checked(&mut *store.items().write(), checked);
    store_persist(store);
}

/// Add a contact from form input; returns false when a field is empty
pub fn store_add_contact(store: &AppStore, name: &str, phone: &str, relationship: &str) -> bool {
    let added = add_contact(&mut *store.contacts().write(), name, phone, relationship);
    if added {
        store_persist(store);
    }
    added
}

/// Remove a contact by index (out-of-range is a no-op)
pub fn store_remove_contact(store: &AppStore, index: usize) {
    let removed = remove_contact(&mut *store.contacts().write(), index);
    if removed {
        store_persist(store);
    }
}

/// Write the whole state as one record under the fixed storage key
pub fn store_persist(store: &AppStore) {
    let record = PersistedState {
        preparation_items: store.items().get_untracked(),
        emergency_contacts: store.contacts().get_untracked(),
    };
    storage::save_json(storage::STORAGE_KEY, &record);
}

/// Restore from browser storage. A missing or unparsable record leaves the
/// freshly-initialized defaults in place.
pub fn store_restore(store: &AppStore) {
    let Some(record) = storage::load_json::<PersistedState>(storage::STORAGE_KEY) else {
        return;
    };
    let mut items = store.items().get_untracked();
    let mut contacts = store.contacts().get_untracked();
    merge_persisted(&mut items, &mut contacts, record);
    web_sys::console::log_1(
        &format!(
            "[APP] Restored {} checked items, {} contacts",
            items.iter().filter(|item| item.checked).count(),
            contacts.len()
        )
        .into(),
    );
    store.items().set(items);
    store.contacts().set(contacts);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<PreparationItem> {
        content::default_items()
    }

    fn contact(name: &str, phone: &str, relationship: &str) -> EmergencyContact {
        EmergencyContact {
            name: name.to_string(),
            phone: phone.to_string(),
            relationship: relationship.to_string(),
        }
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut items = catalog();
        let id = items[0].id.clone();
        let before = progress_percent(&items);

        assert!(toggle_item(&mut items, &id, true));
        assert!(items[0].checked);
        assert!(progress_percent(&items) > before);

        assert!(toggle_item(&mut items, &id, false));
        assert!(!items[0].checked);
        assert_eq!(progress_percent(&items), before);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut items = catalog();
        assert!(!toggle_item(&mut items, "no-such-item", true));
        assert!(items.iter().all(|item| !item.checked));
    }

    #[test]
    fn test_set_all_checked_percentages() {
        let mut items = catalog();
        set_all_checked(&mut items, true);
        assert_eq!(progress_percent(&items), 100);
        set_all_checked(&mut items, false);
        assert_eq!(progress_percent(&items), 0);
    }

    #[test]
    fn test_progress_empty_catalog() {
        assert_eq!(progress_percent(&[]), 0);
    }

    #[test]
    fn test_progress_rounding() {
        let mut items = catalog();
        items.truncate(3);
        toggle_item_by_index(&mut items, 0);
        // 1/3 rounds to 33, 2/3 rounds to 67
        assert_eq!(progress_percent(&items), 33);
        toggle_item_by_index(&mut items, 1);
        assert_eq!(progress_percent(&items), 67);
    }

    fn toggle_item_by_index(items: &mut [PreparationItem], index: usize) {
        let id = items[index].id.clone();
        toggle_item(items, &id, true);
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(ProgressTier::from_percent(0), ProgressTier::Low);
        assert_eq!(ProgressTier::from_percent(49), ProgressTier::Low);
        assert_eq!(ProgressTier::from_percent(50), ProgressTier::Good);
        assert_eq!(ProgressTier::from_percent(99), ProgressTier::Good);
        assert_eq!(ProgressTier::from_percent(100), ProgressTier::Complete);
    }

    #[test]
    fn test_add_contact_requires_all_fields() {
        let mut contacts = Vec::new();
        assert!(!add_contact(&mut contacts, "", "123", "friend"));
        assert!(!add_contact(&mut contacts, "A", "   ", "friend"));
        assert!(!add_contact(&mut contacts, "A", "123", ""));
        assert!(contacts.is_empty());

        assert!(add_contact(&mut contacts, " A ", "123", "friend"));
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].name, "A");
    }

    #[test]
    fn test_add_then_remove_contact() {
        let mut contacts = Vec::new();
        assert!(add_contact(&mut contacts, "A", "123", "friend"));
        assert!(remove_contact(&mut contacts, 0));
        assert!(contacts.is_empty());
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut contacts = vec![contact("A", "123", "friend"), contact("B", "456", "family")];
        assert!(!remove_contact(&mut contacts, 2));
        assert!(!remove_contact(&mut contacts, 99));
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].name, "A");
        assert_eq!(contacts[1].name, "B");
    }

    #[test]
    fn test_remove_shifts_later_entries_down() {
        let mut contacts = vec![
            contact("A", "1", "x"),
            contact("B", "2", "y"),
            contact("C", "3", "z"),
        ];
        assert!(remove_contact(&mut contacts, 1));
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].name, "A");
        assert_eq!(contacts[1].name, "C");
    }

    #[test]
    fn test_persist_restore_round_trip() {
        let mut items = catalog();
        let checked_id = items[0].id.clone();
        toggle_item(&mut items, &checked_id, true);
        let mut contacts = Vec::new();
        add_contact(&mut contacts, "A", "123", "friend");

        let record = PersistedState {
            preparation_items: items.clone(),
            emergency_contacts: contacts.clone(),
        };
        let raw = serde_json::to_string(&record).unwrap();

        let mut fresh_items = catalog();
        let mut fresh_contacts = Vec::new();
        let restored: PersistedState = serde_json::from_str(&raw).unwrap();
        merge_persisted(&mut fresh_items, &mut fresh_contacts, restored);

        assert_eq!(fresh_items, items);
        assert_eq!(fresh_contacts, contacts);
    }

    #[test]
    fn test_restore_ignores_unknown_ids() {
        let mut saved = catalog();
        saved[0].checked = true;
        saved[0].id = "retired-item".to_string();
        let record = PersistedState {
            preparation_items: saved,
            emergency_contacts: Vec::new(),
        };

        let mut items = catalog();
        let mut contacts = Vec::new();
        merge_persisted(&mut items, &mut contacts, record);
        assert!(items.iter().all(|item| !item.checked));
    }

    #[test]
    fn test_restore_missing_ids_keep_default() {
        // A record persisted before new catalog entries existed
        let record = PersistedState {
            preparation_items: vec![catalog()[1].clone()],
            emergency_contacts: Vec::new(),
        };
        let mut items = catalog();
        let first_id = items[0].id.clone();
        toggle_item(&mut items, &first_id, true);
        let mut contacts = Vec::new();
        merge_persisted(&mut items, &mut contacts, record);
        // Item 0 was not in the record so it keeps its in-memory value
        assert!(items[0].checked);
        assert!(!items[1].checked);
    }

    #[test]
    fn test_corrupt_record_does_not_parse() {
        assert!(serde_json::from_str::<PersistedState>("not json at all").is_err());
        assert!(serde_json::from_str::<PersistedState>("{\"preparationItems\": 5}").is_err());
    }

    #[test]
    fn test_partial_record_parses_with_defaults() {
        let record: PersistedState = serde_json::from_str("{}").unwrap();
        assert!(record.preparation_items.is_empty());
        assert!(record.emergency_contacts.is_empty());
    }
}
