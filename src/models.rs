//! Frontend Models
//!
//! Data structures for the preparation checklist and emergency contacts.

use serde::{Deserialize, Serialize};

/// Supply categories for preparation items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Basic,
    Medical,
    Documents,
    Personal,
}

impl ItemCategory {
    pub const ALL: [ItemCategory; 4] = [
        ItemCategory::Basic,
        ItemCategory::Medical,
        ItemCategory::Documents,
        ItemCategory::Personal,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ItemCategory::Basic => "基本用品",
            ItemCategory::Medical => "醫療用品",
            ItemCategory::Documents => "重要文件",
            ItemCategory::Personal => "個人需求",
        }
    }
}

/// One entry of the fixed preparation catalog.
/// Only `checked` ever changes after startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreparationItem {
    pub id: String,
    pub name: String,
    pub category: ItemCategory,
    pub checked: bool,
    pub description: String,
}

/// User-entered emergency contact (free text, no uniqueness)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
    pub relationship: String,
}

/// The single record written to browser storage
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    #[serde(default)]
    pub preparation_items: Vec<PreparationItem>,
    #[serde(default)]
    pub emergency_contacts: Vec<EmergencyContact>,
}
