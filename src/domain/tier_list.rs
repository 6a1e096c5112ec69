use serde::{Deserialize, Serialize};

use crate::domain::category::Category;

/// The editable details of a tier list, as handed to and from the edit form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TierListDetails {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl TierListDetails {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        is_private: bool,
        category: Option<Category>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            is_private,
            category,
        }
    }
}
