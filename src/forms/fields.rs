//! Declarative description of the edit-details fields.
//!
//! Hosts read these descriptors to label inputs, mark required fields, and
//! show character counters without hard-coding the form's shape.

use crate::config::FieldLimits;
use crate::domain::category::UNSELECTED_CATEGORY_ICON;
use crate::utils::text::char_count;

pub const NAME_KEY: &str = "name";
pub const DESCRIPTION_KEY: &str = "description";
pub const CATEGORY_KEY: &str = "category";
pub const PRIVATE_KEY: &str = "private";

/// Supported data kinds for form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Boolean,
    /// Value comes from an external picker rather than typed input.
    Choice,
}

/// Declarative description of a single form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub icon: Option<&'static str>,
    pub placeholder: Option<&'static str>,
    pub max_len: Option<usize>,
}

impl FieldDescriptor {
    pub fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            required: true,
            icon: None,
            placeholder: None,
            max_len: None,
        }
    }

    pub fn with_optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn with_icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    /// Counter text such as `12/50`; `None` for fields without a limit.
    pub fn counter(&self, value: &str) -> Option<String> {
        self.max_len.map(|limit| format!("{}/{}", char_count(value), limit))
    }

    /// Whether the placeholder should show for the given value.
    pub fn shows_placeholder(&self, value: &str) -> bool {
        self.placeholder.is_some() && value.is_empty()
    }
}

/// Metadata describing a full form, including field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDescriptor {
    pub name: &'static str,
    pub fields: Vec<FieldDescriptor>,
}

impl FormDescriptor {
    pub fn new(name: &'static str, fields: Vec<FieldDescriptor>) -> Self {
        Self { name, fields }
    }

    pub fn field(&self, key: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.key == key)
    }
}

/// Field layout of the tier list edit-details form.
pub fn edit_details_descriptor(limits: FieldLimits) -> FormDescriptor {
    FormDescriptor::new(
        "tier_list_details",
        vec![
            FieldDescriptor::new(NAME_KEY, "Ranko Name", FieldKind::Text)
                .with_icon("trophy.fill")
                .with_placeholder("Top 15 Countries")
                .with_max_len(limits.name),
            FieldDescriptor::new(DESCRIPTION_KEY, "Description, if any", FieldKind::Text)
                .with_optional()
                .with_icon("pencil.and.list.clipboard")
                .with_placeholder("Description")
                .with_max_len(limits.description),
            FieldDescriptor::new(CATEGORY_KEY, "Category", FieldKind::Choice)
                .with_icon(UNSELECTED_CATEGORY_ICON)
                .with_placeholder("Select Category"),
            FieldDescriptor::new(PRIVATE_KEY, "Private", FieldKind::Boolean).with_optional(),
        ],
    )
}
