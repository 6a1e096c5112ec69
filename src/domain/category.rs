//! Domain types representing tier list categories.
//!
//! The taxonomy itself (which categories exist and how they group) belongs to
//! the host application; these types only carry what the edit form needs to
//! identify and display a selection.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Icon shown on the category button before anything has been chosen.
pub const UNSELECTED_CATEGORY_ICON: &str = "square.grid.2x2.fill";

/// Display color expressed as normalized RGB components.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Rgb {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl Rgb {
    /// Fallback used when no category is selected or the category has no color.
    pub const GREY: Rgb = Rgb::new(0.56, 0.56, 0.58);

    pub const fn new(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }

    /// Hex notation such as `#FF4500`, rounding each channel to 8 bits.
    pub fn to_hex(&self) -> String {
        let channel = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02X}{:02X}{:02X}",
            channel(self.red),
            channel(self.green),
            channel(self.blue)
        )
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Rgb::GREY
    }
}

/// A taxonomy entry a tier list can be filed under, e.g. "Albums" in "Music".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub icon: String,
    /// Name of the parent grouping in the host taxonomy.
    pub group: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synonym: Option<String>,
    #[serde(default)]
    pub color: Rgb,
}

impl Category {
    pub fn new(name: impl Into<String>, icon: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            icon: icon.into(),
            group: group.into(),
            synonym: None,
            color: Rgb::GREY,
        }
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    pub fn with_synonym(mut self, synonym: impl Into<String>) -> Self {
        self.synonym = Some(synonym.into());
        self
    }

    /// Name qualified by its taxonomy group, e.g. `Albums (Music)`.
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.group)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Icon for the category button, falling back to the placeholder grid.
pub fn button_icon(category: Option<&Category>) -> &str {
    category
        .map(|category| category.icon.as_str())
        .unwrap_or(UNSELECTED_CATEGORY_ICON)
}

/// Background color for the category button.
pub fn button_color(category: Option<&Category>) -> Rgb {
    category.map(|category| category.color).unwrap_or(Rgb::GREY)
}
