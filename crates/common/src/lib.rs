// ================
// common/src/lib.rs
// ================
//! Common types and structures
//! shared between the `EcoTrack` page library and its command-line host.
//! This module defines the DOM contract the page scripts rely on and the
//! serialisable page snapshot used to feed documents into the runtime.

use serde::{Deserialize, Serialize};

/// Class carried by every flash banner
pub const ALERT_CLASS: &str = "alert";

/// Identifier of the password input on the registration form
pub const PASSWORD_FIELD_ID: &str = "password";

/// Delay between the ready signal and hiding the flash banners
pub const ALERT_DISMISS_DELAY_MS: u64 = 5000;

/// Minimum accepted password length, in UTF-16 code units
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Message shown when the password is too short
pub const PASSWORD_TOO_SHORT_MESSAGE: &str = "Password must be at least 8 characters long";

/// CSS display state of an element
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Display {
    /// Whatever the stylesheet decides
    #[default]
    Default,
    /// `display: none`
    None,
}

impl Display {
    /// Whether the element is rendered
    pub fn is_visible(self) -> bool {
        self != Display::None
    }
}

/// Category attached to a flashed message by the server
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FlashCategory {
    Success,
    Danger,
    Warning,
    Info,
}

impl FlashCategory {
    /// Suffix used in the `alert-<category>` class
    pub fn as_str(self) -> &'static str {
        match self {
            FlashCategory::Success => "success",
            FlashCategory::Danger => "danger",
            FlashCategory::Warning => "warning",
            FlashCategory::Info => "info",
        }
    }

    /// Classes rendered on the banner for this category
    pub fn banner_classes(self) -> Vec<String> {
        vec![ALERT_CLASS.to_string(), format!("{ALERT_CLASS}-{}", self.as_str())]
    }
}

/// A message flashed by the server for the next rendered page
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FlashMessage {
    pub category: FlashCategory,
    pub message: String,
}

impl FlashMessage {
    pub fn new(category: FlashCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }
}

/// A single element of a page snapshot
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ElementSpec {
    /// Tag name, e.g. `div` or `input`
    pub tag: String,
    /// Value of the `id` attribute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Entries of the `class` attribute
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    /// Text content
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    /// Current value for form fields; `None` for non-field elements
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Inline display style
    #[serde(default)]
    pub display: Display,
}

impl ElementSpec {
    /// Whether the class list contains `class`
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// A flash banner element for `flash`
    pub fn flash(flash: &FlashMessage) -> Self {
        Self {
            tag: "div".to_string(),
            classes: flash.category.banner_classes(),
            text: flash.message.clone(),
            ..Self::default()
        }
    }

    /// An `<input>` with the given id and value
    pub fn input(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: "input".to_string(),
            id: Some(id.into()),
            value: Some(value.into()),
            ..Self::default()
        }
    }
}

/// Serialisable picture of a rendered page, in document order
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct PageSnapshot {
    /// Page title, informational only
    #[serde(default)]
    pub title: String,
    /// Elements in document order
    #[serde(default)]
    pub elements: Vec<ElementSpec>,
}

impl PageSnapshot {
    /// Parse a snapshot from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Render the snapshot as pretty JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
