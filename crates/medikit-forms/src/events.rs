//! Event payload shapes delivered to field callbacks

use serde::{Deserialize, Serialize};

/// Text-shaped change event carrying the field name and the new value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputEvent {
	pub name: String,
	pub value: String,
}

impl InputEvent {
	pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			value: value.into(),
		}
	}
}

/// Change event of a selectable list; `None` means the selection was cleared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectChange {
	pub name: String,
	pub value: Option<String>,
}

/// One `{value, label}` pair of a select or radio group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
	pub value: String,
	pub label: String,
}

impl ChoiceOption {
	pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			label: label.into(),
		}
	}
}

/// One entry of an autocomplete suggestion list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
	pub value: String,
	pub label: String,
}

impl Suggestion {
	pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			label: label.into(),
		}
	}
}
