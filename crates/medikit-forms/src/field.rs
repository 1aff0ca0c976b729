//! Field descriptors: one tagged variant per control kind
//!
//! The variant tag decides which companion props exist, so a select without
//! an options list or a switch without a boolean handler is a construction
//! error the compiler rejects, not a runtime surprise.

use chrono::NaiveDate;

use crate::callback::Callback;
use crate::events::{ChoiceOption, InputEvent, SelectChange, Suggestion};
use crate::layout::GridSize;
use crate::rendering;

/// Props shared by every field kind: layout, label, validation surface,
/// and the text-shaped change handler.
#[derive(Debug, Clone)]
pub struct FieldBase {
	pub name: String,
	pub label: String,
	pub value: String,
	pub size: GridSize,
	pub placeholder: Option<String>,
	pub mandatory: bool,
	pub disabled: bool,
	pub read_only: bool,
	/// Externally supplied validation message
	pub error_message: Option<String>,
	/// Whether the surrounding form has been submitted; validation state is
	/// only surfaced after that
	pub submitted: bool,
	pub on_change: Callback<InputEvent>,
}

impl FieldBase {
	pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: label.into(),
			value: String::new(),
			size: GridSize::default(),
			placeholder: None,
			mandatory: false,
			disabled: false,
			read_only: false,
			error_message: None,
			submitted: false,
			on_change: Callback::noop(),
		}
	}

	pub fn with_value(mut self, value: impl Into<String>) -> Self {
		self.value = value.into();
		self
	}

	/// Set the value from a calendar date in the wire's `YYYY-MM-DD` form
	pub fn with_date_value(mut self, date: NaiveDate) -> Self {
		self.value = date.format("%Y-%m-%d").to_string();
		self
	}

	pub fn with_size(mut self, size: GridSize) -> Self {
		self.size = size;
		self
	}

	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = Some(placeholder.into());
		self
	}

	pub fn mandatory(mut self) -> Self {
		self.mandatory = true;
		self
	}

	pub fn disabled(mut self) -> Self {
		self.disabled = true;
		self
	}

	pub fn read_only(mut self) -> Self {
		self.read_only = true;
		self
	}

	pub fn with_error(mut self, message: impl Into<String>) -> Self {
		self.error_message = Some(message.into());
		self
	}

	pub fn submitted(mut self) -> Self {
		self.submitted = true;
		self
	}

	pub fn on_change(mut self, handler: Callback<InputEvent>) -> Self {
		self.on_change = handler;
		self
	}

	/// Validation state is surfaced only after submission
	pub(crate) fn shows_error(&self) -> bool {
		self.submitted && self.error_message.is_some()
	}
}

/// Single-line text-shaped field (text, number, email, date, search)
#[derive(Debug, Clone)]
pub struct TextField {
	pub base: FieldBase,
}

impl TextField {
	pub fn new(base: FieldBase) -> Self {
		Self { base }
	}

	/// Deliver a text change to the supplied handler
	pub fn input(&self, value: impl Into<String>) {
		self.base
			.on_change
			.call(InputEvent::new(self.base.name.clone(), value));
	}
}

/// Multi-line free text with a maximum-length clamp
#[derive(Debug, Clone)]
pub struct TextAreaField {
	pub base: FieldBase,
	pub max_length: usize,
}

impl TextAreaField {
	pub fn new(base: FieldBase, max_length: usize) -> Self {
		Self { base, max_length }
	}

	/// Deliver a text change, clamped to `max_length` characters
	pub fn input(&self, value: impl Into<String>) {
		let value: String = value.into();
		let clamped: String = value.chars().take(self.max_length).collect();
		self.base
			.on_change
			.call(InputEvent::new(self.base.name.clone(), clamped));
	}
}

/// Drop-down bound to a `{value, label}` list
#[derive(Debug, Clone)]
pub struct SelectField {
	pub base: FieldBase,
	pub options: Vec<ChoiceOption>,
	pub clearable: bool,
	pub on_select: Callback<SelectChange>,
}

impl SelectField {
	pub fn new(base: FieldBase, options: Vec<ChoiceOption>) -> Self {
		Self {
			base,
			options,
			clearable: false,
			on_select: Callback::noop(),
		}
	}

	pub fn clearable(mut self) -> Self {
		self.clearable = true;
		self
	}

	pub fn on_select(mut self, handler: Callback<SelectChange>) -> Self {
		self.on_select = handler;
		self
	}

	/// Deliver a list change; `None` clears the selection
	pub fn choose(&self, value: Option<&str>) {
		self.on_select.call(SelectChange {
			name: self.base.name.clone(),
			value: value.map(str::to_string),
		});
	}
}

/// Boolean toggle.
///
/// The raw checked/unchecked change is adapted into `(event, checked)` so
/// callers never read a checked flag out of the event themselves.
#[derive(Debug, Clone)]
pub struct SwitchField {
	pub base: FieldBase,
	pub checked: bool,
	pub on_toggle: Callback<(InputEvent, bool)>,
}

impl SwitchField {
	pub fn new(base: FieldBase, checked: bool) -> Self {
		Self {
			base,
			checked,
			on_toggle: Callback::noop(),
		}
	}

	pub fn on_toggle(mut self, handler: Callback<(InputEvent, bool)>) -> Self {
		self.on_toggle = handler;
		self
	}

	/// Activate the toggle: the handler receives the complement of the
	/// currently rendered `checked` state.
	pub fn activate(&self) {
		let next = !self.checked;
		let event = InputEvent::new(self.base.name.clone(), if next { "Y" } else { "N" });
		self.on_toggle.call((event, next));
	}
}

/// Single-choice group over the same option shape as select
#[derive(Debug, Clone)]
pub struct RadioField {
	pub base: FieldBase,
	pub options: Vec<ChoiceOption>,
	/// Laid out inline when `true`, stacked otherwise
	pub inline: bool,
	pub on_select: Callback<SelectChange>,
}

impl RadioField {
	pub fn new(base: FieldBase, options: Vec<ChoiceOption>) -> Self {
		Self {
			base,
			options,
			inline: true,
			on_select: Callback::noop(),
		}
	}

	pub fn stacked(mut self) -> Self {
		self.inline = false;
		self
	}

	pub fn on_select(mut self, handler: Callback<SelectChange>) -> Self {
		self.on_select = handler;
		self
	}

	pub fn choose(&self, value: &str) {
		self.on_select.call(SelectChange {
			name: self.base.name.clone(),
			value: Some(value.to_string()),
		});
	}
}

/// Free-text input backed by a caller-supplied suggestion fetch.
///
/// The field only wires the text change to the `on_query` trigger and
/// renders whatever `suggestions` the caller currently supplies; debouncing
/// and the asynchrony of the fetch stay with the caller.
#[derive(Debug, Clone)]
pub struct AutocompleteField {
	pub base: FieldBase,
	pub suggestions: Vec<Suggestion>,
	pub on_query: Callback<String>,
}

impl AutocompleteField {
	pub fn new(base: FieldBase) -> Self {
		Self {
			base,
			suggestions: Vec::new(),
			on_query: Callback::noop(),
		}
	}

	pub fn with_suggestions(mut self, suggestions: Vec<Suggestion>) -> Self {
		self.suggestions = suggestions;
		self
	}

	pub fn on_query(mut self, handler: Callback<String>) -> Self {
		self.on_query = handler;
		self
	}

	/// Deliver a text change and fire the suggestion trigger
	pub fn query(&self, text: &str) {
		self.base
			.on_change
			.call(InputEvent::new(self.base.name.clone(), text));
		self.on_query.call(text.to_string());
	}
}

/// One form control, discriminated by kind.
///
/// # Examples
///
/// ```
/// use medikit_forms::{FieldBase, FieldDescriptor, TextField};
///
/// let field = FieldDescriptor::Number(TextField::new(
/// 	FieldBase::new("bedCount", "Bed Count").mandatory(),
/// ));
/// let html = field.render();
/// assert!(html.contains(r#"pattern="[0-9]*""#));
/// ```
#[derive(Debug, Clone)]
pub enum FieldDescriptor {
	Text(TextField),
	Number(TextField),
	Email(TextField),
	Date(TextField),
	Search(TextField),
	TextArea(TextAreaField),
	Select(SelectField),
	Switch(SwitchField),
	Radio(RadioField),
	Autocomplete(AutocompleteField),
}

impl FieldDescriptor {
	/// The props shared by every kind
	pub fn base(&self) -> &FieldBase {
		match self {
			Self::Text(f) | Self::Number(f) | Self::Email(f) | Self::Date(f) | Self::Search(f) => {
				&f.base
			}
			Self::TextArea(f) => &f.base,
			Self::Select(f) => &f.base,
			Self::Switch(f) => &f.base,
			Self::Radio(f) => &f.base,
			Self::Autocomplete(f) => &f.base,
		}
	}

	/// Render exactly one control, wrapped in the layout column unit
	pub fn render(&self) -> String {
		rendering::render(self)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::sync::{Arc, Mutex};

	#[rstest]
	fn test_date_value_uses_the_wire_form() {
		let base = FieldBase::new("admissionDate", "Admission Date")
			.with_date_value(NaiveDate::from_ymd_opt(2026, 8, 7).unwrap());

		assert_eq!(base.value, "2026-08-07");
	}

	#[rstest]
	fn test_text_input_delivers_name_and_value() {
		// Arrange
		let received = Arc::new(Mutex::new(None));
		let field = TextField::new(FieldBase::new("wardName", "Ward").on_change(Callback::new({
			let received = Arc::clone(&received);
			move |event: InputEvent| *received.lock().unwrap() = Some(event)
		})));

		// Act
		field.input("Burn Unit");

		// Assert
		assert_eq!(
			*received.lock().unwrap(),
			Some(InputEvent::new("wardName", "Burn Unit"))
		);
	}

	#[rstest]
	fn test_select_choose_and_clear() {
		// Arrange
		let received = Arc::new(Mutex::new(Vec::new()));
		let field = SelectField::new(
			FieldBase::new("wardType", "Type"),
			vec![ChoiceOption::new("G", "General")],
		)
		.clearable()
		.on_select(Callback::new({
			let received = Arc::clone(&received);
			move |change: SelectChange| received.lock().unwrap().push(change.value)
		}));

		// Act
		field.choose(Some("G"));
		field.choose(None);

		// Assert
		assert_eq!(
			*received.lock().unwrap(),
			vec![Some("G".to_string()), None]
		);
	}

	#[rstest]
	fn test_radio_choose_delivers_the_option_value() {
		let received = Arc::new(Mutex::new(None));
		let field = RadioField::new(
			FieldBase::new("defaultYN", "Default"),
			vec![ChoiceOption::new("Y", "Yes"), ChoiceOption::new("N", "No")],
		)
		.on_select(Callback::new({
			let received = Arc::clone(&received);
			move |change: SelectChange| *received.lock().unwrap() = change.value
		}));

		field.choose("Y");

		assert_eq!(*received.lock().unwrap(), Some("Y".to_string()));
	}
}
