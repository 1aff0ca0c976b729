//! HTML rendering of field descriptors
//!
//! Every branch produces one control inside the same `field` wrapper:
//! floating label, mandatory marker, and the validation message when the
//! form has been submitted. All interpolated text is escaped.

use crate::field::{
	AutocompleteField, FieldBase, FieldDescriptor, RadioField, SelectField, SwitchField,
	TextAreaField, TextField,
};
use crate::layout;

/// Render a descriptor into its control markup, wrapped in the hosting
/// layout's column unit
pub fn render(descriptor: &FieldDescriptor) -> String {
	let inner = match descriptor {
		FieldDescriptor::Text(field) => render_text_input(field, "text", ""),
		FieldDescriptor::Number(field) => {
			render_text_input(field, "text", r#" inputmode="numeric" pattern="[0-9]*""#)
		}
		FieldDescriptor::Email(field) => render_text_input(field, "email", ""),
		FieldDescriptor::Date(field) => render_text_input(field, "date", ""),
		FieldDescriptor::Search(field) => render_text_input(field, "search", ""),
		FieldDescriptor::TextArea(field) => render_textarea(field),
		FieldDescriptor::Select(field) => render_select(field),
		FieldDescriptor::Switch(field) => render_switch(field),
		FieldDescriptor::Radio(field) => render_radio(field),
		FieldDescriptor::Autocomplete(field) => render_autocomplete(field),
	};
	layout::column(descriptor.base().size, &inner)
}

fn render_text_input(field: &TextField, input_type: &str, extra_attrs: &str) -> String {
	let base = &field.base;
	format!(
		r#"<div class="field field-floating{error_class}"><input type="{input_type}" id="{name}" name="{name}" value="{value}"{placeholder}{extra_attrs}{state}/>{label}{error}</div>"#,
		error_class = error_class(base),
		name = html_escape(&base.name),
		value = html_escape(&base.value),
		placeholder = placeholder_attr(base),
		state = state_attrs(base),
		label = render_label(base),
		error = render_error(base),
	)
}

fn render_textarea(field: &TextAreaField) -> String {
	let base = &field.base;
	format!(
		r#"<div class="field field-floating{error_class}"><textarea id="{name}" name="{name}" maxlength="{max_length}"{placeholder}{state}>{value}</textarea>{label}{error}</div>"#,
		error_class = error_class(base),
		name = html_escape(&base.name),
		max_length = field.max_length,
		placeholder = placeholder_attr(base),
		state = state_attrs(base),
		value = html_escape(&base.value),
		label = render_label(base),
		error = render_error(base),
	)
}

fn render_select(field: &SelectField) -> String {
	let base = &field.base;
	let mut options = String::new();
	if field.clearable {
		options.push_str(r#"<option value=""></option>"#);
	}
	for option in &field.options {
		let selected = if option.value == base.value {
			" selected"
		} else {
			""
		};
		options.push_str(&format!(
			r#"<option value="{}"{}>{}</option>"#,
			html_escape(&option.value),
			selected,
			html_escape(&option.label)
		));
	}
	format!(
		r#"<div class="field field-select{error_class}"><select id="{name}" name="{name}"{state}>{options}</select>{label}{error}</div>"#,
		error_class = error_class(base),
		name = html_escape(&base.name),
		state = state_attrs(base),
		label = render_label(base),
		error = render_error(base),
	)
}

fn render_switch(field: &SwitchField) -> String {
	let base = &field.base;
	let checked = if field.checked { " checked" } else { "" };
	format!(
		r#"<div class="field field-switch{error_class}"><label class="switch"><input type="checkbox" id="{name}" name="{name}"{checked}{state}/><span class="slider"></span></label>{label}{error}</div>"#,
		error_class = error_class(base),
		name = html_escape(&base.name),
		state = state_attrs(base),
		label = render_label(base),
		error = render_error(base),
	)
}

fn render_radio(field: &RadioField) -> String {
	let base = &field.base;
	let layout_class = if field.inline {
		"radio-inline"
	} else {
		"radio-stacked"
	};
	let mut buttons = String::new();
	for option in &field.options {
		let checked = if option.value == base.value {
			" checked"
		} else {
			""
		};
		buttons.push_str(&format!(
			r#"<label class="radio-option"><input type="radio" name="{}" value="{}"{}{}/>{}</label>"#,
			html_escape(&base.name),
			html_escape(&option.value),
			checked,
			state_attrs(base),
			html_escape(&option.label)
		));
	}
	format!(
		r#"<div class="field radio-group {layout_class}{error_class}"><span class="group-label">{label_text}{marker}</span>{buttons}{error}</div>"#,
		error_class = error_class(base),
		label_text = html_escape(&base.label),
		marker = mandatory_marker(base),
		error = render_error(base),
	)
}

fn render_autocomplete(field: &AutocompleteField) -> String {
	let base = &field.base;
	let list_id = format!("{}-suggestions", base.name);
	let mut entries = String::new();
	for suggestion in &field.suggestions {
		entries.push_str(&format!(
			r#"<option value="{}">{}</option>"#,
			html_escape(&suggestion.value),
			html_escape(&suggestion.label)
		));
	}
	format!(
		r#"<div class="field field-floating{error_class}"><input type="text" id="{name}" name="{name}" value="{value}" list="{list_id}"{placeholder}{state}/>{label}<datalist id="{list_id}">{entries}</datalist>{error}</div>"#,
		error_class = error_class(base),
		name = html_escape(&base.name),
		value = html_escape(&base.value),
		list_id = html_escape(&list_id),
		placeholder = placeholder_attr(base),
		state = state_attrs(base),
		label = render_label(base),
		error = render_error(base),
	)
}

fn render_label(base: &FieldBase) -> String {
	format!(
		r#"<label for="{}">{}{}</label>"#,
		html_escape(&base.name),
		html_escape(&base.label),
		mandatory_marker(base)
	)
}

fn mandatory_marker(base: &FieldBase) -> &'static str {
	if base.mandatory {
		r#"<span class="mandatory-marker">*</span>"#
	} else {
		""
	}
}

fn render_error(base: &FieldBase) -> String {
	if base.shows_error() {
		format!(
			r#"<span class="field-error">{}</span>"#,
			html_escape(base.error_message.as_deref().unwrap_or_default())
		)
	} else {
		String::new()
	}
}

fn error_class(base: &FieldBase) -> &'static str {
	if base.shows_error() { " has-error" } else { "" }
}

fn placeholder_attr(base: &FieldBase) -> String {
	match &base.placeholder {
		Some(placeholder) => format!(r#" placeholder="{}""#, html_escape(placeholder)),
		None => String::new(),
	}
}

fn state_attrs(base: &FieldBase) -> String {
	let mut attrs = String::new();
	if base.disabled {
		attrs.push_str(" disabled");
	}
	if base.read_only {
		attrs.push_str(" readonly");
	}
	attrs
}

pub(crate) fn html_escape(value: &str) -> String {
	let mut escaped = String::with_capacity(value.len());
	for c in value.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#x27;"),
			c => escaped.push(c),
		}
	}
	escaped
}
