//! Dynamic form fields for hospital administration screens
//!
//! A page describes one form control as a tagged [`FieldDescriptor`]; the
//! tag decides which companion props exist, and exhaustive matching turns the
//! descriptor into exactly one rendered control with consistent layout,
//! floating label, mandatory marker, and validation-message behavior.
//!
//! The renderer holds no state of its own: side effects happen only through
//! the supplied [`Callback`]s.

pub mod callback;
pub mod events;
pub mod field;
pub mod layout;
pub mod rendering;

pub use callback::Callback;
pub use events::{ChoiceOption, InputEvent, SelectChange, Suggestion};
pub use field::{
	AutocompleteField, FieldBase, FieldDescriptor, RadioField, SelectField, SwitchField,
	TextAreaField, TextField,
};
pub use layout::GridSize;
