//! # Medikit
//!
//! The reusable core of a hospital-administration console: every module
//! screen (patient admission, clinical history, billing, inventory) is a
//! thin consumer of the three layers re-exported here.
//!
//! ## Layers
//!
//! - [`entity`] — a typed REST client used uniformly across dozens of
//!   unrelated entities: list/find/save/status/next-code against a
//!   per-module base URL, with every response wrapped in one
//!   `OperationResult` envelope.
//! - [`forms`] — a discriminated field descriptor that turns a declared
//!   field kind plus shared layout/validation props into exactly one
//!   rendered input control.
//! - [`components`] — a generic search/browse dialog that makes any entity
//!   type searchable, browsable, and editable with live status toggling,
//!   delegating row rendering to the hosting grid.
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use medikit::prelude::*;
//!
//! let settings = ApiSettings::from_env();
//! let context = SessionContext::new("jdoe", CompanyRef::new(1, "GH", "General Hospital"));
//! let wards: EntityService<WardCategoryDto> =
//! 	EntityService::new("WardCategory", ApiModule::Admission, &settings, context);
//!
//! let result = wards.find(&FilterExpr::new().and(Filter::eq("activeYN", true))).await?;
//! ```

pub use medikit_components as components;
pub use medikit_entity as entity;
pub use medikit_forms as forms;

/// Commonly used types, importable in one line
pub mod prelude {
	pub use medikit_components::{
		Column, DialogColumn, EntityBrowseSource, GridView, Notice, RowItem, SearchDialog,
		SearchDialogProps, Severity, TableGrid,
	};
	pub use medikit_entity::{
		ApiModule, ApiSettings, BaseDto, CompanyRef, EntityError, EntityService, Filter,
		FilterExpr, FilterOperator, FilterValue, NEW_ENTITY_ID, OperationResult, SessionContext,
		YesNo,
	};
	pub use medikit_forms::{
		AutocompleteField, Callback, ChoiceOption, FieldBase, FieldDescriptor, GridSize,
		InputEvent, RadioField, SelectChange, SelectField, Suggestion, SwitchField, TextAreaField,
		TextField,
	};
}
