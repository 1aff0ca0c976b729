//! Generic search/browse components for hospital administration screens
//!
//! Given fetch/update callbacks and column descriptors for an arbitrary
//! entity type, [`SearchDialog`] produces a searchable, browsable listing
//! with inline edit hand-back and active/inactive toggling. Actual row
//! rendering is delegated to an externally supplied [`TableGrid`].

pub mod grid;
pub mod search_dialog;
pub mod source;

pub use grid::{CellRenderer, Column, GridView, RowItem, TableGrid};
pub use search_dialog::{
	DialogColumn, Notice, SearchDialog, SearchDialogProps, Severity,
};
pub use source::EntityBrowseSource;
