//! Generic modal search/browse/select over an arbitrary entity type

use std::collections::HashMap;
use std::sync::Arc;

use medikit_forms::{Callback, FieldBase, FieldDescriptor, InputEvent, TextField};

use crate::grid::{Column, GridView, RowItem, TableGrid};
use crate::source::EntityBrowseSource;

/// Severity of a message pushed to the caller's notification channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
	Info,
	Warning,
	Error,
}

/// One message for the caller's (out-of-scope) notification presentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
	pub severity: Severity,
	pub message: String,
}

impl Notice {
	pub fn error(message: impl Into<String>) -> Self {
		Self {
			severity: Severity::Error,
			message: message.into(),
		}
	}

	pub fn info(message: impl Into<String>) -> Self {
		Self {
			severity: Severity::Info,
			message: message.into(),
		}
	}
}

/// Extract a value from an entity instance
pub type ItemFn<T, R> = Arc<dyn Fn(&T) -> R + Send + Sync>;

/// Construction contract of [`SearchDialog`].
///
/// The caller supplies the data source, the entity's natural columns, and
/// the id/active extractors; the optional Edit/Status/Action columns are
/// synthesized by the dialog and enabled by default.
pub struct SearchDialogProps<T> {
	pub source: Arc<dyn EntityBrowseSource<T>>,
	pub columns: Vec<Column<T>>,
	pub get_item_id: ItemFn<T, i64>,
	pub get_item_active: ItemFn<T, bool>,
	pub search_placeholder: String,
	pub is_edit_button_visible: bool,
	pub is_status_visible: bool,
	pub is_action_visible: bool,
	pub on_select: Callback<T>,
	pub on_close: Callback<()>,
	/// Host wiring for the embedded search box; route it back into
	/// [`SearchDialog::set_search`]
	pub on_search_input: Callback<InputEvent>,
	pub on_notify: Callback<Notice>,
}

impl<T: 'static> SearchDialogProps<T> {
	pub fn new(
		source: Arc<dyn EntityBrowseSource<T>>,
		columns: Vec<Column<T>>,
		get_item_id: impl Fn(&T) -> i64 + Send + Sync + 'static,
		get_item_active: impl Fn(&T) -> bool + Send + Sync + 'static,
	) -> Self {
		Self {
			source,
			columns,
			get_item_id: Arc::new(get_item_id),
			get_item_active: Arc::new(get_item_active),
			search_placeholder: "Search".to_string(),
			is_edit_button_visible: true,
			is_status_visible: true,
			is_action_visible: true,
			on_select: Callback::noop(),
			on_close: Callback::noop(),
			on_search_input: Callback::noop(),
			on_notify: Callback::noop(),
		}
	}

	pub fn search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.search_placeholder = placeholder.into();
		self
	}

	pub fn hide_edit_button(mut self) -> Self {
		self.is_edit_button_visible = false;
		self
	}

	pub fn hide_status(mut self) -> Self {
		self.is_status_visible = false;
		self
	}

	pub fn hide_action(mut self) -> Self {
		self.is_action_visible = false;
		self
	}

	pub fn on_select(mut self, handler: Callback<T>) -> Self {
		self.on_select = handler;
		self
	}

	pub fn on_close(mut self, handler: Callback<()>) -> Self {
		self.on_close = handler;
		self
	}

	pub fn on_search_input(mut self, handler: Callback<InputEvent>) -> Self {
		self.on_search_input = handler;
		self
	}

	pub fn on_notify(mut self, handler: Callback<Notice>) -> Self {
		self.on_notify = handler;
		self
	}
}

/// One assembled column of the dialog's listing, in the fixed contract
/// order: Edit, then the caller's entity columns, then Status, then Action.
#[derive(Clone)]
pub enum DialogColumn<T> {
	/// Synthesized edit-action column
	Edit,
	/// A caller-supplied entity column
	Entity(Column<T>),
	/// Synthesized Active/Inactive label column
	Status,
	/// Synthesized active-toggle column
	Action,
}

impl<T> DialogColumn<T> {
	pub fn header(&self) -> &str {
		match self {
			Self::Edit => "Edit",
			Self::Entity(column) => &column.header,
			Self::Status => "Status",
			Self::Action => "Action",
		}
	}
}

/// Modal search/browse/select state over one entity type.
///
/// The dialog fetches once on open, keeps a serial-indexed view plus an
/// id → active map, delegates row rendering and search matching to the
/// external grid, and never lets a remote failure crash the hosting page.
///
/// There is no request cancellation: a fetch still in flight when the host
/// closes the dialog resolves against whatever instance the host kept, so
/// hosts that drop the dialog early must guard the late response themselves.
pub struct SearchDialog<T> {
	props: SearchDialogProps<T>,
	open: bool,
	search_term: String,
	rows: Vec<RowItem<T>>,
	status: HashMap<i64, bool>,
}

impl<T> SearchDialog<T>
where
	T: Clone + Send + Sync + 'static,
{
	pub fn new(props: SearchDialogProps<T>) -> Self {
		Self {
			props,
			open: false,
			search_term: String::new(),
			rows: Vec::new(),
			status: HashMap::new(),
		}
	}

	pub fn is_open(&self) -> bool {
		self.open
	}

	/// The serial-indexed view seeded by the last successful fetch
	pub fn rows(&self) -> &[RowItem<T>] {
		&self.rows
	}

	pub fn search_term(&self) -> &str {
		&self.search_term
	}

	/// Current active flag of one row, as last confirmed by the server
	pub fn status_of(&self, id: i64) -> Option<bool> {
		self.status.get(&id).copied()
	}

	pub fn status_map(&self) -> &HashMap<i64, bool> {
		&self.status
	}

	/// Open the dialog: fetch the collection once and seed the view.
	///
	/// A failed fetch leaves the view empty and reports through the
	/// caller's notification channel.
	pub async fn open(&mut self) {
		self.open = true;
		let result = self.props.source.fetch_items().await;
		if !result.is_success() {
			let message = result
				.error_message()
				.unwrap_or("failed to load items")
				.to_string();
			tracing::warn!("search dialog fetch failed: {}", message);
			self.rows.clear();
			self.status.clear();
			self.props.on_notify.call(Notice::error(message));
			return;
		}

		let items = result.into_data().unwrap_or_default();
		self.status = items
			.iter()
			.map(|item| {
				(
					(self.props.get_item_id)(item),
					(self.props.get_item_active)(item),
				)
			})
			.collect();
		self.rows = items
			.into_iter()
			.enumerate()
			.map(|(index, item)| RowItem {
				serial: index + 1,
				item,
			})
			.collect();
	}

	/// Store the search term; matching itself is delegated to the grid,
	/// which receives the raw term on the next render.
	pub fn set_search(&mut self, term: impl Into<String>) {
		self.search_term = term.into();
	}

	/// Assemble the listing columns in the fixed contract order so that
	/// generated grids look consistent across entity types.
	pub fn assembled_columns(&self) -> Vec<DialogColumn<T>> {
		let mut columns = Vec::with_capacity(self.props.columns.len() + 3);
		if self.props.is_edit_button_visible {
			columns.push(DialogColumn::Edit);
		}
		for column in &self.props.columns {
			columns.push(DialogColumn::Entity(column.clone()));
		}
		if self.props.is_status_visible {
			columns.push(DialogColumn::Status);
		}
		if self.props.is_action_visible {
			columns.push(DialogColumn::Action);
		}
		columns
	}

	/// The Status column label for one row
	pub fn status_label(&self, id: i64) -> &'static str {
		match self.status_of(id) {
			Some(true) => "Active",
			Some(false) => "Inactive",
			None => "",
		}
	}

	/// Hand the underlying entity of the given row back to the caller and
	/// close the dialog.
	///
	/// The caller receives the original entity as fetched, not the
	/// serial/status-annotated projection.
	pub fn select_edit(&mut self, serial: usize) -> Option<T> {
		let item = self
			.rows
			.iter()
			.find(|row| row.serial == serial)?
			.item
			.clone();
		self.props.on_select.call(item.clone());
		self.close();
		Some(item)
	}

	/// Flip one row's active flag through the data source.
	///
	/// The local status map changes only after the server confirms; a failed
	/// write leaves the rendered state untouched and reports the failure.
	/// Rapid repeated toggles race server-side; the last response to arrive
	/// wins here.
	pub async fn toggle_status(&mut self, id: i64, active: bool) -> bool {
		let result = self.props.source.update_active_status(id, active).await;
		if result.is_success() {
			self.status.insert(id, active);
			true
		} else {
			let message = result
				.error_message()
				.unwrap_or("failed to update status")
				.to_string();
			tracing::warn!("status toggle for id {} rejected: {}", id, message);
			self.props.on_notify.call(Notice::error(message));
			false
		}
	}

	/// Close the dialog and reset the search term so reopening starts
	/// unfiltered
	pub fn close(&mut self) {
		self.open = false;
		self.search_term.clear();
		self.props.on_close.call(());
	}

	/// The embedded search box, built on the dynamic field layer
	pub fn search_field(&self) -> FieldDescriptor {
		FieldDescriptor::Search(TextField::new(
			FieldBase::new("dialog-search", "Search")
				.with_value(self.search_term.clone())
				.with_placeholder(self.props.search_placeholder.clone())
				.on_change(self.props.on_search_input.clone()),
		))
	}

	/// Render the modal chrome, delegating the listing to the external grid
	pub fn render(&self, grid: &dyn TableGrid<T>) -> String {
		if !self.open {
			return String::new();
		}
		let view = GridView {
			columns: &self.props.columns,
			rows: &self.rows,
			filter: &self.search_term,
		};
		format!(
			r#"<div class="modal-overlay"><div class="modal-dialog modal-search">{search}{listing}</div></div>"#,
			search = self.search_field().render(),
			listing = grid.render(view),
		)
	}
}
