//! Column descriptors and the external grid seam

use std::sync::Arc;

/// Custom cell renderer: `(item, row_index, col_index) -> markup`
pub type CellRenderer<T> = Arc<dyn Fn(&T, usize, usize) -> String + Send + Sync>;

/// Describes one column of an entity listing.
///
/// When no custom `render` is supplied, `key` must name a real property of
/// the row projection the grid receives; with a renderer, `key` is used only
/// for column identity and ordering.
pub struct Column<T> {
	pub key: String,
	pub header: String,
	pub visible: bool,
	pub sortable: bool,
	pub render: Option<CellRenderer<T>>,
}

impl<T> Column<T> {
	pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			header: header.into(),
			visible: true,
			sortable: false,
			render: None,
		}
	}

	pub fn hidden(mut self) -> Self {
		self.visible = false;
		self
	}

	pub fn sortable(mut self) -> Self {
		self.sortable = true;
		self
	}

	pub fn with_render<F>(mut self, render: F) -> Self
	where
		F: Fn(&T, usize, usize) -> String + Send + Sync + 'static,
	{
		self.render = Some(Arc::new(render));
		self
	}
}

impl<T> Clone for Column<T> {
	fn clone(&self) -> Self {
		Self {
			key: self.key.clone(),
			header: self.header.clone(),
			visible: self.visible,
			sortable: self.sortable,
			render: self.render.as_ref().map(Arc::clone),
		}
	}
}

impl<T> std::fmt::Debug for Column<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Column")
			.field("key", &self.key)
			.field("header", &self.header)
			.field("visible", &self.visible)
			.field("sortable", &self.sortable)
			.field("render", &self.render.as_ref().map(|_| "<renderer>"))
			.finish()
	}
}

/// One listing row: the original entity plus its 1-based display serial
#[derive(Debug, Clone, PartialEq)]
pub struct RowItem<T> {
	pub serial: usize,
	pub item: T,
}

/// Everything the dialog hands to the external grid for one render pass.
///
/// The grid owns search matching against `filter`, sorting, and export; the
/// dialog only carries the raw term.
pub struct GridView<'a, T> {
	pub columns: &'a [Column<T>],
	pub rows: &'a [RowItem<T>],
	pub filter: &'a str,
}

/// The externally supplied tabular renderer (out of scope here, interface
/// only)
pub trait TableGrid<T> {
	fn render(&self, view: GridView<'_, T>) -> String;
}
