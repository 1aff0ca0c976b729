//! Behavior tests for the generic search/browse dialog

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use medikit_components::{
	Column, DialogColumn, EntityBrowseSource, GridView, Notice, SearchDialog, SearchDialogProps,
	TableGrid,
};
use medikit_entity::OperationResult;
use medikit_forms::{Callback, FieldDescriptor, InputEvent};

#[derive(Debug, Clone, PartialEq)]
struct IcdRow {
	id: i64,
	code: String,
	name: String,
	active: bool,
}

impl IcdRow {
	fn new(id: i64, code: &str, name: &str, active: bool) -> Self {
		Self {
			id,
			code: code.to_string(),
			name: name.to_string(),
			active,
		}
	}
}

struct FakeSource {
	items: Vec<IcdRow>,
	fail_fetch: bool,
	fail_status: bool,
	fetch_calls: AtomicUsize,
	status_calls: Mutex<Vec<(i64, bool)>>,
}

impl FakeSource {
	fn with_items(items: Vec<IcdRow>) -> Arc<Self> {
		Arc::new(Self {
			items,
			fail_fetch: false,
			fail_status: false,
			fetch_calls: AtomicUsize::new(0),
			status_calls: Mutex::new(Vec::new()),
		})
	}

	fn failing_fetch() -> Arc<Self> {
		Arc::new(Self {
			items: Vec::new(),
			fail_fetch: true,
			fail_status: false,
			fetch_calls: AtomicUsize::new(0),
			status_calls: Mutex::new(Vec::new()),
		})
	}

	fn with_failing_status(items: Vec<IcdRow>) -> Arc<Self> {
		Arc::new(Self {
			items,
			fail_fetch: false,
			fail_status: true,
			fetch_calls: AtomicUsize::new(0),
			status_calls: Mutex::new(Vec::new()),
		})
	}
}

#[async_trait]
impl EntityBrowseSource<IcdRow> for FakeSource {
	async fn fetch_items(&self) -> OperationResult<Vec<IcdRow>> {
		self.fetch_calls.fetch_add(1, Ordering::SeqCst);
		if self.fail_fetch {
			OperationResult::fail("clinical module unreachable")
		} else {
			OperationResult::ok(self.items.clone())
		}
	}

	async fn update_active_status(&self, id: i64, active: bool) -> OperationResult<bool> {
		self.status_calls.lock().unwrap().push((id, active));
		if self.fail_status {
			OperationResult::fail("status update rejected")
		} else {
			OperationResult::ok(active)
		}
	}
}

fn three_rows() -> Vec<IcdRow> {
	vec![
		IcdRow::new(1, "S52", "Fracture of forearm", true),
		IcdRow::new(2, "S62", "Fracture at wrist", false),
		IcdRow::new(3, "S72", "Fracture of femur", true),
	]
}

fn icd_columns() -> Vec<Column<IcdRow>> {
	vec![
		Column::new("code", "ICD Code").sortable(),
		Column::new("name", "Description"),
	]
}

fn props(source: Arc<FakeSource>) -> SearchDialogProps<IcdRow> {
	SearchDialogProps::new(
		source,
		icd_columns(),
		|row: &IcdRow| row.id,
		|row: &IcdRow| row.active,
	)
}

#[tokio::test]
async fn open_seeds_serials_and_the_status_map() {
	let mut dialog = SearchDialog::new(props(FakeSource::with_items(three_rows())));

	dialog.open().await;

	assert!(dialog.is_open());
	let serials: Vec<usize> = dialog.rows().iter().map(|row| row.serial).collect();
	assert_eq!(serials, vec![1, 2, 3]);
	assert_eq!(dialog.status_of(1), Some(true));
	assert_eq!(dialog.status_of(2), Some(false));
	assert_eq!(dialog.status_of(3), Some(true));
	assert_eq!(dialog.status_label(2), "Inactive");
}

#[tokio::test]
async fn searching_never_mutates_the_status_map() {
	let mut dialog = SearchDialog::new(props(FakeSource::with_items(three_rows())));
	dialog.open().await;
	let before = dialog.status_map().clone();

	dialog.set_search("matches nothing at all");

	assert_eq!(dialog.search_term(), "matches nothing at all");
	assert_eq!(dialog.status_map(), &before);
	assert_eq!(dialog.rows().len(), 3);
}

#[tokio::test]
async fn failed_fetch_leaves_the_view_empty_and_notifies() {
	let notices = Arc::new(Mutex::new(Vec::new()));
	let props = props(FakeSource::failing_fetch()).on_notify(Callback::new({
		let notices = Arc::clone(&notices);
		move |notice: Notice| notices.lock().unwrap().push(notice)
	}));
	let mut dialog = SearchDialog::new(props);

	dialog.open().await;

	assert!(dialog.is_open());
	assert!(dialog.rows().is_empty());
	assert!(dialog.status_map().is_empty());
	let notices = notices.lock().unwrap();
	assert_eq!(notices.len(), 1);
	assert!(notices[0].message.contains("unreachable"));
}

#[tokio::test]
async fn successful_toggle_updates_only_the_local_map() {
	let source = FakeSource::with_items(three_rows());
	let mut dialog = SearchDialog::new(props(Arc::clone(&source)));
	dialog.open().await;

	let applied = dialog.toggle_status(2, true).await;

	assert!(applied);
	assert_eq!(dialog.status_of(2), Some(true));
	// No refetch: the view was updated in place.
	assert_eq!(source.fetch_calls.load(Ordering::SeqCst), 1);
	assert_eq!(*source.status_calls.lock().unwrap(), vec![(2, true)]);
}

#[tokio::test]
async fn toggling_is_last_write_wins_not_cumulative() {
	let mut dialog = SearchDialog::new(props(FakeSource::with_items(three_rows())));
	dialog.open().await;

	dialog.toggle_status(1, true).await;
	dialog.toggle_status(1, false).await;
	assert_eq!(dialog.status_of(1), Some(false));

	dialog.toggle_status(1, false).await;
	dialog.toggle_status(1, true).await;
	assert_eq!(dialog.status_of(1), Some(true));
}

#[tokio::test]
async fn failed_toggle_keeps_the_rendered_status() {
	let notices = Arc::new(Mutex::new(Vec::new()));
	let props = props(FakeSource::with_failing_status(three_rows())).on_notify(Callback::new({
		let notices = Arc::clone(&notices);
		move |notice: Notice| notices.lock().unwrap().push(notice)
	}));
	let mut dialog = SearchDialog::new(props);
	dialog.open().await;

	let applied = dialog.toggle_status(2, true).await;

	assert!(!applied);
	assert_eq!(dialog.status_of(2), Some(false));
	assert_eq!(notices.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn select_edit_hands_back_the_original_entity_and_closes() {
	let selected = Arc::new(Mutex::new(None));
	let props = props(FakeSource::with_items(three_rows())).on_select(Callback::new({
		let selected = Arc::clone(&selected);
		move |row: IcdRow| *selected.lock().unwrap() = Some(row)
	}));
	let mut dialog = SearchDialog::new(props);
	dialog.open().await;
	dialog.set_search("fracture");

	let returned = dialog.select_edit(2);

	// The original entity, not the serial/status-annotated projection.
	let expected = IcdRow::new(2, "S62", "Fracture at wrist", false);
	assert_eq!(returned, Some(expected.clone()));
	assert_eq!(*selected.lock().unwrap(), Some(expected));
	assert!(!dialog.is_open());
	assert_eq!(dialog.search_term(), "");
}

#[tokio::test]
async fn select_edit_with_unknown_serial_is_a_no_op() {
	let mut dialog = SearchDialog::new(props(FakeSource::with_items(three_rows())));
	dialog.open().await;

	assert_eq!(dialog.select_edit(99), None);
	assert!(dialog.is_open());
}

#[tokio::test]
async fn close_resets_the_search_term_for_the_next_open() {
	let closed = Arc::new(Mutex::new(0));
	let props = props(FakeSource::with_items(three_rows())).on_close(Callback::new({
		let closed = Arc::clone(&closed);
		move |_| *closed.lock().unwrap() += 1
	}));
	let mut dialog = SearchDialog::new(props);
	dialog.open().await;
	dialog.set_search("femur");

	dialog.close();
	dialog.open().await;

	assert_eq!(*closed.lock().unwrap(), 1);
	assert_eq!(dialog.search_term(), "");
	assert!(dialog.is_open());
}

#[tokio::test]
async fn columns_are_assembled_in_the_contract_order() {
	let dialog = SearchDialog::new(props(FakeSource::with_items(three_rows())));

	let columns = dialog.assembled_columns();

	let headers: Vec<&str> = columns.iter().map(|column| column.header()).collect();
	assert_eq!(
		headers,
		vec!["Edit", "ICD Code", "Description", "Status", "Action"]
	);
	assert!(matches!(&columns[0], DialogColumn::Edit));
	assert!(matches!(&columns[3], DialogColumn::Status));
	assert!(matches!(&columns[4], DialogColumn::Action));
}

#[tokio::test]
async fn optional_columns_can_be_hidden_independently() {
	let props = props(FakeSource::with_items(three_rows()))
		.hide_edit_button()
		.hide_action();
	let dialog = SearchDialog::new(props);

	let columns = dialog.assembled_columns();
	let headers: Vec<&str> = columns
		.iter()
		.map(|column| column.header())
		.collect();

	assert_eq!(headers, vec!["ICD Code", "Description", "Status"]);
}

#[tokio::test]
async fn search_box_is_a_dynamic_search_field_wired_to_the_host() {
	let received = Arc::new(Mutex::new(Vec::new()));
	let props = props(FakeSource::with_items(three_rows()))
		.search_placeholder("Search ICD codes")
		.on_search_input(Callback::new({
			let received = Arc::clone(&received);
			move |event: InputEvent| received.lock().unwrap().push(event.value)
		}));
	let dialog = SearchDialog::new(props);

	match dialog.search_field() {
		FieldDescriptor::Search(field) => {
			assert_eq!(field.base.placeholder.as_deref(), Some("Search ICD codes"));
			field.input("femur");
		}
		_ => panic!("expected a search field"),
	}

	assert_eq!(*received.lock().unwrap(), vec!["femur".to_string()]);
}

struct HeaderGrid;

impl TableGrid<IcdRow> for HeaderGrid {
	fn render(&self, view: GridView<'_, IcdRow>) -> String {
		let headers: Vec<&str> = view
			.columns
			.iter()
			.map(|column| column.header.as_str())
			.collect();
		format!(
			"<table data-filter=\"{}\" data-rows=\"{}\">{}</table>",
			view.filter,
			view.rows.len(),
			headers.join("|")
		)
	}
}

#[tokio::test]
async fn render_delegates_rows_and_raw_term_to_the_grid() {
	let mut dialog = SearchDialog::new(props(FakeSource::with_items(three_rows())));

	assert_eq!(dialog.render(&HeaderGrid), "");

	dialog.open().await;
	dialog.set_search("wrist");
	let html = dialog.render(&HeaderGrid);

	assert!(html.contains(r#"data-filter="wrist""#));
	assert!(html.contains(r#"data-rows="3""#));
	assert!(html.contains("ICD Code|Description"));
	assert!(html.contains(r#"placeholder="Search""#));
	assert!(html.starts_with(r#"<div class="modal-overlay">"#));
}
