//! Shared layout primitives
//!
//! The hosting shell supplies the actual grid; only the 12-column span unit
//! every rendered field is wrapped in lives here.

/// Column span on the hosting 12-column grid, clamped to `1..=12`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize(u8);

impl GridSize {
	pub const FULL: GridSize = GridSize(12);
	pub const HALF: GridSize = GridSize(6);
	pub const THIRD: GridSize = GridSize(4);
	pub const QUARTER: GridSize = GridSize(3);

	pub fn new(span: u8) -> Self {
		Self(span.clamp(1, 12))
	}

	pub fn span(&self) -> u8 {
		self.0
	}
}

impl Default for GridSize {
	fn default() -> Self {
		Self::HALF
	}
}

/// Wrap rendered control markup in the hosting layout's column unit
pub fn column(size: GridSize, inner: &str) -> String {
	format!(r#"<div class="col-md-{}">{}</div>"#, size.span(), inner)
}
