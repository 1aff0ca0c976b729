//! Structured lookup predicates
//!
//! Server-side lookups take a predicate built from typed parts instead of a
//! raw expression string. Field names are validated before anything is sent,
//! and values are percent-encoded into one canonical `field=op:value` query
//! form the remote store interprets.

use serde::{Deserialize, Serialize};

use crate::dto::YesNo;
use crate::error::{EntityError, EntityResult};

/// Comparison operator of a single predicate term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterOperator {
	Eq,
	Ne,
	Gt,
	Gte,
	Lt,
	Lte,
	Contains,
	StartsWith,
	EndsWith,
}

impl FilterOperator {
	/// The operator token used in the wire form
	pub fn token(&self) -> &'static str {
		match self {
			Self::Eq => "eq",
			Self::Ne => "ne",
			Self::Gt => "gt",
			Self::Gte => "gte",
			Self::Lt => "lt",
			Self::Lte => "lte",
			Self::Contains => "contains",
			Self::StartsWith => "startswith",
			Self::EndsWith => "endswith",
		}
	}
}

/// Typed comparison value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterValue {
	String(String),
	Integer(i64),
	Float(f64),
	/// Rendered as the system-wide `Y`/`N` flag form
	Boolean(bool),
	Null,
}

impl FilterValue {
	fn render(&self) -> String {
		match self {
			Self::String(value) => value.clone(),
			Self::Integer(value) => value.to_string(),
			Self::Float(value) => value.to_string(),
			Self::Boolean(value) => YesNo::from(*value).as_str().to_string(),
			Self::Null => "null".to_string(),
		}
	}
}

impl From<&str> for FilterValue {
	fn from(value: &str) -> Self {
		Self::String(value.to_string())
	}
}

impl From<String> for FilterValue {
	fn from(value: String) -> Self {
		Self::String(value)
	}
}

impl From<i64> for FilterValue {
	fn from(value: i64) -> Self {
		Self::Integer(value)
	}
}

impl From<f64> for FilterValue {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

impl From<bool> for FilterValue {
	fn from(value: bool) -> Self {
		Self::Boolean(value)
	}
}

/// One predicate term: `field <operator> value`
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
	pub field: String,
	pub operator: FilterOperator,
	pub value: FilterValue,
}

impl Filter {
	pub fn new(
		field: impl Into<String>,
		operator: FilterOperator,
		value: impl Into<FilterValue>,
	) -> Self {
		Self {
			field: field.into(),
			operator,
			value: value.into(),
		}
	}

	pub fn eq(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
		Self::new(field, FilterOperator::Eq, value)
	}

	pub fn ne(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
		Self::new(field, FilterOperator::Ne, value)
	}

	pub fn contains(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
		Self::new(field, FilterOperator::Contains, value)
	}
}

/// Conjunction of predicate terms
///
/// # Examples
///
/// ```
/// use medikit_entity::{Filter, FilterExpr};
///
/// let expr = FilterExpr::new()
/// 	.and(Filter::eq("defaultYN", true))
/// 	.and(Filter::contains("icdName", "fracture"));
/// assert_eq!(
/// 	expr.to_query_string().unwrap(),
/// 	"defaultYN=eq:Y&icdName=contains:fracture"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterExpr {
	filters: Vec<Filter>,
}

impl FilterExpr {
	pub fn new() -> Self {
		Self::default()
	}

	/// Add a term to the conjunction
	pub fn and(mut self, filter: Filter) -> Self {
		self.filters.push(filter);
		self
	}

	pub fn is_empty(&self) -> bool {
		self.filters.is_empty()
	}

	pub fn terms(&self) -> &[Filter] {
		&self.filters
	}

	/// Render the canonical wire form, validating every field name first.
	///
	/// Field names must be ASCII identifiers; anything else is rejected here
	/// and never reaches the server.
	pub fn to_query_string(&self) -> EntityResult<String> {
		let mut parts = Vec::with_capacity(self.filters.len());
		for filter in &self.filters {
			if !is_valid_field_name(&filter.field) {
				return Err(EntityError::InvalidFilter(filter.field.clone()));
			}
			parts.push(format!(
				"{}={}:{}",
				filter.field,
				filter.operator.token(),
				urlencoding::encode(&filter.value.render())
			));
		}
		Ok(parts.join("&"))
	}
}

fn is_valid_field_name(field: &str) -> bool {
	let mut chars = field.chars();
	match chars.next() {
		Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
		_ => return false,
	}
	chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_boolean_renders_as_yes_no_flag() {
		let expr = FilterExpr::new().and(Filter::eq("defaultYN", true));

		assert_eq!(expr.to_query_string().unwrap(), "defaultYN=eq:Y");
	}

	#[rstest]
	fn test_values_are_percent_encoded() {
		let expr = FilterExpr::new().and(Filter::contains("wardName", "ICU & burns"));

		assert_eq!(
			expr.to_query_string().unwrap(),
			"wardName=contains:ICU%20%26%20burns"
		);
	}

	#[rstest]
	#[case("1stField")]
	#[case("ward name")]
	#[case("name;drop")]
	#[case("")]
	fn test_invalid_field_names_are_rejected(#[case] field: &str) {
		let expr = FilterExpr::new().and(Filter::eq(field, "x"));

		let err = expr.to_query_string().unwrap_err();
		assert!(matches!(err, EntityError::InvalidFilter(_)));
	}

	#[rstest]
	fn test_conjunction_joins_with_ampersand() {
		let expr = FilterExpr::new()
			.and(Filter::eq("companyId", 3_i64))
			.and(Filter::ne("activeYN", false));

		assert_eq!(
			expr.to_query_string().unwrap(),
			"companyId=eq:3&activeYN=ne:N"
		);
	}

	#[rstest]
	fn test_empty_expression_renders_empty() {
		assert!(FilterExpr::new().is_empty());
		assert_eq!(FilterExpr::new().to_query_string().unwrap(), "");
	}
}
