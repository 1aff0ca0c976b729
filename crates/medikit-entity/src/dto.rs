//! The contract every entity serviced by [`EntityService`] satisfies
//!
//! [`EntityService`]: crate::service::EntityService

use serde::{Deserialize, Serialize};

use crate::session::CompanyRef;

/// Sentinel id of an entity that has not been persisted yet.
///
/// The remote store assigns a real id on first successful save; the same
/// endpoint handles insert and update, distinguished only by this value.
pub const NEW_ENTITY_ID: i64 = 0;

/// The `Y`/`N` flag representation used across the whole system for
/// activation and soft deletion.
///
/// Entities are never hard-deleted through the entity layer; "deletion"
/// flips this flag to [`YesNo::No`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum YesNo {
	#[serde(rename = "Y")]
	Yes,
	#[default]
	#[serde(rename = "N")]
	No,
}

impl YesNo {
	/// The wire representation (`"Y"` or `"N"`)
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Yes => "Y",
			Self::No => "N",
		}
	}

	pub fn as_bool(&self) -> bool {
		matches!(self, Self::Yes)
	}
}

impl From<bool> for YesNo {
	fn from(value: bool) -> Self {
		if value { Self::Yes } else { Self::No }
	}
}

/// Minimal shape every serviced entity must expose.
///
/// Every row persisted through the entity layer carries an active flag, an
/// auditing notes field, and tenant attribution (company id/code/name) for
/// multi-tenant partitioning. The client does not enforce tenant scoping
/// itself; callers stamp the tenant fields before save, typically via
/// [`SessionContext::stamp`].
///
/// [`SessionContext::stamp`]: crate::session::SessionContext::stamp
pub trait BaseDto {
	fn id(&self) -> i64;
	fn set_id(&mut self, id: i64);

	/// The `Y`/`N` activation flag
	fn active(&self) -> YesNo;
	fn set_active(&mut self, active: YesNo);

	/// Auditing notes carried on every record
	fn notes(&self) -> Option<&str>;

	fn company_id(&self) -> i64;
	fn company_code(&self) -> &str;
	fn company_name(&self) -> &str;
	fn set_company(&mut self, company: &CompanyRef);

	/// Whether this instance still carries the unsaved-id sentinel
	fn is_new(&self) -> bool {
		self.id() == NEW_ENTITY_ID
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(YesNo::Yes, "\"Y\"", true)]
	#[case(YesNo::No, "\"N\"", false)]
	fn test_yes_no_wire_form(#[case] flag: YesNo, #[case] wire: &str, #[case] as_bool: bool) {
		assert_eq!(serde_json::to_string(&flag).unwrap(), wire);
		assert_eq!(serde_json::from_str::<YesNo>(wire).unwrap(), flag);
		assert_eq!(flag.as_bool(), as_bool);
	}

	#[rstest]
	fn test_yes_no_defaults_inactive() {
		assert_eq!(YesNo::default(), YesNo::No);
		assert_eq!(YesNo::from(true), YesNo::Yes);
	}
}
