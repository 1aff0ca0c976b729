//! Explicit tenant/session context
//!
//! The hosting shell constructs one [`SessionContext`] after sign-in and
//! passes it into [`EntityService::new`] and dialog constructors. Nothing in
//! this crate reads ambient global state.
//!
//! [`EntityService::new`]: crate::service::EntityService::new

use serde::{Deserialize, Serialize};

use crate::dto::BaseDto;

/// Tenant attribution carried on every persisted record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRef {
	pub id: i64,
	pub code: String,
	pub name: String,
}

impl CompanyRef {
	pub fn new(id: i64, code: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			id,
			code: code.into(),
			name: name.into(),
		}
	}
}

/// Current user and tenant, constructor-injected wherever needed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
	pub user_name: String,
	pub company: CompanyRef,
}

impl SessionContext {
	pub fn new(user_name: impl Into<String>, company: CompanyRef) -> Self {
		Self {
			user_name: user_name.into(),
			company,
		}
	}

	/// Copy the session's tenant fields onto a record before save.
	///
	/// The entity layer never does this implicitly.
	pub fn stamp<T: BaseDto>(&self, dto: &mut T) {
		dto.set_company(&self.company);
	}
}
