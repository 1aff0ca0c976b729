//! Per-module API endpoint configuration
//!
//! Each hospital module exposes its own REST base URL. Settings resolve from
//! an in-code default, overridden by `MEDIKIT_API_URL`, overridden per module
//! by `MEDIKIT_<MODULE>_API_URL`.

use std::collections::HashMap;
use std::env;

const DEFAULT_ROOT_URL: &str = "http://localhost:8000";

/// The hospital modules an [`EntityService`] can be bound to
///
/// [`EntityService`]: crate::service::EntityService
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiModule {
	Admission,
	Clinical,
	Billing,
	Inventory,
}

impl ApiModule {
	/// The path segment of this module's REST root
	pub fn key(&self) -> &'static str {
		match self {
			Self::Admission => "admission",
			Self::Clinical => "clinical",
			Self::Billing => "billing",
			Self::Inventory => "inventory",
		}
	}

	fn env_var(&self) -> &'static str {
		match self {
			Self::Admission => "MEDIKIT_ADMISSION_API_URL",
			Self::Clinical => "MEDIKIT_CLINICAL_API_URL",
			Self::Billing => "MEDIKIT_BILLING_API_URL",
			Self::Inventory => "MEDIKIT_INVENTORY_API_URL",
		}
	}

	const ALL: [ApiModule; 4] = [
		ApiModule::Admission,
		ApiModule::Clinical,
		ApiModule::Billing,
		ApiModule::Inventory,
	];
}

/// Resolved base URLs for every module
#[derive(Debug, Clone)]
pub struct ApiSettings {
	root: String,
	overrides: HashMap<ApiModule, String>,
}

impl ApiSettings {
	/// Settings rooted at the given URL, `{root}/{module}` per module
	pub fn new(root: impl Into<String>) -> Self {
		Self {
			root: trim_trailing_slash(root.into()),
			overrides: HashMap::new(),
		}
	}

	/// Resolve settings from the environment
	pub fn from_env() -> Self {
		let root = env::var("MEDIKIT_API_URL").unwrap_or_else(|_| DEFAULT_ROOT_URL.to_string());
		let mut settings = Self::new(root);
		for module in ApiModule::ALL {
			if let Ok(url) = env::var(module.env_var()) {
				settings = settings.with_module_url(module, url);
			}
		}
		settings
	}

	/// Override one module's base URL
	pub fn with_module_url(mut self, module: ApiModule, url: impl Into<String>) -> Self {
		self.overrides
			.insert(module, trim_trailing_slash(url.into()));
		self
	}

	/// The base URL entity paths are appended to for the given module
	pub fn base_url(&self, module: ApiModule) -> String {
		match self.overrides.get(&module) {
			Some(url) => url.clone(),
			None => format!("{}/{}", self.root, module.key()),
		}
	}
}

impl Default for ApiSettings {
	fn default() -> Self {
		Self::new(DEFAULT_ROOT_URL)
	}
}

fn trim_trailing_slash(url: String) -> String {
	url.trim_end_matches('/').to_string()
}
