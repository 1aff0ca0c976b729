//! Generic typed REST client over one entity resource
//!
//! One `EntityService` instance is bound at construction to an entity name
//! and a module base URL, and is typically constructed fresh per consuming
//! screen. It provides the uniform list/find/save/status/next-code surface
//! every module screen uses, regardless of entity shape.

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::dto::{BaseDto, YesNo};
use crate::error::{EntityError, EntityResult};
use crate::filter::FilterExpr;
use crate::result::OperationResult;
use crate::session::SessionContext;
use crate::settings::{ApiModule, ApiSettings};

/// Typed CRUD client for one entity resource.
///
/// Transport failures (unreachable host, timeout, non-2xx without a readable
/// envelope) are normalized into a failed [`OperationResult`]; the only
/// condition surfaced as an `Err` is a malformed body on an otherwise
/// successful response, which callers must handle explicitly.
///
/// No ordering is guaranteed across concurrent operations: two overlapping
/// `save` calls for the same entity race, and the last response to arrive
/// wins in whatever state the caller keeps.
///
/// # Examples
///
/// ```rust,ignore
/// let settings = ApiSettings::from_env();
/// let context = SessionContext::new("jdoe", CompanyRef::new(1, "GH", "General Hospital"));
/// let icd: EntityService<IcdDto> =
/// 	EntityService::new("Icd", ApiModule::Clinical, &settings, context);
/// let all = icd.get_all().await?;
/// ```
pub struct EntityService<T> {
	entity_name: String,
	base_url: String,
	context: SessionContext,
	http: reqwest::Client,
	_entity: PhantomData<fn() -> T>,
}

impl<T> EntityService<T>
where
	T: BaseDto + Serialize + DeserializeOwned,
{
	/// Bind a client to one entity resource under one module's base URL
	pub fn new(
		entity_name: impl Into<String>,
		module: ApiModule,
		settings: &ApiSettings,
		context: SessionContext,
	) -> Self {
		Self {
			entity_name: entity_name.into(),
			base_url: settings.base_url(module),
			context,
			http: reqwest::Client::new(),
			_entity: PhantomData,
		}
	}

	pub fn entity_name(&self) -> &str {
		&self.entity_name
	}

	pub fn context(&self) -> &SessionContext {
		&self.context
	}

	/// Fetch the unfiltered collection.
	///
	/// Pagination, if any, is a server concern; the client passes the
	/// collection through as-is.
	pub async fn get_all(&self) -> EntityResult<OperationResult<Vec<T>>> {
		let url = self.entity_url("");
		tracing::debug!("get_all {}: {}", self.entity_name, url);
		self.execute(self.http.get(&url)).await
	}

	/// Fetch the subset matching a structured predicate.
	///
	/// The predicate is validated locally (field names) and rendered into
	/// the canonical query form; the server interprets the comparison
	/// semantics. A predicate the server rejects surfaces as a failed
	/// [`OperationResult`], not an `Err`.
	pub async fn find(&self, filter: &FilterExpr) -> EntityResult<OperationResult<Vec<T>>> {
		let query = filter.to_query_string()?;
		let url = format!("{}/Find?{}", self.entity_url(""), query);
		tracing::debug!("find {}: {}", self.entity_name, url);
		self.execute(self.http.get(&url)).await
	}

	/// Upsert one record.
	///
	/// An entity carrying [`NEW_ENTITY_ID`] inserts, any other id updates;
	/// the distinction is entirely server-side. The saved record is echoed
	/// back with its assigned id.
	///
	/// [`NEW_ENTITY_ID`]: crate::dto::NEW_ENTITY_ID
	pub async fn save(&self, entity: &T) -> EntityResult<OperationResult<T>> {
		let url = self.entity_url("/Save");
		tracing::debug!("save {} (id {}): {}", self.entity_name, entity.id(), url);
		self.execute(self.http.post(&url).json(entity)).await
	}

	/// Flip only the active flag, without the full entity payload
	pub async fn update_active_status(
		&self,
		id: i64,
		active: bool,
	) -> EntityResult<OperationResult<bool>> {
		let url = self.entity_url(&format!("/Status/{id}"));
		tracing::debug!("update_active_status {} (id {}, active {})", self.entity_name, id, active);
		let body = serde_json::json!({ "activeYN": YesNo::from(active) });
		self.execute(self.http.patch(&url).json(&body)).await
	}

	/// Request the next server-generated sequential code (e.g. `ICD0001`).
	///
	/// Codes are advisory until persisted: two calls without an intervening
	/// save may return the same value. Collision safety on save is the
	/// server's concern.
	pub async fn get_next_code(
		&self,
		prefix: &str,
		width: usize,
	) -> EntityResult<OperationResult<String>> {
		let url = self.entity_url(&format!("/NextCode/{prefix}/{width}"));
		tracing::debug!("get_next_code {} ({}/{})", self.entity_name, prefix, width);
		self.execute(self.http.get(&url)).await
	}

	/// Hard-delete one record.
	///
	/// Most entities are soft-deactivated via [`update_active_status`]
	/// instead; only a few screens (e.g. indent master) surface this.
	///
	/// [`update_active_status`]: EntityService::update_active_status
	pub async fn delete(&self, id: i64) -> EntityResult<OperationResult<bool>> {
		let url = self.entity_url(&format!("/{id}"));
		tracing::debug!("delete {} (id {})", self.entity_name, id);
		self.execute(self.http.delete(&url)).await
	}

	fn entity_url(&self, suffix: &str) -> String {
		format!("{}/{}{}", self.base_url, self.entity_name, suffix)
	}

	/// Send a request and normalize the outcome into the envelope.
	async fn execute<R>(
		&self,
		request: reqwest::RequestBuilder,
	) -> EntityResult<OperationResult<R>>
	where
		R: DeserializeOwned,
	{
		let response = match request.send().await {
			Ok(response) => response,
			Err(err) => {
				tracing::warn!("request to {} failed: {}", self.entity_name, err);
				return Ok(OperationResult::fail(format!("request failed: {err}")));
			}
		};

		let status = response.status();
		let body = match response.text().await {
			Ok(body) => body,
			Err(err) => {
				tracing::warn!("failed to read {} response body: {}", self.entity_name, err);
				return Ok(OperationResult::fail(format!(
					"failed to read response body: {err}"
				)));
			}
		};

		if status.is_success() {
			// A malformed 2xx body is the one truly unexpected condition
			// surfaced to the caller instead of being normalized.
			return serde_json::from_str(&body).map_err(|source| EntityError::Decode {
				entity: self.entity_name.clone(),
				source,
			});
		}

		// Business rejections arrive as the same envelope on error statuses;
		// pass them through when readable, otherwise report the status.
		match serde_json::from_str::<OperationResult<R>>(&body) {
			Ok(result) if !result.is_success() => {
				tracing::warn!(
					"server rejected {} operation ({}): {}",
					self.entity_name,
					status,
					result.error_message().unwrap_or("")
				);
				Ok(result)
			}
			_ => {
				tracing::warn!("server returned {} for {}", status, self.entity_name);
				Ok(OperationResult::fail(format!(
					"server returned {status} for {}",
					self.entity_name
				)))
			}
		}
	}
}
