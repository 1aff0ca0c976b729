//! Data-source seam between the dialog and the entity layer

use async_trait::async_trait;
use medikit_entity::{BaseDto, EntityService, OperationResult};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// What the search dialog needs from a backing store: one unfiltered fetch
/// and the narrow active-flag write.
///
/// Decode failures from the entity layer are folded into a failed
/// [`OperationResult`] here; the dialog boundary treats every failure the
/// same way (empty view or untouched toggle, plus a notification).
#[async_trait]
pub trait EntityBrowseSource<T>: Send + Sync {
	async fn fetch_items(&self) -> OperationResult<Vec<T>>;

	async fn update_active_status(&self, id: i64, active: bool) -> OperationResult<bool>;
}

#[async_trait]
impl<T> EntityBrowseSource<T> for EntityService<T>
where
	T: BaseDto + Serialize + DeserializeOwned + Send + Sync + 'static,
{
	async fn fetch_items(&self) -> OperationResult<Vec<T>> {
		match self.get_all().await {
			Ok(result) => result,
			Err(err) => OperationResult::fail(err.to_string()),
		}
	}

	async fn update_active_status(&self, id: i64, active: bool) -> OperationResult<bool> {
		match EntityService::update_active_status(self, id, active).await {
			Ok(result) => result,
			Err(err) => OperationResult::fail(err.to_string()),
		}
	}
}
