//! Entity layer error types

use thiserror::Error;

/// Errors the entity layer raises to the caller.
///
/// Transport and business failures never surface here; those are normalized
/// into a failed [`OperationResult`]. Only conditions the caller must handle
/// explicitly become an `EntityError`.
///
/// [`OperationResult`]: crate::result::OperationResult
#[derive(Debug, Error)]
pub enum EntityError {
	#[error("malformed response body for entity `{entity}`: {source}")]
	Decode {
		entity: String,
		#[source]
		source: serde_json::Error,
	},

	#[error("invalid filter field `{0}`")]
	InvalidFilter(String),
}

pub type EntityResult<T> = Result<T, EntityError>;
