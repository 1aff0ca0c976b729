//! Response envelope shared by every remote call

use serde::{Deserialize, Serialize};

/// Envelope returned by every remote store operation.
///
/// When `success` is `false` the `data` field must not be relied upon; when
/// `true`, read operations carry `data` while void writes may leave it empty.
///
/// # Examples
///
/// ```
/// use medikit_entity::OperationResult;
///
/// let result = OperationResult::ok(vec![1, 2, 3]);
/// assert!(result.is_success());
/// assert_eq!(result.into_data(), Some(vec![1, 2, 3]));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationResult<T> {
	/// Whether the operation succeeded
	pub success: bool,
	/// Payload for read operations; may be absent for void writes
	#[serde(skip_serializing_if = "Option::is_none")]
	pub data: Option<T>,
	/// Server-supplied message when `success` is `false`
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error_message: Option<String>,
}

impl<T> OperationResult<T> {
	/// Create a successful result carrying a payload
	pub fn ok(data: T) -> Self {
		Self {
			success: true,
			data: Some(data),
			error_message: None,
		}
	}

	/// Create a successful result without a payload (void writes)
	pub fn ok_empty() -> Self {
		Self {
			success: true,
			data: None,
			error_message: None,
		}
	}

	/// Create a failed result carrying an error message
	pub fn fail(message: impl Into<String>) -> Self {
		Self {
			success: false,
			data: None,
			error_message: Some(message.into()),
		}
	}

	/// Whether the operation succeeded
	pub fn is_success(&self) -> bool {
		self.success
	}

	/// Consume the envelope, returning the payload if present
	pub fn into_data(self) -> Option<T> {
		self.data
	}

	/// The failure message, if any
	pub fn error_message(&self) -> Option<&str> {
		self.error_message.as_deref()
	}
}
