//! Cloneable event-handler wrappers

use std::sync::Arc;

/// A type-safe, cheaply cloneable wrapper for event handlers.
///
/// Wrapping the function in an `Arc` gives callers a stable handle they can
/// clone into descriptors without re-creating closures per render.
///
/// # Examples
///
/// ```
/// use medikit_forms::Callback;
///
/// let double = Callback::new(|x: i64| x * 2);
/// assert_eq!(double.call(21), 42);
/// ```
pub struct Callback<Args, Ret = ()> {
	inner: Arc<dyn Fn(Args) -> Ret + Send + Sync + 'static>,
}

impl<Args, Ret> Callback<Args, Ret> {
	/// Wrap a function or closure
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(Args) -> Ret + Send + Sync + 'static,
	{
		Self { inner: Arc::new(f) }
	}

	/// Invoke the handler
	pub fn call(&self, args: Args) -> Ret {
		(self.inner)(args)
	}
}

impl<Args: 'static> Callback<Args, ()> {
	/// A handler that ignores its event
	pub fn noop() -> Self {
		Self::new(|_| ())
	}
}

impl<Args, Ret> Clone for Callback<Args, Ret> {
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
		}
	}
}

impl<Args, Ret> std::fmt::Debug for Callback<Args, Ret> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Callback")
			.field("inner", &"<function>")
			.finish()
	}
}
