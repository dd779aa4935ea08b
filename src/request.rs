//! Per-request identifiers for log lines
//!
//! A web server calls [`RequestScope::begin`] when it starts handling a request
//! and keeps the guard alive until the response is sent. Every record created on
//! that thread in the meantime carries the id, which formatters render through
//! the `{request_id}` field (see [`REQUEST_FORMAT`](crate::REQUEST_FORMAT)).
//!
//! ```
//! use advanced_logging::request::{current_request_id, RequestScope};
//!
//! {
//!     let scope = RequestScope::begin();
//!     assert_eq!(current_request_id().as_deref(), Some(scope.id()));
//! }
//! assert!(current_request_id().is_none());
//! ```

use std::cell::RefCell;
use uuid::Uuid;

thread_local! {
    static CURRENT_REQUEST_ID: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Fresh random request id (UUID v4, hyphenated)
pub fn generate_request_id() -> String {
    Uuid::new_v4().to_string()
}

/// Request id active on the current thread, if any
pub fn current_request_id() -> Option<String> {
    CURRENT_REQUEST_ID.with(|current| current.borrow().clone())
}

/// RAII guard that makes a request id current for its lifetime.
///
/// Scopes nest: dropping a guard restores whatever id was current before it.
#[must_use = "the request id is cleared as soon as the scope is dropped"]
pub struct RequestScope {
    id: String,
    previous: Option<String>,
}

impl RequestScope {
    /// Enter a scope with a freshly generated id
    pub fn begin() -> Self {
        Self::enter(generate_request_id())
    }

    /// Enter a scope with a caller-supplied id, e.g. from an `X-Request-Id` header
    pub fn enter(id: impl Into<String>) -> Self {
        let id = id.into();
        let previous = CURRENT_REQUEST_ID.with(|current| current.replace(Some(id.clone())));
        Self { id, previous }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Drop for RequestScope {
    fn drop(&mut self) {
        let previous = self.previous.take();
        CURRENT_REQUEST_ID.with(|current| *current.borrow_mut() = previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique_uuids() {
        let a = generate_request_id();
        let b = generate_request_id();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
    }

    #[test]
    fn test_scopes_nest_and_restore() {
        assert!(current_request_id().is_none());
        let outer = RequestScope::enter("outer");
        {
            let _inner = RequestScope::enter("inner");
            assert_eq!(current_request_id().as_deref(), Some("inner"));
        }
        assert_eq!(current_request_id().as_deref(), Some(outer.id()));
        drop(outer);
        assert!(current_request_id().is_none());
    }

    #[test]
    fn test_scope_is_thread_local() {
        let _scope = RequestScope::enter("main-thread");
        let other = std::thread::spawn(current_request_id).join().unwrap();
        assert!(other.is_none());
    }
}
