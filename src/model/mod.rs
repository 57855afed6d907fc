//! Domain model types (pure).
//!
//! All types in this module are pure data; I/O lives in `collection`.

pub mod error;
pub mod key_action;
pub mod notification;
pub mod request;

// Re-export for convenience
pub use error::{AppError, CollectionError, CreateRejection};
pub use key_action::KeyAction;
pub use notification::{Notification, Notifications, Severity};
pub use request::{Header, HttpMethod, NewRequestData, QueryParam, RequestBody, RequestFile};
