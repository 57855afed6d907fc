//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI. The only
//! filesystem access is the duplicate-name check of the new-request dialog.

pub mod app_state;
pub mod key_router;
pub mod new_request_modal;
pub mod new_request_modal_handler;
pub mod tab_handler;
pub mod text_input;
pub mod validators;

// Re-export for convenience
pub use app_state::{AppState, FocusPane, RequestTab};
pub use key_router::{route_key, KeyOutcome};
pub use new_request_modal::{
    ButtonId, FieldId, ModalAction, ModalEvent, ModalFocus, ModalStatus, NewRequestModal,
};
pub use new_request_modal_handler::handle_new_request_modal_key;
pub use tab_handler::handle_tab_action;
pub use text_input::TextInput;
pub use validators::{DirectoryValidator, FileNameValidator, ValidationResult, Validator};
