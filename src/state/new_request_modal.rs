//! State machine for the "New request" dialog.
//!
//! The dialog collects a title, optional file name, optional description and
//! a directory, then either closes with a [`NewRequestData`] or closes empty
//! on cancel. Framework-style event wiring is replaced by [`ModalEvent`]
//! values routed through a single [`NewRequestModal::dispatch`] match.
//!
//! # States
//! - `Open`: accepting input (initial)
//! - `Closed(Some(data))`: user confirmed and validation passed
//! - `Closed(None)`: user cancelled
//!
//! Rejected creates leave the dialog open and surface a [`CreateRejection`].

use tracing::debug;

use crate::collection::{generate_request_filename, request_file_exists, ParentNode, FILE_SUFFIX};
use crate::model::{CreateRejection, NewRequestData};
use crate::state::text_input::TextInput;
use crate::state::validators::{DirectoryValidator, FileNameValidator};

/// Identity of an editable field, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    /// Request title; every change regenerates the file name.
    Title,
    /// File name stem, without the suffix.
    FileName,
    /// Multi-line description.
    Description,
    /// Directory relative to the collection root.
    Directory,
}

/// Identity of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonId {
    /// The "Create" button.
    Create,
}

/// What currently holds focus inside the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalFocus {
    /// An input field.
    Field(FieldId),
    /// A button.
    Button(ButtonId),
}

/// Tab order of the dialog.
const FOCUS_ORDER: [ModalFocus; 5] = [
    ModalFocus::Field(FieldId::Title),
    ModalFocus::Field(FieldId::FileName),
    ModalFocus::Field(FieldId::Description),
    ModalFocus::Field(FieldId::Directory),
    ModalFocus::Button(ButtonId::Create),
];

/// Bound actions the dialog responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    /// Close without a result.
    Cancel,
    /// Attempt to create the request.
    Create,
    /// Focus the next field or button.
    FocusNext,
    /// Focus the previous field or button.
    FocusPrevious,
}

/// Events delivered to the dialog, tagged with their source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    /// A field's value changed.
    Changed(FieldId),
    /// Enter was pressed in a single-line field.
    Submitted(FieldId),
    /// A button was activated.
    Pressed(ButtonId),
    /// A bound action fired.
    Action(ModalAction),
}

/// Lifecycle of the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalStatus {
    /// Accepting input.
    Open,
    /// Closed with the confirmed data, or `None` when cancelled.
    Closed(Option<NewRequestData>),
}

/// The new-request dialog.
#[derive(Debug, Clone)]
pub struct NewRequestModal {
    title: TextInput,
    file_name: TextInput,
    description: TextInput,
    directory: TextInput,
    /// Slug of the current title; fallback for blank title and file name.
    generated_file_name: String,
    parent: ParentNode,
    focus: ModalFocus,
    status: ModalStatus,
}

impl NewRequestModal {
    /// Open the dialog with the title field focused.
    ///
    /// The file-name placeholder shows the slug of `initial_title`; its value
    /// starts blank, which falls back to that same slug on create.
    pub fn new(
        initial_directory: impl Into<String>,
        initial_title: impl Into<String>,
        initial_description: impl Into<String>,
        parent: ParentNode,
    ) -> Self {
        let title = TextInput::new(initial_title, "Enter a title");
        let generated_file_name = generate_request_filename(title.value());
        let file_name = TextInput::new("", generated_file_name.clone())
            .with_validator(&FileNameValidator)
            .with_valid_empty(true);

        Self {
            title,
            file_name,
            description: TextInput::multiline(initial_description),
            directory: TextInput::new(initial_directory, "Enter a directory")
                .with_validator(&DirectoryValidator),
            generated_file_name,
            parent,
            focus: ModalFocus::Field(FieldId::Title),
            status: ModalStatus::Open,
        }
    }

    /// Route an event to its handler.
    ///
    /// # Errors
    /// Returns the rejection when a create attempt fails validation. The
    /// dialog stays open in that case.
    pub fn dispatch(&mut self, event: ModalEvent) -> Result<(), CreateRejection> {
        if !self.is_open() {
            return Ok(());
        }

        match event {
            ModalEvent::Changed(FieldId::Title) => self.on_title_changed(),
            ModalEvent::Changed(_) => {}
            ModalEvent::Submitted(FieldId::Description) => {}
            ModalEvent::Submitted(_)
            | ModalEvent::Pressed(ButtonId::Create)
            | ModalEvent::Action(ModalAction::Create) => {
                self.validate_and_create()?;
            }
            ModalEvent::Action(ModalAction::Cancel) => self.cancel(),
            ModalEvent::Action(ModalAction::FocusNext) => self.focus_next(),
            ModalEvent::Action(ModalAction::FocusPrevious) => self.focus_previous(),
        }
        Ok(())
    }

    /// Re-derive the generated file name from the title.
    ///
    /// Overwrites the file-name field's value and placeholder and moves its
    /// cursor to the end.
    fn on_title_changed(&mut self) {
        self.generated_file_name = generate_request_filename(self.title.value());
        self.file_name.set_value(self.generated_file_name.clone());
        self.file_name
            .set_placeholder(self.generated_file_name.clone());
        self.file_name.cursor_end();
    }

    /// Run the create flow against the current field contents.
    fn validate_and_create(&mut self) -> Result<NewRequestData, CreateRejection> {
        if !self.directory.is_valid() {
            return Err(CreateRejection::InvalidDirectory);
        }
        if !self.file_name.is_valid() {
            return Err(CreateRejection::InvalidFileName);
        }

        let stem = if self.file_name.is_empty() {
            self.generated_file_name.as_str()
        } else {
            self.file_name.value()
        };
        let file_name = format!("{stem}{FILE_SUFFIX}");

        let title = if self.title.is_empty() {
            self.generated_file_name.clone()
        } else {
            self.title.value().to_string()
        };

        if let ParentNode::WithPath(parent_path) = &self.parent {
            if request_file_exists(&file_name, parent_path) {
                return Err(CreateRejection::DuplicateName);
            }
        }

        let data = NewRequestData {
            title,
            file_name,
            description: self.description.value().to_string(),
            directory: self.directory.value().to_string(),
        };
        debug!(file_name = %data.file_name, directory = %data.directory, "New request confirmed");
        self.status = ModalStatus::Closed(Some(data.clone()));
        Ok(data)
    }

    /// Close without a result. No validation runs.
    pub fn cancel(&mut self) {
        if self.is_open() {
            self.status = ModalStatus::Closed(None);
        }
    }

    fn focus_next(&mut self) {
        let index = self.focus_index();
        self.focus = FOCUS_ORDER[(index + 1) % FOCUS_ORDER.len()];
    }

    fn focus_previous(&mut self) {
        let index = self.focus_index();
        self.focus = FOCUS_ORDER[(index + FOCUS_ORDER.len() - 1) % FOCUS_ORDER.len()];
    }

    fn focus_index(&self) -> usize {
        FOCUS_ORDER
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0)
    }

    /// Current lifecycle state.
    pub fn status(&self) -> &ModalStatus {
        &self.status
    }

    /// True until confirmed or cancelled.
    pub fn is_open(&self) -> bool {
        self.status == ModalStatus::Open
    }

    /// Consume the dialog, returning its result if it has closed.
    ///
    /// `None` while still open; `Some(None)` when cancelled.
    pub fn into_result(self) -> Option<Option<NewRequestData>> {
        match self.status {
            ModalStatus::Open => None,
            ModalStatus::Closed(result) => Some(result),
        }
    }

    /// What holds focus.
    pub fn focus(&self) -> ModalFocus {
        self.focus
    }

    /// Input state of `field`.
    pub fn field(&self, field: FieldId) -> &TextInput {
        match field {
            FieldId::Title => &self.title,
            FieldId::FileName => &self.file_name,
            FieldId::Description => &self.description,
            FieldId::Directory => &self.directory,
        }
    }

    /// Mutable input state of `field`. Callers dispatch `Changed` after edits.
    pub fn field_mut(&mut self, field: FieldId) -> &mut TextInput {
        match field {
            FieldId::Title => &mut self.title,
            FieldId::FileName => &mut self.file_name,
            FieldId::Description => &mut self.description,
            FieldId::Directory => &mut self.directory,
        }
    }

    /// Slug of the current title.
    pub fn generated_file_name(&self) -> &str {
        &self.generated_file_name
    }

    /// Directory the duplicate check looks in.
    pub fn parent(&self) -> &ParentNode {
        &self.parent
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "new_request_modal_tests.rs"]
mod tests;
