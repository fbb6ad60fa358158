//! Local interaction state of one customer card.
//!
//! DESIGN
//! ======
//! The card never mutates a customer. Every transition that should reach the
//! data owner returns the `StatusUpdate` to send, and the component forwards
//! it to the injected callback. That keeps the "commit now vs. stage until
//! Save" policy in one testable place:
//!
//! - editor closed, or open with a blank draft: a status change commits
//!   immediately;
//! - editor open with a non-blank draft: the status is staged until
//!   `save` or `cancel`.

#[cfg(test)]
#[path = "customer_card_test.rs"]
mod customer_card_test;

use crate::model::{Customer, CustomerStatus, StatusUpdate};

/// Note editor below the status selector.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum NoteEditor {
    /// Summary view; the latest note is visible.
    #[default]
    Closed,
    /// Editing a new note. `draft` is the textarea content; `staged` is a
    /// status picked while the draft had text, held until save or cancel.
    Open {
        draft: String,
        staged: Option<CustomerStatus>,
    },
}

/// Outcome of changing the status selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusChange {
    /// Send this update now.
    Committed(StatusUpdate),
    /// Held locally until the note is saved or cancelled.
    Staged,
}

/// Card-local UI state; dropped with the card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomerCardState {
    /// Value shown in the status selector: the staged status when there is
    /// one, otherwise the customer's status.
    pub selected_status: CustomerStatus,
    pub note_editor: NoteEditor,
    pub edit_dialog_open: bool,
}

impl CustomerCardState {
    pub fn new(customer: &Customer) -> Self {
        Self {
            selected_status: customer.status,
            note_editor: NoteEditor::Closed,
            edit_dialog_open: false,
        }
    }

    pub fn is_editing_note(&self) -> bool {
        matches!(self.note_editor, NoteEditor::Open { .. })
    }

    /// Current draft text; empty when the editor is closed.
    pub fn draft(&self) -> &str {
        match &self.note_editor {
            NoteEditor::Open { draft, .. } => draft,
            NoteEditor::Closed => "",
        }
    }

    /// Status waiting for save or cancel, if any.
    pub fn staged_status(&self) -> Option<CustomerStatus> {
        match &self.note_editor {
            NoteEditor::Open { staged, .. } => *staged,
            NoteEditor::Closed => None,
        }
    }

    /// The latest-note block is shown when notes exist and no note is being
    /// edited.
    pub fn shows_latest_note(&self, customer: &Customer) -> bool {
        customer.notes.as_deref().is_some_and(|n| !n.is_empty()) && !self.is_editing_note()
    }

    /// Apply a selector change.
    pub fn select_status(&mut self, customer: &Customer, status: CustomerStatus) -> StatusChange {
        self.selected_status = status;
        if let NoteEditor::Open { draft, staged } = &mut self.note_editor {
            if has_content(draft) {
                *staged = Some(status);
                return StatusChange::Staged;
            }
            draft.clear();
            *staged = None;
        }
        StatusChange::Committed(StatusUpdate::new(customer.id.as_str(), status, None))
    }

    pub fn open_note_editor(&mut self) {
        if !self.is_editing_note() {
            self.note_editor = NoteEditor::Open {
                draft: String::new(),
                staged: None,
            };
        }
    }

    /// Replace the draft text. Ignored while the editor is closed.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        if let NoteEditor::Open { draft, .. } = &mut self.note_editor {
            *draft = text.into();
        }
    }

    /// "Save Note & Status": commit when there is a note or a staged status
    /// that differs from the customer's, then close the editor either way.
    pub fn save(&mut self, customer: &Customer) -> Option<StatusUpdate> {
        let NoteEditor::Open { draft, staged } = std::mem::take(&mut self.note_editor) else {
            return None;
        };
        let status = staged.unwrap_or(customer.status);
        self.selected_status = status;
        if has_content(&draft) || status != customer.status {
            Some(StatusUpdate::new(customer.id.as_str(), status, Some(&draft)))
        } else {
            None
        }
    }

    /// Discard the draft and any staged status.
    pub fn cancel(&mut self, customer: &Customer) {
        self.note_editor = NoteEditor::Closed;
        self.selected_status = customer.status;
    }

    /// Follow the customer's status unless a status is staged. Returns
    /// whether the selector changed.
    pub fn sync_customer(&mut self, customer: &Customer) -> bool {
        if self.staged_status().is_some() || self.selected_status == customer.status {
            return false;
        }
        self.selected_status = customer.status;
        true
    }

    pub fn open_edit_dialog(&mut self) {
        self.edit_dialog_open = true;
    }

    pub fn close_edit_dialog(&mut self) {
        self.edit_dialog_open = false;
    }

    pub fn set_edit_dialog_open(&mut self, open: bool) {
        self.edit_dialog_open = open;
    }
}

fn has_content(text: &str) -> bool {
    !text.trim().is_empty()
}
