use super::*;
use time::macros::datetime;

fn customer(status: CustomerStatus) -> Customer {
    Customer {
        id: "c-1".to_owned(),
        name: "Jane Doe".to_owned(),
        email: "jane@example.com".to_owned(),
        phone_number: "555-0100".to_owned(),
        status,
        category: None,
        notes: Some("first note\nsecond note".to_owned()),
        last_contacted: None,
        created_at: datetime!(2024-03-05 15:07 UTC),
    }
}

fn committed(status: CustomerStatus, note: Option<&str>) -> StatusChange {
    StatusChange::Committed(StatusUpdate::new("c-1", status, note))
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn new_state_mirrors_customer_status() {
    let c = customer(CustomerStatus::Cold);
    let state = CustomerCardState::new(&c);
    assert_eq!(state.selected_status, CustomerStatus::Cold);
    assert_eq!(state.note_editor, NoteEditor::Closed);
    assert!(!state.edit_dialog_open);
    assert_eq!(state.draft(), "");
}

// =============================================================
// Status changes
// =============================================================

#[test]
fn status_change_with_editor_closed_commits_immediately() {
    let c = customer(CustomerStatus::Neutral);
    let mut state = CustomerCardState::new(&c);

    let change = state.select_status(&c, CustomerStatus::Hot);

    assert_eq!(change, committed(CustomerStatus::Hot, None));
    assert_eq!(state.selected_status, CustomerStatus::Hot);
    assert!(!state.is_editing_note());
}

#[test]
fn status_change_to_same_status_still_commits_when_closed() {
    let c = customer(CustomerStatus::Hot);
    let mut state = CustomerCardState::new(&c);
    assert_eq!(state.select_status(&c, CustomerStatus::Hot), committed(CustomerStatus::Hot, None));
}

#[test]
fn status_change_with_blank_draft_commits_and_keeps_editor_open() {
    let c = customer(CustomerStatus::Neutral);
    let mut state = CustomerCardState::new(&c);
    state.open_note_editor();
    state.set_draft("   ");

    let change = state.select_status(&c, CustomerStatus::Cold);

    assert_eq!(change, committed(CustomerStatus::Cold, None));
    assert!(state.is_editing_note());
    assert_eq!(state.draft(), "");
}

#[test]
fn status_change_with_draft_is_staged() {
    let c = customer(CustomerStatus::Neutral);
    let mut state = CustomerCardState::new(&c);
    state.open_note_editor();
    state.set_draft("call back on monday");

    let change = state.select_status(&c, CustomerStatus::Hot);

    assert_eq!(change, StatusChange::Staged);
    assert_eq!(state.selected_status, CustomerStatus::Hot);
    assert_eq!(state.draft(), "call back on monday");
}

// =============================================================
// Save
// =============================================================

#[test]
fn save_commits_staged_status_with_trimmed_note() {
    let c = customer(CustomerStatus::Neutral);
    let mut state = CustomerCardState::new(&c);
    state.open_note_editor();
    state.set_draft("  call back on monday \n");
    state.select_status(&c, CustomerStatus::Hot);

    let update = state.save(&c);

    assert_eq!(update, Some(StatusUpdate::new("c-1", CustomerStatus::Hot, Some("call back on monday"))));
    assert_eq!(update.and_then(|u| u.note).as_deref(), Some("call back on monday"));
    assert!(!state.is_editing_note());
    assert_eq!(state.draft(), "");
}

#[test]
fn save_with_note_and_unchanged_status_commits() {
    let c = customer(CustomerStatus::Cold);
    let mut state = CustomerCardState::new(&c);
    state.open_note_editor();
    state.set_draft("left voicemail");

    let update = state.save(&c);

    assert_eq!(update, Some(StatusUpdate::new("c-1", CustomerStatus::Cold, Some("left voicemail"))));
}

#[test]
fn save_with_blank_draft_and_unchanged_status_is_noop_but_closes() {
    let c = customer(CustomerStatus::Cold);
    let mut state = CustomerCardState::new(&c);
    state.open_note_editor();
    state.set_draft("  ");

    assert_eq!(state.save(&c), None);
    assert!(!state.is_editing_note());
    assert_eq!(state.draft(), "");
}

#[test]
fn save_after_clearing_draft_commits_staged_status_without_note() {
    let c = customer(CustomerStatus::Cold);
    let mut state = CustomerCardState::new(&c);
    state.open_note_editor();
    state.set_draft("temporary");
    assert_eq!(state.select_status(&c, CustomerStatus::Hot), StatusChange::Staged);
    state.set_draft("");

    assert_eq!(state.save(&c), Some(StatusUpdate::new("c-1", CustomerStatus::Hot, None)));
    assert_eq!(state.selected_status, CustomerStatus::Hot);
}

#[test]
fn save_ignores_status_changed_elsewhere_while_editing() {
    let mut c = customer(CustomerStatus::Neutral);
    let mut state = CustomerCardState::new(&c);
    state.open_note_editor();

    // The details dialog moves the customer to Cold while the editor is open.
    c.status = CustomerStatus::Cold;
    assert!(state.sync_customer(&c));
    assert_eq!(state.selected_status, CustomerStatus::Cold);

    assert_eq!(state.save(&c), None);
    assert!(!state.is_editing_note());
    assert_eq!(state.selected_status, CustomerStatus::Cold);
}

#[test]
fn save_ignores_external_change_even_without_sync() {
    let mut c = customer(CustomerStatus::Neutral);
    let mut state = CustomerCardState::new(&c);
    state.open_note_editor();
    c.status = CustomerStatus::Cold;

    assert_eq!(state.save(&c), None);
}

#[test]
fn save_with_editor_closed_does_nothing() {
    let c = customer(CustomerStatus::Neutral);
    let mut state = CustomerCardState::new(&c);
    assert_eq!(state.save(&c), None);
}

// =============================================================
// Cancel
// =============================================================

#[test]
fn cancel_restores_status_and_clears_draft() {
    let c = customer(CustomerStatus::Neutral);
    let mut state = CustomerCardState::new(&c);
    state.open_note_editor();
    state.set_draft("pending note");
    assert_eq!(state.select_status(&c, CustomerStatus::Cold), StatusChange::Staged);

    state.cancel(&c);

    assert_eq!(state.selected_status, CustomerStatus::Neutral);
    assert!(!state.is_editing_note());
    assert_eq!(state.draft(), "");
}

#[test]
fn reopening_after_cancel_starts_with_empty_draft() {
    let c = customer(CustomerStatus::Neutral);
    let mut state = CustomerCardState::new(&c);
    state.open_note_editor();
    state.set_draft("discard me");
    state.cancel(&c);
    state.open_note_editor();
    assert_eq!(state.draft(), "");
}

// =============================================================
// Note editor and latest note
// =============================================================

#[test]
fn open_note_editor_keeps_existing_draft() {
    let c = customer(CustomerStatus::Neutral);
    let mut state = CustomerCardState::new(&c);
    state.open_note_editor();
    state.set_draft("keep");
    state.open_note_editor();
    assert_eq!(state.draft(), "keep");
}

#[test]
fn set_draft_ignored_while_closed() {
    let c = customer(CustomerStatus::Neutral);
    let mut state = CustomerCardState::new(&c);
    state.set_draft("nope");
    assert_eq!(state.note_editor, NoteEditor::Closed);
}

#[test]
fn latest_note_hidden_while_editing() {
    let c = customer(CustomerStatus::Neutral);
    let mut state = CustomerCardState::new(&c);
    assert!(state.shows_latest_note(&c));
    state.open_note_editor();
    assert!(!state.shows_latest_note(&c));
}

#[test]
fn latest_note_hidden_without_notes() {
    let mut c = customer(CustomerStatus::Neutral);
    c.notes = None;
    let state = CustomerCardState::new(&c);
    assert!(!state.shows_latest_note(&c));
    c.notes = Some(String::new());
    assert!(!state.shows_latest_note(&c));
}

// =============================================================
// External changes and edit dialog
// =============================================================

#[test]
fn sync_customer_follows_external_status_when_closed() {
    let mut c = customer(CustomerStatus::Neutral);
    let mut state = CustomerCardState::new(&c);
    c.status = CustomerStatus::Hot;
    assert!(state.sync_customer(&c));
    assert_eq!(state.selected_status, CustomerStatus::Hot);
}

#[test]
fn sync_customer_reports_no_change_when_already_in_step() {
    let c = customer(CustomerStatus::Neutral);
    let mut state = CustomerCardState::new(&c);
    assert!(!state.sync_customer(&c));
}

#[test]
fn sync_customer_follows_external_status_while_editing_without_staged_status() {
    let mut c = customer(CustomerStatus::Neutral);
    let mut state = CustomerCardState::new(&c);
    state.open_note_editor();
    state.set_draft("typing");
    c.status = CustomerStatus::Hot;
    assert!(state.sync_customer(&c));
    assert_eq!(state.selected_status, CustomerStatus::Hot);
    assert_eq!(state.staged_status(), None);
}

#[test]
fn sync_customer_keeps_staged_status_while_editing() {
    let mut c = customer(CustomerStatus::Neutral);
    let mut state = CustomerCardState::new(&c);
    state.open_note_editor();
    state.set_draft("note");
    state.select_status(&c, CustomerStatus::Cold);
    c.status = CustomerStatus::Hot;
    assert!(!state.sync_customer(&c));
    assert_eq!(state.selected_status, CustomerStatus::Cold);
    assert_eq!(state.staged_status(), Some(CustomerStatus::Cold));
}

#[test]
fn edit_dialog_toggles_independently_of_note_editor() {
    let c = customer(CustomerStatus::Neutral);
    let mut state = CustomerCardState::new(&c);
    state.open_note_editor();
    state.open_edit_dialog();
    assert!(state.edit_dialog_open);
    assert!(state.is_editing_note());
    state.set_edit_dialog_open(false);
    assert!(!state.edit_dialog_open);
    state.set_edit_dialog_open(true);
    state.close_edit_dialog();
    assert!(!state.edit_dialog_open);
}

// =============================================================
// Workflow against a customer book
// =============================================================

#[test]
fn details_edit_during_note_editing_survives_blank_save() {
    use crate::model::CustomerPatch;
    use crate::state::customer_book::CustomerBook;

    let mut book = CustomerBook::new(vec![customer(CustomerStatus::Neutral)]);
    let mut state = CustomerCardState::new(&book.customers()[0]);
    state.open_note_editor();

    let patch = CustomerPatch {
        id: "c-1".to_owned(),
        name: "Jane Doe".to_owned(),
        email: "jane@example.com".to_owned(),
        phone_number: "555-0100".to_owned(),
        category: None,
        status: CustomerStatus::Cold,
    };
    let updated = book.apply_patch(patch).unwrap().clone();
    state.sync_customer(&updated);

    assert_eq!(state.save(&updated), None);
    assert_eq!(book.customers()[0].status, CustomerStatus::Cold);
}
