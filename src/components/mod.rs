//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render customer data handed to them as signals and report user
//! intent through callback props. None of them reach for ambient context, so
//! the owner of the data decides what an update means.

pub mod customer_card;
pub mod customer_edit_dialog;
pub mod page_header;
pub mod status_badge;
pub mod status_select;
