//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `customer_card` and `customer_form` are card-local and short-lived;
//! `customer_book` is the in-memory owner the page wires the injected update
//! operations to.

pub mod customer_book;
pub mod customer_card;
pub mod customer_form;
