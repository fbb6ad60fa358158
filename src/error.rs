//! Crate-level error type.
//!
//! ERROR HANDLING
//! ==============
//! Nothing on the card itself can fail. Errors only come from parsing status
//! values and from the in-memory `CustomerBook`; component shells log them
//! and keep rendering.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown customer status: {0}")]
    UnknownStatus(String),

    #[error("customer not found: {0}")]
    UnknownCustomer(String),
}
