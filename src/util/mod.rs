//! Presentation helpers shared across card components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure functions only: string shaping, date wording and the status palette.
//! Keeping them out of the components lets them be tested without a DOM.

pub mod dates;
pub mod initials;
pub mod notes;
pub mod status_style;
