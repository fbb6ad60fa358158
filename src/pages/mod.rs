//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! A page owns the data signal and wires the component callbacks to it;
//! rendering details stay in `components`.

pub mod customers;
