//! Form state and validation rules.
//!
//! DESIGN
//! ======
//! Validation is a pure rule set (`validation`) kept apart from the mutable
//! form model (`form`), so both are testable without a DOM.

pub mod form;
pub mod validation;
