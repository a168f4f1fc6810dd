//! UI components.

pub mod contact_form;
pub mod submission_summary;
