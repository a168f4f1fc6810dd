//! Top-level pages.

pub mod contact;
