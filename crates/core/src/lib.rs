//! Domain logic for the atelier portfolio backend.
//!
//! This crate has zero internal dependencies so the API layer, the
//! repository layer, and any future CLI tooling can all share it.

pub mod contact;
pub mod error;
pub mod ordering;
pub mod project;
pub mod reorder;
pub mod slug;
pub mod types;
