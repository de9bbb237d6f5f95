//! # Engine Module
//!
//! Structural edits on a [`GroSystem`](crate::core::models::system::GroSystem).
//!
//! ## Overview
//!
//! Every batch operation here is composed from the collection's single-atom
//! primitives (`append_from`, `replace_at`, `remove_at`) or from in-place field
//! edits, so the atom count can never drift from the stored records. Operations
//! keep the relative order of atoms they do not explicitly reorder.
//!
//! ## Architecture
//!
//! - **Selection** ([`selection`]) - Predicates choosing which atoms an operation touches
//! - **Tasks** ([`tasks`]) - Rename, renumber, copy, remove, and stable residue sort
//! - **Error Handling** ([`error`]) - Engine-specific error types

pub mod error;
pub mod selection;
pub mod tasks;
