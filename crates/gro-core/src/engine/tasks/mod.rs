//! Batch edit operations on a `GroSystem`.
//!
//! Each submodule implements one family of edits. All of them are built from the
//! collection primitives, and all of them keep untouched atoms in their original
//! relative order.

pub mod copy;
pub mod remove;
pub mod rename;
pub mod renumber;
pub mod sort;
