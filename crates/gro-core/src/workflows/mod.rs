//! # Workflows Module
//!
//! High-level entry points that drive the engine from data.
//!
//! - **Edit Workflow** ([`edit`]) - Applies an ordered list of edit steps, loadable
//!   from TOML, to a system and reports what changed.

pub mod edit;
