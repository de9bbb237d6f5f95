//! # Core Module
//!
//! This module provides the data model and file I/O for `.gro` coordinate files.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Atom records and the ordered system
//!   that owns them, together with title and box state
//! - **File I/O** ([`io`]) - The fixed-width `.gro` codec and the file trait it implements
//!
//! Nothing in this module keeps hidden state: a `GroSystem` is plain owned data,
//! and the codec is a set of pure conversions.

pub mod io;
pub mod models;
