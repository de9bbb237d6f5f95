//! Provides input/output functionality for `.gro` coordinate files.
//!
//! The [`traits`] module defines the file interface (stream and path based), and
//! [`gro`] implements it for the fixed-width GROMACS layout.

pub mod gro;
pub mod traits;
