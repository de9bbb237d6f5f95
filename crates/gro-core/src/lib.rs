//! # gropp Core Library
//!
//! A library for reading, editing, and writing GROMACS `.gro` coordinate files.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture so that the file format, the
//! structural edits, and the user-facing procedures stay independent of each other.
//!
//! - **[`core`]: The Foundation.** The in-memory atom collection (`GroSystem`) and
//!   the fixed-width codec that converts it to and from `.gro` text.
//!
//! - **[`engine`]: The Edit Operations.** Batch mutations (rename, renumber, copy,
//!   remove, stable residue sort) built exclusively from the collection's
//!   single-atom primitives.
//!
//! - **[`workflows`]: The Public API.** Declarative edit plans that can be loaded
//!   from TOML and applied to a system step by step.

pub mod core;
pub mod engine;
pub mod workflows;
