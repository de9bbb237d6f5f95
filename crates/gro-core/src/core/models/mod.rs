//! # Core Models Module
//!
//! Data structures describing the contents of a single `.gro` frame.
//!
//! ## Key Components
//!
//! - [`atom`] - One atom line: residue identity, atom identity, position and velocity
//! - [`system`] - The ordered atom collection plus title and box vector, and the
//!   index-based primitives every edit operation is built from
//!
//! ## Usage
//!
//! ```ignore
//! use gropp::core::models::{atom::AtomRecord, system::GroSystem};
//! use nalgebra::Point3;
//!
//! let mut system = GroSystem::new();
//! system.push_atom(AtomRecord::new(1, "SOL", "OW", 1, Point3::new(0.1, 0.2, 0.3)));
//! assert_eq!(system.atom_count(), 1);
//! ```

pub mod atom;
pub mod system;
