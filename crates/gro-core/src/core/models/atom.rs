use nalgebra::{Point3, Vector3};

/// Represents one atom line of a `.gro` file.
///
/// An atom is identified by the residue it belongs to (number and name) and by its
/// own name and number. Residue numbers are not globally unique: a residue is a
/// contiguous run of atoms sharing the same `(residue_id, residue_name)` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    /// The residue number as written in columns 1-5.
    pub residue_id: isize,
    /// The residue name (e.g., "SOL", "CL"), without padding.
    pub residue_name: String,
    /// The atom name (e.g., "OW", "HW1"), without padding.
    pub atom_name: String,
    /// The atom number as written in columns 16-20.
    pub atom_id: isize,
    /// The position in nanometers.
    pub position: Point3<f64>,
    /// The velocity in nanometers per picosecond.
    ///
    /// Atoms read from lines without velocity columns carry an exact zero vector;
    /// there is no way to tell that apart from an explicit zero velocity.
    pub velocity: Vector3<f64>,
}

impl AtomRecord {
    /// Creates a new `AtomRecord` at rest.
    ///
    /// # Arguments
    ///
    /// * `residue_id` - The residue number.
    /// * `residue_name` - The residue name.
    /// * `atom_name` - The atom name.
    /// * `atom_id` - The atom number.
    /// * `position` - The coordinates in nanometers.
    pub fn new(
        residue_id: isize,
        residue_name: &str,
        atom_name: &str,
        atom_id: isize,
        position: Point3<f64>,
    ) -> Self {
        Self {
            residue_id,
            residue_name: residue_name.to_string(),
            atom_name: atom_name.to_string(),
            atom_id,
            position,
            velocity: Vector3::zeros(),
        }
    }

    /// Returns the record with its velocity replaced.
    pub fn with_velocity(mut self, velocity: Vector3<f64>) -> Self {
        self.velocity = velocity;
        self
    }

    /// The `(residue_id, residue_name)` pair that, together with adjacency,
    /// defines residue membership.
    pub fn residue_key(&self) -> (isize, &str) {
        (self.residue_id, self.residue_name.as_str())
    }
}
