use super::atom::AtomRecord;
use thiserror::Error;

/// The title given to systems that were not read from a file.
pub const DEFAULT_TITLE: &str = "Generated by gropp";

/// Errors raised by the index-based primitives of [`GroSystem`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SystemError {
    #[error("Atom index {index} is out of bounds for a system with {len} atoms")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("Title must be a single line")]
    MultiLineTitle,
}

/// Represents the complete contents of one `.gro` frame.
///
/// The atoms are held as a single ordered sequence of records, so the atom count
/// is always the length of that sequence. Order is file order and is preserved by
/// every operation except explicit reordering.
///
/// Two systems never share atom storage: the copy primitives clone the source
/// record into the destination.
#[derive(Debug, Clone, PartialEq)]
pub struct GroSystem {
    /// The free-text title line.
    title: String,
    /// Atom records in file order.
    atoms: Vec<AtomRecord>,
    /// Box vector components in nanometers; 3 for rectangular boxes, 9 for triclinic.
    box_vector: Vec<f64>,
}

impl Default for GroSystem {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            atoms: Vec::new(),
            box_vector: vec![0.0; 3],
        }
    }
}

impl GroSystem {
    /// Creates an empty system with the default title and a zero box.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty system with the given title and a zero box.
    pub fn with_title(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Self::default()
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replaces the title line.
    ///
    /// # Errors
    ///
    /// Returns [`SystemError::MultiLineTitle`] if `title` contains a line break; the
    /// current title is kept.
    pub fn set_title(&mut self, title: &str) -> Result<(), SystemError> {
        if title.contains(['\n', '\r']) {
            return Err(SystemError::MultiLineTitle);
        }
        self.title = title.to_string();
        Ok(())
    }

    pub fn box_vector(&self) -> &[f64] {
        &self.box_vector
    }

    /// Replaces the box vector. Any number of components is accepted.
    pub fn set_box_vector(&mut self, components: Vec<f64>) {
        self.box_vector = components;
    }

    /// Returns the number of atoms in the system.
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Returns all atoms in file order.
    pub fn atoms(&self) -> &[AtomRecord] {
        &self.atoms
    }

    /// Returns all atoms for in-place field edits.
    ///
    /// A slice is handed out rather than the vector itself so callers can change
    /// fields but never the number of atoms.
    pub fn atoms_mut(&mut self) -> &mut [AtomRecord] {
        &mut self.atoms
    }

    /// Retrieves an atom by position.
    ///
    /// # Return
    ///
    /// Returns `Some(&AtomRecord)` if `index` is in range, otherwise `None`.
    pub fn atom(&self, index: usize) -> Option<&AtomRecord> {
        self.atoms.get(index)
    }

    /// Retrieves a mutable reference to an atom by position.
    pub fn atom_mut(&mut self, index: usize) -> Option<&mut AtomRecord> {
        self.atoms.get_mut(index)
    }

    /// Appends an owned atom record to the end of the system.
    pub fn push_atom(&mut self, atom: AtomRecord) {
        self.atoms.push(atom);
    }

    /// Copies the atom at `index` of `source` onto the end of this system.
    ///
    /// # Arguments
    ///
    /// * `source` - The system to copy from.
    /// * `index` - The position of the atom in `source`.
    ///
    /// # Errors
    ///
    /// Returns [`SystemError::IndexOutOfBounds`] if `index` is not a valid position in `source`.
    pub fn append_from(&mut self, source: &GroSystem, index: usize) -> Result<(), SystemError> {
        let atom = source.checked_atom(index)?.clone();
        self.atoms.push(atom);
        Ok(())
    }

    /// Overwrites the atom at `index` with a copy of `source`'s atom at `source_index`.
    ///
    /// The atom count is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`SystemError::IndexOutOfBounds`] if either index is invalid.
    pub fn replace_at(
        &mut self,
        index: usize,
        source: &GroSystem,
        source_index: usize,
    ) -> Result<(), SystemError> {
        let replacement = source.checked_atom(source_index)?.clone();
        let len = self.atoms.len();
        let slot = self
            .atoms
            .get_mut(index)
            .ok_or(SystemError::IndexOutOfBounds { index, len })?;
        *slot = replacement;
        Ok(())
    }

    /// Removes the atom at `index`, shifting every later atom down by one position.
    ///
    /// # Return
    ///
    /// Returns the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`SystemError::IndexOutOfBounds`] if `index` is out of range.
    pub fn remove_at(&mut self, index: usize) -> Result<AtomRecord, SystemError> {
        if index >= self.atoms.len() {
            return Err(SystemError::IndexOutOfBounds {
                index,
                len: self.atoms.len(),
            });
        }
        Ok(self.atoms.remove(index))
    }

    fn checked_atom(&self, index: usize) -> Result<&AtomRecord, SystemError> {
        self.atoms.get(index).ok_or(SystemError::IndexOutOfBounds {
            index,
            len: self.atoms.len(),
        })
    }
}
