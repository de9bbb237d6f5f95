use crate::core::models::atom::AtomRecord;

/// Chooses the atoms a copy or remove operation acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AtomSelector {
    /// Atoms whose residue number and residue name both match.
    Residue { id: isize, name: String },
    /// Atoms whose residue name is in the list.
    ResidueNames(Vec<String>),
    /// Atoms whose atom name is in the list.
    AtomNames(Vec<String>),
    /// Atoms whose atom name is in `atom_names` and whose residue name is in `residue_names`.
    AtomsInResidues {
        atom_names: Vec<String>,
        residue_names: Vec<String>,
    },
}

fn owned<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    names.iter().map(|n| n.as_ref().to_string()).collect()
}

fn contains(names: &[String], name: &str) -> bool {
    names.iter().any(|n| n == name)
}

impl AtomSelector {
    pub fn residue(id: isize, name: &str) -> Self {
        Self::Residue {
            id,
            name: name.to_string(),
        }
    }

    pub fn residue_names<S: AsRef<str>>(names: &[S]) -> Self {
        Self::ResidueNames(owned(names))
    }

    pub fn atom_names<S: AsRef<str>>(names: &[S]) -> Self {
        Self::AtomNames(owned(names))
    }

    pub fn atoms_in_residues<S: AsRef<str>, T: AsRef<str>>(
        atom_names: &[S],
        residue_names: &[T],
    ) -> Self {
        Self::AtomsInResidues {
            atom_names: owned(atom_names),
            residue_names: owned(residue_names),
        }
    }

    /// Returns `true` if `atom` is selected.
    pub fn matches(&self, atom: &AtomRecord) -> bool {
        match self {
            Self::Residue { id, name } => atom.residue_key() == (*id, name.as_str()),
            Self::ResidueNames(names) => contains(names, &atom.residue_name),
            Self::AtomNames(names) => contains(names, &atom.atom_name),
            Self::AtomsInResidues {
                atom_names,
                residue_names,
            } => contains(atom_names, &atom.atom_name) && contains(residue_names, &atom.residue_name),
        }
    }
}
