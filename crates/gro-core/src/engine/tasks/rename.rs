use crate::core::models::atom::AtomRecord;
use crate::core::models::system::GroSystem;
use crate::engine::error::EngineError;
use tracing::{info, instrument};

/// Renames every atom whose name appears in `old_names` to the entry of `new_names`
/// at the same position.
///
/// For each atom the first matching entry of `old_names` wins; later entries are not
/// consulted, so renames never chain. Atoms matching no entry are left untouched.
///
/// # Return
///
/// Returns the number of atoms renamed.
///
/// # Errors
///
/// Returns [`EngineError::MismatchedNames`] if the two lists differ in length.
#[instrument(skip_all, name = "rename_atoms_task")]
pub fn rename_atoms<S: AsRef<str>, T: AsRef<str>>(
    system: &mut GroSystem,
    old_names: &[S],
    new_names: &[T],
) -> Result<usize, EngineError> {
    let renamed = rename_field(system, "atoms", old_names, new_names, |atom| {
        &mut atom.atom_name
    })?;
    info!(renamed, "Renamed atoms.");
    Ok(renamed)
}

/// Renames residue names with the same first-match rule as [`rename_atoms`].
///
/// # Errors
///
/// Returns [`EngineError::MismatchedNames`] if the two lists differ in length.
#[instrument(skip_all, name = "rename_residues_task")]
pub fn rename_residues<S: AsRef<str>, T: AsRef<str>>(
    system: &mut GroSystem,
    old_names: &[S],
    new_names: &[T],
) -> Result<usize, EngineError> {
    let renamed = rename_field(system, "residues", old_names, new_names, |atom| {
        &mut atom.residue_name
    })?;
    info!(renamed, "Renamed residues.");
    Ok(renamed)
}

fn rename_field<S: AsRef<str>, T: AsRef<str>>(
    system: &mut GroSystem,
    field: &'static str,
    old_names: &[S],
    new_names: &[T],
    name_of: impl Fn(&mut AtomRecord) -> &mut String,
) -> Result<usize, EngineError> {
    if old_names.len() != new_names.len() {
        return Err(EngineError::MismatchedNames {
            field,
            old: old_names.len(),
            new: new_names.len(),
        });
    }

    let mut renamed = 0;
    for atom in system.atoms_mut() {
        let name = name_of(atom);
        if let Some(pos) = old_names.iter().position(|old| old.as_ref() == name.as_str()) {
            *name = new_names[pos].as_ref().to_string();
            renamed += 1;
        }
    }
    Ok(renamed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tasks::fixtures::{atom_names, residue_names, system_from};

    #[test]
    fn renames_matching_atoms_only() {
        let mut system = system_from(&[(1, "SOL", "OW"), (1, "SOL", "HW1"), (2, "CL", "CL")]);

        let renamed = rename_atoms(&mut system, &["OW"], &["O"]).unwrap();

        assert_eq!(renamed, 1);
        assert_eq!(atom_names(&system), vec!["O", "HW1", "CL"]);
    }

    #[test]
    fn first_matching_rename_wins_and_renames_do_not_chain() {
        let mut system = system_from(&[(1, "SOL", "A"), (1, "SOL", "B")]);

        rename_atoms(&mut system, &["A", "B", "A"], &["B", "C", "Z"]).unwrap();

        assert_eq!(atom_names(&system), vec!["B", "C"]);
    }

    #[test]
    fn renames_residues() {
        let mut system = system_from(&[(1, "WAT", "O"), (2, "WAT", "O"), (3, "CL", "CL")]);

        let renamed = rename_residues(&mut system, &["WAT", "CL"], &["SOL", "CLA"]).unwrap();

        assert_eq!(renamed, 3);
        assert_eq!(residue_names(&system), vec!["SOL", "SOL", "CLA"]);
        assert_eq!(atom_names(&system), vec!["O", "O", "CL"]);
    }

    #[test]
    fn mismatched_lists_are_rejected_without_changes() {
        let mut system = system_from(&[(1, "SOL", "OW")]);

        let result = rename_atoms(&mut system, &["OW", "HW1"], &["O"]);

        assert_eq!(
            result,
            Err(EngineError::MismatchedNames {
                field: "atoms",
                old: 2,
                new: 1
            })
        );
        assert_eq!(atom_names(&system), vec!["OW"]);
    }

    #[test]
    fn renaming_keeps_count_and_order() {
        let mut system = system_from(&[(1, "SOL", "OW"), (2, "NA", "NA"), (3, "SOL", "OW")]);

        rename_residues(&mut system, &["SOL"], &["HOH"]).unwrap();

        assert_eq!(system.atom_count(), 3);
        assert_eq!(residue_names(&system), vec!["HOH", "NA", "HOH"]);
        assert_eq!(system.atom(1).unwrap().atom_id, 2);
    }
}
