use crate::core::models::system::GroSystem;
use crate::engine::error::EngineError;
use crate::engine::selection::AtomSelector;
use tracing::{debug, instrument};

/// Appends a copy of `source`'s atom at `index` to `target`.
///
/// # Errors
///
/// Returns [`EngineError::System`] if `index` is out of range for `source`.
pub fn copy_atom_entry(
    target: &mut GroSystem,
    source: &GroSystem,
    index: usize,
) -> Result<(), EngineError> {
    target.append_from(source, index)?;
    Ok(())
}

/// Appends copies of every atom of `source` chosen by `selector` to `target`,
/// in source order.
///
/// # Return
///
/// Returns the number of atoms copied.
#[instrument(skip_all, name = "copy_selected_task")]
pub fn copy_selected(
    target: &mut GroSystem,
    source: &GroSystem,
    selector: &AtomSelector,
) -> Result<usize, EngineError> {
    let mut copied = 0;
    for (index, atom) in source.atoms().iter().enumerate() {
        if selector.matches(atom) {
            copy_atom_entry(target, source, index)?;
            copied += 1;
        }
    }
    debug!(copied, ?selector, "Copied selected atoms.");
    Ok(copied)
}

/// Copies all atoms of the residue identified by number and name.
pub fn copy_residue_entry(
    target: &mut GroSystem,
    source: &GroSystem,
    residue_id: isize,
    residue_name: &str,
) -> Result<usize, EngineError> {
    copy_selected(
        target,
        source,
        &AtomSelector::residue(residue_id, residue_name),
    )
}

/// Copies all atoms whose atom name is in `atom_names`.
pub fn copy_atoms<S: AsRef<str>>(
    target: &mut GroSystem,
    source: &GroSystem,
    atom_names: &[S],
) -> Result<usize, EngineError> {
    copy_selected(target, source, &AtomSelector::atom_names(atom_names))
}

/// Copies all atoms whose residue name is in `residue_names`.
pub fn copy_residues<S: AsRef<str>>(
    target: &mut GroSystem,
    source: &GroSystem,
    residue_names: &[S],
) -> Result<usize, EngineError> {
    copy_selected(target, source, &AtomSelector::residue_names(residue_names))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::system::SystemError;
    use crate::engine::tasks::fixtures::{atom_names, system_from};
    use nalgebra::Vector3;

    fn create_source() -> GroSystem {
        system_from(&[
            (1, "SOL", "OW"),
            (1, "SOL", "HW1"),
            (2, "CL", "CL"),
            (3, "SOL", "OW"),
            (3, "SOL", "HW1"),
        ])
    }

    #[test]
    fn copy_atom_entry_appends_one_record() {
        let source = create_source();
        let mut target = GroSystem::new();

        copy_atom_entry(&mut target, &source, 2).unwrap();

        assert_eq!(target.atom_count(), 1);
        assert_eq!(target.atom(0), source.atom(2));
    }

    #[test]
    fn copy_atom_entry_propagates_index_error() {
        let source = create_source();
        let mut target = GroSystem::new();

        let result = copy_atom_entry(&mut target, &source, 10);

        assert_eq!(
            result,
            Err(EngineError::System(SystemError::IndexOutOfBounds {
                index: 10,
                len: 5
            }))
        );
    }

    #[test]
    fn copy_atoms_by_name_preserves_source_order_and_values() {
        let mut source = create_source();
        source.atom_mut(3).unwrap().velocity = Vector3::new(0.5, 0.0, -0.5);
        let mut target = GroSystem::new();

        let copied = copy_atoms(&mut target, &source, &["OW"]).unwrap();

        assert_eq!(copied, 2);
        assert_eq!(target.atom_count(), 2);
        assert_eq!(target.atom(0), source.atom(0));
        assert_eq!(target.atom(1), source.atom(3));
        assert_eq!(source.atom_count(), 5);
    }

    #[test]
    fn copied_atoms_are_independent_of_the_source() {
        let source = create_source();
        let mut target = GroSystem::new();
        copy_atoms(&mut target, &source, &["CL"]).unwrap();

        target.atom_mut(0).unwrap().atom_name = "CLA".to_string();

        assert_eq!(source.atom(2).unwrap().atom_name, "CL");
    }

    #[test]
    fn copy_residues_by_name_appends_after_existing_atoms() {
        let source = create_source();
        let mut target = system_from(&[(1, "NA", "NA")]);

        let copied = copy_residues(&mut target, &source, &["CL", "SOL"]).unwrap();

        assert_eq!(copied, 5);
        assert_eq!(atom_names(&target), vec!["NA", "OW", "HW1", "CL", "OW", "HW1"]);
    }

    #[test]
    fn copy_residue_entry_matches_number_and_name() {
        let source = create_source();
        let mut target = GroSystem::new();

        let copied = copy_residue_entry(&mut target, &source, 3, "SOL").unwrap();

        assert_eq!(copied, 2);
        assert!(target.atoms().iter().all(|a| a.residue_id == 3));
    }

    #[test]
    fn copy_with_no_matches_leaves_target_unchanged() {
        let source = create_source();
        let mut target = GroSystem::new();

        let copied = copy_atoms(&mut target, &source, &["ZZ"]).unwrap();

        assert_eq!(copied, 0);
        assert!(target.is_empty());
    }
}
