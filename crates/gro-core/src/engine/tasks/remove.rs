use crate::core::models::system::GroSystem;
use crate::engine::error::EngineError;
use crate::engine::selection::AtomSelector;
use tracing::{debug, instrument};

/// Removes every atom chosen by `selector`, keeping the survivors in order.
///
/// Matching positions are collected in one pass first and then removed from the
/// highest position down, so no removal shifts a position still waiting to be removed.
///
/// # Return
///
/// Returns the number of atoms removed.
#[instrument(skip_all, name = "remove_selected_task")]
pub fn remove_selected(
    system: &mut GroSystem,
    selector: &AtomSelector,
) -> Result<usize, EngineError> {
    let doomed: Vec<usize> = system
        .atoms()
        .iter()
        .enumerate()
        .filter(|(_, atom)| selector.matches(atom))
        .map(|(index, _)| index)
        .collect();

    for &index in doomed.iter().rev() {
        system.remove_at(index)?;
    }

    debug!(
        removed = doomed.len(),
        remaining = system.atom_count(),
        ?selector,
        "Removed selected atoms."
    );
    Ok(doomed.len())
}

/// Removes all atoms of the residue identified by number and name.
pub fn remove_residue_entry(
    system: &mut GroSystem,
    residue_id: isize,
    residue_name: &str,
) -> Result<usize, EngineError> {
    remove_selected(system, &AtomSelector::residue(residue_id, residue_name))
}

/// Removes all atoms whose atom name is in `atom_names`.
pub fn remove_atoms<S: AsRef<str>>(
    system: &mut GroSystem,
    atom_names: &[S],
) -> Result<usize, EngineError> {
    remove_selected(system, &AtomSelector::atom_names(atom_names))
}

/// Removes all atoms whose residue name is in `residue_names`.
pub fn remove_residues<S: AsRef<str>>(
    system: &mut GroSystem,
    residue_names: &[S],
) -> Result<usize, EngineError> {
    remove_selected(system, &AtomSelector::residue_names(residue_names))
}
