use crate::core::models::system::GroSystem;
use tracing::{info, instrument};

/// Renumbers atoms 1..N in order and residues by adjacent runs.
///
/// A new residue starts whenever an atom's original `(residue_id, residue_name)`
/// differs from that of the atom immediately before it. Runs are found by adjacency
/// alone: two separated runs with the same original pair become two residues.
///
/// # Return
///
/// Returns the number of residues after renumbering.
#[instrument(skip_all, name = "renumber_task")]
pub fn renumber_atoms(system: &mut GroSystem) -> usize {
    let mut previous: Option<(isize, String)> = None;
    let mut residue_counter: isize = 0;

    for (index, atom) in system.atoms_mut().iter_mut().enumerate() {
        atom.atom_id = index as isize + 1;

        let same_residue = previous
            .as_ref()
            .is_some_and(|(id, name)| (*id, name.as_str()) == atom.residue_key());
        if !same_residue {
            residue_counter += 1;
            previous = Some((atom.residue_id, atom.residue_name.clone()));
        }
        atom.residue_id = residue_counter;
    }

    let residues = residue_counter as usize;
    info!(atoms = system.atom_count(), residues, "Renumbered atoms.");
    residues
}
