use super::copy::{copy_atom_entry, copy_selected};
use super::remove::remove_selected;
use crate::core::models::system::GroSystem;
use crate::engine::error::EngineError;
use crate::engine::selection::AtomSelector;
use tracing::{debug, info, instrument};

/// Reorders atoms so residues named in `ordered_names` come first, in that order.
///
/// All atoms of the first listed residue name come first, then all atoms of the
/// second, and so on; atoms whose residue name is not listed follow at the end.
/// Within each group atoms keep their original relative order. Repeated names are
/// only honored at their first position. Title and box are left unchanged.
///
/// The new order is assembled in a scratch system and then written back slot by
/// slot into `system`.
#[instrument(skip_all, name = "sort_residues_task")]
pub fn sort_residues<S: AsRef<str>>(
    system: &mut GroSystem,
    ordered_names: &[S],
) -> Result<(), EngineError> {
    let mut names: Vec<String> = Vec::with_capacity(ordered_names.len());
    for name in ordered_names {
        let name = name.as_ref();
        if names.iter().any(|n| n == name) {
            debug!(residue = name, "Ignoring repeated residue name in sort order.");
        } else {
            names.push(name.to_string());
        }
    }

    let mut sorted = GroSystem::with_title(system.title());
    for name in &names {
        let copied = copy_selected(
            &mut sorted,
            system,
            &AtomSelector::ResidueNames(vec![name.clone()]),
        )?;
        debug!(residue = %name, atoms = copied, "Collected residue group.");
    }

    let listed = sorted.atom_count();
    remove_selected(system, &AtomSelector::ResidueNames(names))?;
    for index in 0..system.atom_count() {
        copy_atom_entry(&mut sorted, system, index)?;
    }

    for index in 0..sorted.atom_count() {
        if index < system.atom_count() {
            system.replace_at(index, &sorted, index)?;
        } else {
            system.append_from(&sorted, index)?;
        }
    }

    info!(
        listed,
        unlisted = system.atom_count() - listed,
        "Sorted residues."
    );
    Ok(())
}
