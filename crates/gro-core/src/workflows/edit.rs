use crate::core::models::system::GroSystem;
use crate::engine::error::EngineError;
use crate::engine::selection::AtomSelector;
use crate::engine::tasks::{copy, remove, rename, renumber, sort};
use serde::Deserialize;
use tracing::{debug, info, instrument};

/// One structural edit.
///
/// Deserializes from a table whose `op` key names the variant in kebab-case, with
/// the fields in kebab-case too, e.g. `op = "sort-residues"` with
/// `order = ["CL", "SOL"]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case", rename_all_fields = "kebab-case")]
pub enum EditStep {
    RenameAtoms { from: Vec<String>, to: Vec<String> },
    RenameResidues { from: Vec<String>, to: Vec<String> },
    Renumber,
    RemoveAtoms { names: Vec<String> },
    RemoveResidues { names: Vec<String> },
    RemoveResidue { id: isize, name: String },
    /// Keeps only the selected atoms. With both lists, an atom must match both.
    Extract {
        #[serde(default)]
        atom_names: Vec<String>,
        #[serde(default)]
        residue_names: Vec<String>,
    },
    SortResidues { order: Vec<String> },
}

/// An ordered list of edit steps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditPlan {
    pub steps: Vec<EditStep>,
}

impl EditPlan {
    pub fn new(steps: Vec<EditStep>) -> Self {
        Self { steps }
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// What an applied plan did to a system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditSummary {
    pub steps_applied: usize,
    pub atoms_before: usize,
    pub atoms_after: usize,
}

/// Applies every step of `plan` to `system`, in order.
///
/// # Errors
///
/// Stops at the first failing step and returns its error. Steps already applied are
/// not rolled back; callers wanting all-or-nothing behavior should run the plan on a
/// clone.
#[instrument(skip_all, name = "edit_workflow")]
pub fn run(system: &mut GroSystem, plan: &EditPlan) -> Result<EditSummary, EngineError> {
    let atoms_before = system.atom_count();
    info!(
        steps = plan.steps.len(),
        atoms = atoms_before,
        "Applying edit plan."
    );

    for (i, step) in plan.steps.iter().enumerate() {
        debug!(step = i + 1, ?step, "Applying edit step.");
        apply_step(system, step)?;
    }

    let summary = EditSummary {
        steps_applied: plan.steps.len(),
        atoms_before,
        atoms_after: system.atom_count(),
    };
    info!(
        atoms_before = summary.atoms_before,
        atoms_after = summary.atoms_after,
        "Edit plan complete."
    );
    Ok(summary)
}

fn apply_step(system: &mut GroSystem, step: &EditStep) -> Result<(), EngineError> {
    match step {
        EditStep::RenameAtoms { from, to } => {
            rename::rename_atoms(system, from, to)?;
        }
        EditStep::RenameResidues { from, to } => {
            rename::rename_residues(system, from, to)?;
        }
        EditStep::Renumber => {
            renumber::renumber_atoms(system);
        }
        EditStep::RemoveAtoms { names } => {
            remove::remove_atoms(system, names)?;
        }
        EditStep::RemoveResidues { names } => {
            remove::remove_residues(system, names)?;
        }
        EditStep::RemoveResidue { id, name } => {
            remove::remove_residue_entry(system, *id, name)?;
        }
        EditStep::Extract {
            atom_names,
            residue_names,
        } => {
            let selector = extract_selector(atom_names, residue_names)?;
            let mut extracted = GroSystem::with_title(system.title());
            extracted.set_box_vector(system.box_vector().to_vec());
            copy::copy_selected(&mut extracted, system, &selector)?;
            *system = extracted;
        }
        EditStep::SortResidues { order } => {
            sort::sort_residues(system, order)?;
        }
    }
    Ok(())
}

fn extract_selector(
    atom_names: &[String],
    residue_names: &[String],
) -> Result<AtomSelector, EngineError> {
    match (atom_names.is_empty(), residue_names.is_empty()) {
        (true, true) => Err(EngineError::EmptySelector),
        (false, true) => Ok(AtomSelector::atom_names(atom_names)),
        (true, false) => Ok(AtomSelector::residue_names(residue_names)),
        (false, false) => Ok(AtomSelector::atoms_in_residues(atom_names, residue_names)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::AtomRecord;
    use nalgebra::Point3;

    fn create_system() -> GroSystem {
        let mut system = GroSystem::with_title("ions in water");
        let rows = [
            (7, "WAT", "O"),
            (7, "WAT", "H1"),
            (8, "CL", "CL"),
            (9, "WAT", "O"),
            (9, "WAT", "H1"),
            (10, "NA", "NA"),
        ];
        for (i, (residue_id, residue_name, atom_name)) in rows.into_iter().enumerate() {
            system.push_atom(AtomRecord::new(
                residue_id,
                residue_name,
                atom_name,
                i as isize + 100,
                Point3::origin(),
            ));
        }
        system.set_box_vector(vec![3.0, 3.0, 3.0]);
        system
    }

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn run_applies_steps_in_order() {
        let mut system = create_system();
        let plan = EditPlan::new(vec![
            EditStep::RenameResidues {
                from: strings(&["WAT"]),
                to: strings(&["SOL"]),
            },
            EditStep::SortResidues {
                order: strings(&["NA", "CL"]),
            },
            EditStep::Renumber,
        ]);

        let summary = run(&mut system, &plan).unwrap();

        assert_eq!(
            summary,
            EditSummary {
                steps_applied: 3,
                atoms_before: 6,
                atoms_after: 6,
            }
        );
        let names: Vec<_> = system
            .atoms()
            .iter()
            .map(|a| a.residue_name.as_str())
            .collect();
        assert_eq!(names, vec!["NA", "CL", "SOL", "SOL", "SOL", "SOL"]);
        let residue_ids: Vec<_> = system.atoms().iter().map(|a| a.residue_id).collect();
        assert_eq!(residue_ids, vec![1, 2, 3, 3, 4, 4]);
        let atom_ids: Vec<_> = system.atoms().iter().map(|a| a.atom_id).collect();
        assert_eq!(atom_ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn extract_keeps_only_selected_atoms_and_box() {
        let mut system = create_system();
        let plan = EditPlan::new(vec![EditStep::Extract {
            atom_names: strings(&["O"]),
            residue_names: strings(&["WAT"]),
        }]);

        let summary = run(&mut system, &plan).unwrap();

        assert_eq!(summary.atoms_after, 2);
        assert!(system.atoms().iter().all(|a| a.atom_name == "O"));
        assert_eq!(system.title(), "ions in water");
        assert_eq!(system.box_vector(), &[3.0, 3.0, 3.0]);
    }

    #[test]
    fn extract_without_names_is_rejected() {
        let mut system = create_system();
        let plan = EditPlan::new(vec![EditStep::Extract {
            atom_names: Vec::new(),
            residue_names: Vec::new(),
        }]);

        assert_eq!(run(&mut system, &plan), Err(EngineError::EmptySelector));
        assert_eq!(system, create_system());
    }

    #[test]
    fn failing_step_stops_the_plan_after_earlier_steps() {
        let mut system = create_system();
        let plan = EditPlan::new(vec![
            EditStep::RemoveAtoms {
                names: strings(&["H1"]),
            },
            EditStep::RenameAtoms {
                from: strings(&["O", "NA"]),
                to: strings(&["OW"]),
            },
            EditStep::Renumber,
        ]);

        let result = run(&mut system, &plan);

        assert!(matches!(
            result,
            Err(EngineError::MismatchedNames { old: 2, new: 1, .. })
        ));
        assert_eq!(system.atom_count(), 4);
        assert_eq!(system.atom(0).unwrap().atom_id, 100);
    }
}
