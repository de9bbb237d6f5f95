use crate::cli::EditArgs;
use crate::error::{CliError, Result};
use crate::utils::parser;
use gropp::workflows::edit::{EditPlan, EditStep};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// The contents of a plan file before command-line flags are merged in.
///
/// A plan file has an optional top-level `title` and a list of `[[steps]]` tables,
/// each naming an [`EditStep`] by its kebab-case `op`. No other keys are accepted.
///
/// ```toml
/// title = "Sorted system"
///
/// [[steps]]
/// op = "extract"
/// residue-names = ["CL", "SOL"]
///
/// [[steps]]
/// op = "sort-residues"
/// order = ["CL", "SOL"]
/// ```
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialEditConfig {
    title: Option<String>,
    #[serde(default)]
    steps: Vec<EditStep>,
}

/// The edits to perform, after merging the plan file with command-line flags.
#[derive(Debug, Clone, PartialEq)]
pub struct EditConfig {
    pub title: Option<String>,
    pub plan: EditPlan,
}

impl PartialEditConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading edit plan from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Loads the plan file named in `args`, or starts from an empty plan.
    pub fn load(args: &EditArgs) -> Result<Self> {
        match &args.plan {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Appends the flag edits after the file's steps; `--title` replaces the file's title.
    pub fn merge_with_cli(self, args: &EditArgs) -> Result<EditConfig> {
        let mut steps = self.steps;

        if !args.rename_atoms.is_empty() {
            let (from, to) = parser::parse_rename_pairs(&args.rename_atoms)
                .map_err(|e| CliError::Argument(e.to_string()))?;
            steps.push(EditStep::RenameAtoms { from, to });
        }
        if !args.rename_residues.is_empty() {
            let (from, to) = parser::parse_rename_pairs(&args.rename_residues)
                .map_err(|e| CliError::Argument(e.to_string()))?;
            steps.push(EditStep::RenameResidues { from, to });
        }
        if !args.remove_atoms.is_empty() {
            steps.push(EditStep::RemoveAtoms {
                names: args.remove_atoms.clone(),
            });
        }
        if !args.remove_residues.is_empty() {
            steps.push(EditStep::RemoveResidues {
                names: args.remove_residues.clone(),
            });
        }
        if !args.sort_residues.is_empty() {
            steps.push(EditStep::SortResidues {
                order: args.sort_residues.clone(),
            });
        }
        if args.renumber {
            steps.push(EditStep::Renumber);
        }

        let title = args.title.clone().or(self.title);
        if title.as_deref().is_some_and(|t| t.contains('\n')) {
            return Err(CliError::Config(
                "The title must fit on a single line".to_string(),
            ));
        }

        debug!(steps = steps.len(), "Merged edit plan.");
        Ok(EditConfig {
            title,
            plan: EditPlan::new(steps),
        })
    }
}
