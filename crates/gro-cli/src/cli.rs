use clap::{Args, Parser};
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "input.gro";
pub const DEFAULT_OUTPUT: &str = "output.gro";

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "gropp - Read, edit, and write GROMACS .gro coordinate files.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Path to the input .gro file. Used only when OUTPUT is also given;
    /// otherwise 'input.gro' is read.
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Path for the output .gro file. Used only when INPUT is also given;
    /// otherwise 'output.gro' is written.
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub edit: EditArgs,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Edits to apply between reading and writing.
///
/// Flag edits run after the steps of the plan file, in the order the fields are
/// declared here.
#[derive(Args, Debug, Default, Clone)]
pub struct EditArgs {
    /// Path to an edit plan in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub plan: Option<PathBuf>,

    /// Override the title line of the output file.
    #[arg(short, long, value_name = "TEXT")]
    pub title: Option<String>,

    /// Rename atoms. Can be used multiple times. Example: --rename-atoms OW=O
    #[arg(long, value_name = "OLD=NEW")]
    pub rename_atoms: Vec<String>,

    /// Rename residues. Can be used multiple times. Example: --rename-residues WAT=SOL
    #[arg(long, value_name = "OLD=NEW")]
    pub rename_residues: Vec<String>,

    /// Remove atoms with these names (comma-separated).
    #[arg(long, value_name = "NAMES", value_delimiter = ',')]
    pub remove_atoms: Vec<String>,

    /// Remove residues with these names (comma-separated).
    #[arg(long, value_name = "NAMES", value_delimiter = ',')]
    pub remove_residues: Vec<String>,

    /// Move residues with these names to the front, in the given order (comma-separated).
    #[arg(short, long, value_name = "NAMES", value_delimiter = ',')]
    pub sort_residues: Vec<String>,

    /// Renumber atoms from 1 and residues by contiguous runs.
    #[arg(short, long)]
    pub renumber: bool,
}

impl Cli {
    /// Returns the input and output paths.
    ///
    /// The positional paths are honored only as a pair; with none or just one of them,
    /// both fall back to the defaults.
    pub fn io_paths(&self) -> (PathBuf, PathBuf) {
        match (&self.input, &self.output) {
            (Some(input), Some(output)) => (input.clone(), output.clone()),
            _ => (PathBuf::from(DEFAULT_INPUT), PathBuf::from(DEFAULT_OUTPUT)),
        }
    }

    /// Returns `true` if exactly one positional path was given and is being ignored.
    pub fn has_unpaired_path(&self) -> bool {
        self.input.is_some() != self.output.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_positionals_are_used() {
        let cli = Cli::parse_from(["gropp", "in.gro", "out.gro"]);
        assert_eq!(
            cli.io_paths(),
            (PathBuf::from("in.gro"), PathBuf::from("out.gro"))
        );
        assert!(!cli.has_unpaired_path());
    }

    #[test]
    fn no_positionals_use_defaults() {
        let cli = Cli::parse_from(["gropp"]);
        assert_eq!(
            cli.io_paths(),
            (PathBuf::from(DEFAULT_INPUT), PathBuf::from(DEFAULT_OUTPUT))
        );
    }

    #[test]
    fn single_positional_falls_back_to_defaults() {
        let cli = Cli::parse_from(["gropp", "only.gro"]);
        assert_eq!(
            cli.io_paths(),
            (PathBuf::from(DEFAULT_INPUT), PathBuf::from(DEFAULT_OUTPUT))
        );
        assert!(cli.has_unpaired_path());
    }

    #[test]
    fn edit_flags_are_parsed() {
        let cli = Cli::parse_from([
            "gropp",
            "in.gro",
            "out.gro",
            "--sort-residues",
            "CL,SOL",
            "--rename-residues",
            "WAT=SOL",
            "--rename-residues",
            "CLA=CL",
            "--remove-atoms",
            "MW",
            "--renumber",
            "-vv",
        ]);

        assert_eq!(cli.edit.sort_residues, vec!["CL", "SOL"]);
        assert_eq!(cli.edit.rename_residues, vec!["WAT=SOL", "CLA=CL"]);
        assert_eq!(cli.edit.remove_atoms, vec!["MW"]);
        assert!(cli.edit.renumber);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["gropp", "-q", "-v"]);
        assert!(result.is_err());
    }
}
