use crate::cli::Cli;
use crate::config::PartialEditConfig;
use crate::error::{CliError, Result};
use gropp::{
    core::io::{gro::GroFile, traits::CoordinateFile},
    engine::error::EngineError,
    workflows,
};
use tracing::{info, warn};

pub fn run(cli: &Cli) -> Result<()> {
    let (input, output) = cli.io_paths();
    if cli.has_unpaired_path() {
        warn!(
            "Only one path was given; ignoring it and using {:?} -> {:?}.",
            &input, &output
        );
    }

    info!("Merging configuration from plan file and CLI arguments...");
    let config = PartialEditConfig::load(&cli.edit)?.merge_with_cli(&cli.edit)?;

    info!("Loading input structure from {:?}", &input);
    let mut system = GroFile::read_from_path(&input).map_err(|e| CliError::FileParsing {
        path: input.clone(),
        source: e.into(),
    })?;

    let summary = workflows::edit::run(&mut system, &config.plan)?;

    if let Some(title) = &config.title {
        info!("Replacing title with {:?}", title);
        system.set_title(title).map_err(EngineError::from)?;
    }

    info!("Writing {} atoms to {:?}", system.atom_count(), &output);
    GroFile::write_to_path(&system, &output).map_err(|e| CliError::FileParsing {
        path: output.clone(),
        source: e.into(),
    })?;

    println!(
        "Applied {} edit step(s): {} -> {} atoms written to {}",
        summary.steps_applied,
        summary.atoms_before,
        summary.atoms_after,
        output.display()
    );

    Ok(())
}
