//! Generate command implementation

use colored::Colorize;

use crate::cli::Cli;
use crate::config::{GeneratorConfig, VersionTableFile};
use crate::error::Result;
use crate::generator::Generator;
use crate::output::encode_yaml;
use crate::version;

/// Resolve configuration from parsed arguments
pub fn resolve_config(cli: &Cli) -> Result<GeneratorConfig> {
    let table = match cli.table.as_deref() {
        Some(path) => VersionTableFile::load_from(path)?,
        None => version::builtin_table(),
    };

    Ok(GeneratorConfig::new(cli.out.clone(), table, cli.date))
}

/// Run the generator
pub fn run(cli: &Cli) -> Result<()> {
    let generator = Generator::new(resolve_config(cli)?);

    if cli.stdout {
        let api = generator.build();
        print!("{}", encode_yaml(&api)?);
        return Ok(());
    }

    let summary = generator.run()?;
    log::debug!("{} bytes written", summary.bytes);
    println!(
        "{} Wrote {} versions to {}",
        "✓".green(),
        summary.versions,
        summary.path.display().to_string().cyan()
    );

    Ok(())
}
