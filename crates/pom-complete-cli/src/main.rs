//! Complete Maven POM metadata from a per-artifact property file

use std::path::PathBuf;

use clap::Parser;
use pom_complete_cli::config::{DEFAULT_EXTENSION, DEFAULT_WORKING_ROOT};
use pom_complete_cli::{run, RunConfig};
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "pom-complete",
    about = "Add missing name, description, url, licenses, developers and scm to Maven POMs",
    version
)]
struct Cli {
    /// Group id of the artifact, e.g. org.example
    group_id: String,

    /// Artifact id
    artifact_id: String,

    /// Only complete <artifact-id>-<version>.pom of this version
    #[arg(id = "target_version", value_name = "VERSION")]
    target_version: Option<String>,

    /// Root of the Maven repository layout
    #[arg(long, env = "WORKING_DIRECTORY", default_value = DEFAULT_WORKING_ROOT)]
    working_directory: PathBuf,

    /// Property file (default: <group-id>:<artifact-id>.yml)
    #[arg(short, long, value_name = "FILE")]
    properties: Option<PathBuf>,

    /// Extension of the files to complete when no version is given
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    extension: String,

    /// Print what was added to each file as JSON
    #[arg(long)]
    report: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn run_config(&self) -> RunConfig {
        RunConfig {
            working_root: self.working_directory.clone(),
            group_id: self.group_id.clone(),
            artifact_id: self.artifact_id.clone(),
            version: self.target_version.clone(),
            properties: self.properties.clone(),
            extension: self.extension.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    let reports = run(&cli.run_config())?;

    if cli.report {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }
    Ok(())
}
