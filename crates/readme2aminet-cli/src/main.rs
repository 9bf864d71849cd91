//! readme2aminet: CLI tool to convert README.md files to Aminet readme format

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use readme2aminet_core::{PackageInfo, generate_readme};

// Exactly two positionals; help and version flags are disabled so any
// other invocation is a usage error.
#[derive(Parser, Debug)]
#[command(name = "readme2aminet")]
#[command(about = "Convert a README.md file to Aminet readme format")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Input README.md file
    readme: PathBuf,

    /// Version string for the header
    #[arg(value_name = "VERSION", allow_hyphen_values = true)]
    package_version: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let readme = generate_readme(&cli.readme, &cli.package_version, &PackageInfo::default())?;
    println!("{}", readme);

    Ok(())
}
