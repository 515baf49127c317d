use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "rosgen")]
#[command(about = "Compile a desired network state into a RouterOS script")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Compile a desired-state file and print or write the script.
    Compile(CompileArgs),
    /// Compile a desired-state file and report success without emitting it.
    Check(CheckArgs),
    /// List the sections and command counts the state compiles to.
    Sections(SectionsArgs),
}

#[derive(Parser, Debug)]
pub struct CompileArgs {
    /// Desired-state document (.json or .toml).
    pub state: PathBuf,
    /// Write the script here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    pub state: PathBuf,
}

#[derive(Parser, Debug)]
pub struct SectionsArgs {
    pub state: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormat {
    Text,
    Json,
}
