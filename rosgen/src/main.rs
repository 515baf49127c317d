use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;

use rosgen::compile::{compile, compile_document};
use rosgen::state::DesiredState;
use script_doc_core::{format_sections, format_summary};

mod cli;

use cli::{CheckArgs, Cli, Command, CompileArgs, OutputFormat, SectionsArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Compile(args) => run_compile(args),
        Command::Check(args) => run_check(args),
        Command::Sections(args) => run_sections(args),
    }
}

fn run_compile(args: CompileArgs) -> Result<()> {
    let state = load_state(&args.state)?;
    let script = compile(&state)
        .with_context(|| format!("failed to compile {}", args.state.display()))?;

    match &args.output {
        Some(path) => fs::write(path, script)
            .with_context(|| format!("failed to write script {}", path.display()))?,
        None => print!("{script}"),
    }
    Ok(())
}

fn run_check(args: CheckArgs) -> Result<()> {
    let state = load_state(&args.state)?;
    match compile_document(&state) {
        Ok(document) => {
            println!("{} {}", "ok".green(), format_summary(&document));
            Ok(())
        }
        Err(err) => {
            println!("{} {err}", "invalid".red());
            bail!("state does not compile: {err}");
        }
    }
}

fn run_sections(args: SectionsArgs) -> Result<()> {
    let state = load_state(&args.state)?;
    let document = compile_document(&state)
        .with_context(|| format!("failed to compile {}", args.state.display()))?;

    match args.format {
        OutputFormat::Text => {
            println!("{}", format_sections(&document));
            println!("{}", format_summary(&document).cyan());
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&document)?),
    }
    Ok(())
}

/// Load a desired-state document, picking the parser by file extension.
fn load_state(path: &Path) -> Result<DesiredState> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse JSON state {}", path.display())),
        Some("toml") => toml::from_str(&raw)
            .with_context(|| format!("failed to parse TOML state {}", path.display())),
        _ => bail!(
            "unsupported state file extension for {}; use .json or .toml",
            path.display()
        ),
    }
}
