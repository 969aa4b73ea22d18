use clap::Parser;
use colored::*;
use directories::{BaseDirs, ProjectDirs};
use std::path::PathBuf;
use unitz::api::{CmdMessage, MessageLevel, UnitzApi};
use unitz::config::UnitzConfig;
use unitz::error::{Result, UnitzError};
use unitz::model::UnitRequest;
use unitz::store::fs::FileStore;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config()?;
    let unit_dir = resolve_unit_dir(&config)?;

    // Defaults are resolved here, once; nothing downstream reads the
    // environment.
    let description = cli
        .description
        .unwrap_or_else(|| config.default_description.clone());
    let user = cli.user.unwrap_or_else(whoami::username);

    let request = UnitRequest::resolve(
        cli.name,
        &cli.working_dir,
        cli.command,
        description,
        user,
        cli.timer,
    )?;

    let mut api = UnitzApi::new(FileStore::new(unit_dir));
    let result = api.generate(&request)?;
    print_messages(&result.messages);
    Ok(())
}

fn load_config() -> Result<UnitzConfig> {
    match ProjectDirs::from("com", "unitz", "unitz") {
        Some(dirs) => UnitzConfig::load(dirs.config_dir()),
        None => Ok(UnitzConfig::default()),
    }
}

/// Where unit files go: the `UNITZ_UNIT_DIR` override wins, then the
/// configured directory, then `~/.config/systemd/user`.
fn resolve_unit_dir(config: &UnitzConfig) -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("UNITZ_UNIT_DIR") {
        return Ok(PathBuf::from(dir));
    }
    if let Some(dir) = &config.unit_dir {
        return Ok(dir.clone());
    }
    let base = BaseDirs::new()
        .ok_or_else(|| UnitzError::Store("Could not determine home directory".to_string()))?;
    Ok(base
        .home_dir()
        .join(".config")
        .join("systemd")
        .join("user"))
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
