use anyhow::{Context, Result, anyhow, ensure};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use anchormc_host::{HostError, WorldHandle, WorldHost, load_levels};
use anchormc_resolve::{
    Environment, LevelDirectory, WorldCreationDescriptor, list_levels, resolve_level_with,
};

#[derive(Parser)]
#[command(name = "anchormc", about = "Inspect and load persisted Minecraft levels")]
struct Args {
    /// World container directory holding the level folders
    #[arg(short, long, default_value = ".")]
    container: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the levels in the container with their guessed environment
    List,
    /// Resolve one level and print its world-creation descriptor as JSON
    Inspect {
        /// Level directory name inside the container
        level: String,
        /// Override the environment heuristic (normal, nether, the-end, custom)
        #[arg(short, long)]
        environment: Option<String>,
    },
    /// Resolve every enabled level and run it through a dry-run host
    Load,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Command::List => list(&args.container),
        Command::Inspect { level, environment } => {
            inspect(&args.container, &level, environment.as_deref())
        }
        Command::Load => load(&args.container),
    }
}

fn list(container: &Path) -> Result<()> {
    for level in list_levels(container) {
        println!("{} ({})", level.name(), level.environment().name());
    }
    Ok(())
}

fn inspect(container: &Path, name: &str, environment: Option<&str>) -> Result<()> {
    let level = LevelDirectory::new(container.join(name));
    ensure!(
        level.is_level(),
        "{} is not a level directory",
        level.path().display()
    );

    let environment = environment
        .map(|name| Environment::from_name(name).ok_or_else(|| anyhow!("Unknown environment {name}")))
        .transpose()?;

    // inspection should work on vanilla levels too, so accept everything
    let descriptor = resolve_level_with(&level, environment, |_| true)
        .with_context(|| format!("Failed to resolve level {}", level.path().display()))?
        .context("Level was rejected by the load policy")?;

    println!("{}", serde_json::to_string_pretty(&descriptor)?);
    Ok(())
}

fn load(container: &Path) -> Result<()> {
    let loaded = load_levels(container, &DryRunHost);
    println!("Loaded {} level(s)", loaded.len());
    Ok(())
}

/// Stand-in host: accepts every descriptor, creates nothing.
struct DryRunHost;

impl WorldHost for DryRunHost {
    fn create_world(
        &self,
        descriptor: &WorldCreationDescriptor,
    ) -> Result<Option<WorldHandle>, HostError> {
        println!(
            "would create {} as {} ({})",
            descriptor.name,
            descriptor.key,
            descriptor.environment.name()
        );
        Ok(Some(WorldHandle {
            key: descriptor.key.clone(),
            name: descriptor.name.clone(),
        }))
    }

    fn is_world_loaded(&self, _level: &Path) -> bool {
        false
    }
}
