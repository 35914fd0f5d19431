//! Bindless boilerplate generator CLI

use std::path::Path;

use anyhow::{Context, Result};
use bindless_gen::{OUTPUT_FILE, SyncStatus};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bindless-gen")]
#[command(about = "Generate _Image.get_dimensions overloads for the bindless Slang module", long_about = None)]
#[command(version)]
struct Cli {
    /// Defaults to `generate`
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Regenerate the output file
    Generate,

    /// Check that the output file is in sync with the generator
    Check,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let output = Path::new(OUTPUT_FILE);

    match cli.command.unwrap_or(Commands::Generate) {
        Commands::Generate => {
            println!("Generating {}...", output.display());
            let stats = bindless_gen::write_to(output)
                .with_context(|| format!("Failed to generate {}", output.display()))?;
            println!(
                "✓ Done! {} methods ({} taking a mip level) in {} blocks",
                stats.methods, stats.mip_level_methods, stats.blocks
            );
        }
        Commands::Check => {
            println!("Checking {} is in sync...", output.display());
            match bindless_gen::check_at(output)? {
                SyncStatus::InSync => println!("✓ {} is in sync!", output.display()),
                SyncStatus::OutOfSync => anyhow::bail!(
                    "{} is out of sync. Run 'bindless-gen generate' to regenerate.",
                    output.display()
                ),
                SyncStatus::Missing => anyhow::bail!(
                    "{} does not exist. Run 'bindless-gen generate' to create it.",
                    output.display()
                ),
            }
        }
    }

    Ok(())
}
