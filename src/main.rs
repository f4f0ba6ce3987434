use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hensurf-icons")]
#[command(about = "Convert the HenSurf logo into platform icon assets")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate the branding directory (PNG size set, .icns, .ico)
    Branding {
        /// Source logo image
        #[arg(long, default_value = "HenSurfLogo.png")]
        source: PathBuf,
        /// Branding output directory (created if absent)
        #[arg(long, default_value = "browser/branding/hensurf")]
        output: PathBuf,
        /// Stem for the bundle files (<stem>.icns, <stem>.ico)
        #[arg(long, default_value = "hensurf")]
        name: String,
    },
    /// Build a macOS .icns bundle from a source image
    Icns {
        /// Source logo image
        source: PathBuf,
        /// Output .icns path
        output: PathBuf,
    },
    /// Build a Windows .ico file from a source image
    Ico {
        /// Source logo image
        source: PathBuf,
        /// Output .ico path
        output: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Branding { source, output, name } => {
            println!("Converting {} to icon assets...", source.display());
            match hensurf_icons::commands::branding::run(&source, &output, &name) {
                Ok(()) => {
                    println!("Icon conversion completed");
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(2);
                }
            }
        }
        Commands::Icns { source, output } => {
            match hensurf_icons::commands::icns_create::run(&source, &output) {
                Ok(_) => {}
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(2);
                }
            }
        }
        Commands::Ico { source, output } => {
            match hensurf_icons::commands::ico_create::run(&source, &output) {
                Ok(()) => {}
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(2);
                }
            }
        }
    }
}
