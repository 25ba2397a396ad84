use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod commands;
mod config;
mod error;

use config::Config;
use perfil_render::Orientation;

#[derive(Parser)]
#[command(name = "perfil")]
#[command(about = "Perfil - Lithologic and constructive well profile renderer")]
#[command(version)]
#[command(long_about = "
Perfil renders groundwater monitoring-well profiles as depth-scaled SVG
diagrams and assembles print-ready documents with legend, well information
and soil description panels.

Examples:
  perfil template list
  perfil template new standard --out well.json
  perfil render --input well.json --out profile.svg
  perfil print --input well.json --format a3
  perfil validate --input well.json
  perfil info --input well.json
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the composite profile drawing to an SVG file
    Render {
        /// Well snapshot (JSON)
        #[arg(short, long, required = true)]
        input: PathBuf,

        /// Output SVG file
        #[arg(short, long, required = true)]
        out: PathBuf,
    },

    /// Assemble the print document (profile + side panels) on a page
    Print {
        /// Well snapshot (JSON)
        #[arg(short, long, required = true)]
        input: PathBuf,

        /// Output file; defaults to <wellId>_perfil_litologico_<timestamp>.svg
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Page format (a4, a3)
        #[arg(long)]
        format: Option<String>,

        /// Orientation hint; the assembler still follows the content aspect
        #[arg(long)]
        orientation: Option<OrientationArg>,
    },

    /// Check a snapshot against the profile consistency rules
    Validate {
        /// Well snapshot (JSON)
        #[arg(short, long, required = true)]
        input: PathBuf,
    },

    /// Show a summary of a well snapshot
    Info {
        /// Well snapshot (JSON)
        #[arg(short, long, required = true)]
        input: PathBuf,
    },

    /// Well template commands
    Template {
        #[command(subcommand)]
        action: TemplateCommands,
    },
}

#[derive(Subcommand)]
pub enum TemplateCommands {
    /// List the built-in templates
    List,
    /// Seed a new well snapshot from a template
    New {
        /// Template name (see `perfil template list`)
        name: String,

        /// Output JSON file
        #[arg(short, long, required = true)]
        out: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<OrientationArg> for Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Orientation::Portrait,
            OrientationArg::Landscape => Orientation::Landscape,
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        std::env::set_var("RUST_LOG", "error");
    } else {
        let level = match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };
        std::env::set_var("RUST_LOG", level);
    }

    env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Render { input, out } => {
            commands::render::execute(&config, input, out)?;
        }
        Commands::Print {
            input,
            out,
            format,
            orientation,
        } => {
            commands::print::execute(&config, input, out, format, orientation.map(Into::into))?;
        }
        Commands::Validate { input } => {
            commands::validate::execute(input)?;
        }
        Commands::Info { input } => {
            commands::info::execute(input)?;
        }
        Commands::Template { action } => match action {
            TemplateCommands::List => commands::template::list()?,
            TemplateCommands::New { name, out } => commands::template::new(name, out)?,
        },
    }

    Ok(())
}
