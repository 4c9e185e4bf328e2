//! fingerbox CLI - finger-joint box generator

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use fingerbox::{init_logging, run_job, BoxOverrides, Config, Outputs, BUILD_DATE, VERSION};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "fingerbox")]
#[command(about = "Parametric finger-joint box generator", long_about = None)]
struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_log: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a box and write the requested outputs
    Generate {
        /// Job file (.toml or .json); defaults to the user job file when present
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[command(flatten)]
        overrides: BoxOverrides,
        /// Write the cut sheet as SVG
        #[arg(long)]
        svg: Option<PathBuf>,
        /// Write a laser G-code program
        #[arg(long)]
        gcode: Option<PathBuf>,
        /// Write the solid panels as binary STL
        #[arg(long)]
        stl: Option<PathBuf>,
        /// Print a JSON report of the derived geometry
        #[arg(long)]
        report: bool,
    },
    /// Write a default job file
    Init {
        /// Target file (default: the user job file)
        file: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let path = match path {
        Some(path) => path,
        None => match Config::default_path() {
            Ok(default) if default.exists() => default,
            _ => {
                debug!("No job file given, using defaults");
                return Ok(Config::default());
            }
        },
    };
    Config::load_from_file(&path).with_context(|| format!("Failed to load {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.json_log)?;
    debug!("fingerbox {} (built {})", VERSION, BUILD_DATE);

    match cli.command {
        Commands::Generate {
            config,
            overrides,
            svg,
            gcode,
            stl,
            report,
        } => {
            let mut config = load_config(config)?;
            overrides.apply(&mut config.box_params);
            let outputs = Outputs {
                svg,
                gcode,
                stl,
                report,
            };
            let outcome = run_job(&config, &outputs)?;
            info!(
                "Generated {} panels, total volume {:.3}",
                outcome.finger_box.len(),
                outcome.finger_box.total_volume()
            );
            if let Some(json) = outcome.report {
                println!("{}", json);
            }
        }
        Commands::Init { file, force } => {
            let path = match file {
                Some(path) => path,
                None => Config::default_path()?,
            };
            if path.exists() && !force {
                bail!("{} already exists (use --force to overwrite)", path.display());
            }
            Config::default().save_to_file(&path)?;
            info!("Wrote default job file to {}", path.display());
        }
    }

    Ok(())
}
