use std::{error::Error, fs, path::Path};

use clap::{Parser, Subcommand};
use stereo_pipeline::{
    run_compute_depth, run_compute_size, DepthRequest, MeasureOutcome, RigConfig, SizeRequest,
};

/// Stereo click-measurement CLI.
#[derive(Debug, Parser)]
#[command(author, version, about = "Stereo depth and size measurement from click pairs")]
struct Args {
    /// Optional path to a JSON RigConfig. Defaults are used if omitted.
    #[arg(long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Estimate depth from a stereo click pair (JSON DepthRequest file).
    Depth {
        /// Path to the request JSON.
        #[arg(long)]
        input: String,
    },
    /// Measure real-world size at a known depth (JSON SizeRequest file).
    Size {
        /// Path to the request JSON.
        #[arg(long)]
        input: String,
    },
}

fn load_json_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, Box<dyn Error>> {
    let data = fs::read_to_string(path)?;
    let value = serde_json::from_str(&data)?;
    Ok(value)
}

fn load_rig(config_path: Option<&str>) -> Result<RigConfig, Box<dyn Error>> {
    let rig = if let Some(path) = config_path {
        load_json_file::<RigConfig>(Path::new(path))?
    } else {
        RigConfig::default()
    };
    rig.validate()?;
    Ok(rig)
}

/// Run one measurement and serialize the outcome, success or structured
/// error payload alike, as pretty JSON.
fn run_measurement(
    config_path: Option<&str>,
    command: &Command,
) -> Result<String, Box<dyn Error>> {
    let rig = load_rig(config_path)?;

    let json = match command {
        Command::Depth { input } => {
            let req: DepthRequest = load_json_file(Path::new(input))?;
            let outcome = MeasureOutcome::from(run_compute_depth(&rig, &req));
            serde_json::to_string_pretty(&outcome)?
        }
        Command::Size { input } => {
            let req: SizeRequest = load_json_file(Path::new(input))?;
            let outcome = MeasureOutcome::from(run_compute_size(&rig, &req));
            serde_json::to_string_pretty(&outcome)?
        }
    };
    Ok(json)
}

fn main() {
    env_logger::init();
    if let Err(err) = try_main() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let json = run_measurement(args.config.as_deref(), &args.command)?;
    println!("{}", json);
    Ok(())
}
