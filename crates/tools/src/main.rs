use std::env;
use std::fs;
use std::path::PathBuf;

use camera::{ProjectionMode, ViewConfig};
use clap::{Parser, Subcommand};
use foundation::math::GeoPoint;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(author, version, about = "Geodetic offsets and camera view planning")]
struct Args {
    /// JSON view config (falls back to $GEOVIEW_CONFIG, then built-in defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Move a point along a bearing (degrees clockwise from north)
    Offset {
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        alt: f64,
        #[arg(long, allow_negative_numbers = true)]
        bearing: f64,
        #[arg(long)]
        distance: f64,
    },

    /// Convert an Earth-fixed XYZ position (meters) to lng/lat/alt
    Geographic {
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
        #[arg(long, allow_negative_numbers = true)]
        z: f64,
    },

    /// Camera pose framing a target
    Plan {
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        alt: f64,
        /// Distance from camera to target (meters)
        #[arg(long)]
        distance: f64,
        /// Defaults to the configured pitch
        #[arg(long, allow_negative_numbers = true)]
        pitch: Option<f64>,
        /// Defaults to the configured heading
        #[arg(long, allow_negative_numbers = true)]
        heading: Option<f64>,
        /// Projection mode: 2d or 3d
        #[arg(long, default_value = "3d")]
        mode: ProjectionMode,
    },

    /// Plan the 2D/3D switch for a camera at the given view
    Switch {
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long)]
        alt: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        heading: f64,
        #[arg(long, default_value_t = -90.0, allow_negative_numbers = true)]
        pitch: f64,
        /// Current projection mode: 2d or 3d
        #[arg(long)]
        mode: ProjectionMode,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = real_main() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), String> {
    let args = Args::parse();
    let config = load_config(args.config)?;

    let out = match args.command {
        Command::Offset {
            lng,
            lat,
            alt,
            bearing,
            distance,
        } => commands::offset(GeoPoint::new(lng, lat, alt), bearing, distance)?,
        Command::Geographic { x, y, z } => commands::geographic([x, y, z])?,
        Command::Plan {
            lng,
            lat,
            alt,
            distance,
            pitch,
            heading,
            mode,
        } => commands::plan(
            &config,
            GeoPoint::new(lng, lat, alt),
            distance,
            pitch,
            heading,
            mode,
        )?,
        Command::Switch {
            lng,
            lat,
            alt,
            heading,
            pitch,
            mode,
        } => commands::switch(
            &config,
            camera::CameraView {
                lng,
                lat,
                alt,
                heading,
                pitch,
            },
            mode,
        )?,
    };

    println!("{out}");
    Ok(())
}

fn load_config(flag: Option<PathBuf>) -> Result<ViewConfig, String> {
    let path = flag.or_else(|| env::var_os("GEOVIEW_CONFIG").map(PathBuf::from));
    let Some(path) = path else {
        return Ok(ViewConfig::default());
    };
    debug!(?path, "loading view config");
    let text = fs::read_to_string(&path).map_err(|e| format!("read {path:?}: {e}"))?;
    ViewConfig::from_json_str(&text).map_err(|e| format!("{path:?}: {e}"))
}
