#![warn(missing_docs)]
//! Builds a hex lattice and describes one element of it.
//!
//! ```text
//! hex-index --shape hexagon --radius 4 --probe corner 1 0 0
//! ```

use bevy::app::TaskPoolPlugin;
use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use clap::{Parser, ValueEnum};

use hex_index::{
    GridShape, HexIndexConfig, HexIndexPlugin, Hovered, LatticeKind, NoiseSettings, Orientation,
    Tuple,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OrientationArg {
    Pointy,
    Flat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ShapeArg {
    Hexagon,
    Rectangle,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindArg {
    Hex,
    Corner,
    Edge,
}

/// Cube-coordinate hex grid indexer.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    #[arg(long, value_enum, default_value = "pointy")]
    orientation: OrientationArg,
    /// Shoved offset rows (pointy) or columns (flat): 0 or 1.
    #[arg(long, default_value_t = 0)]
    even: i32,
    #[arg(long, value_enum, default_value = "hexagon")]
    shape: ShapeArg,
    #[arg(long, default_value_t = 8)]
    radius: u32,
    #[arg(long, default_value_t = 16)]
    width: i32,
    #[arg(long, default_value_t = 12)]
    height: i32,
    /// Hex size in world units.
    #[arg(long, default_value_t = 4.0)]
    spacing: f32,
    #[arg(long, default_value_t = 42)]
    seed: u32,
    /// Element to describe, e.g. `--probe corner 1 0 0`.
    #[arg(long, num_args = 4, value_names = ["KIND", "X", "Y", "Z"], allow_hyphen_values = true)]
    probe: Option<Vec<String>>,
    /// Log lattice construction details.
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> HexIndexConfig {
        HexIndexConfig {
            orientation: match self.orientation {
                OrientationArg::Pointy => Orientation::PointyTop,
                OrientationArg::Flat => Orientation::FlatTop,
            },
            even: self.even & 1,
            shape: match self.shape {
                ShapeArg::Hexagon => GridShape::Hexagon {
                    radius: self.radius,
                },
                ShapeArg::Rectangle => GridShape::Rectangle {
                    width: self.width,
                    height: self.height,
                },
            },
            spacing: self.spacing,
            noise: NoiseSettings {
                seed: self.seed,
                ..default()
            },
        }
    }

    fn probe(&self) -> Result<Option<(LatticeKind, Tuple)>, String> {
        let Some(values) = &self.probe else {
            return Ok(None);
        };
        let [kind, x, y, z] = values.as_slice() else {
            return Err("--probe takes KIND X Y Z".into());
        };
        let kind = match KindArg::from_str(kind, true)? {
            KindArg::Hex => LatticeKind::Hex,
            KindArg::Corner => LatticeKind::Corner,
            KindArg::Edge => LatticeKind::Edge,
        };
        let coord = |s: &String| {
            s.parse::<i32>()
                .map_err(|e| format!("bad coordinate {s:?}: {e}"))
        };
        Ok(Some((kind, Tuple::cube(coord(x)?, coord(y)?, coord(z)?))))
    }
}

fn main() {
    let args = Args::parse();
    let probe = match args.probe() {
        Ok(probe) => probe,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    };

    let mut app = App::new();
    app.add_plugins((
        TaskPoolPlugin::default(),
        LogPlugin {
            level: if args.verbose {
                Level::DEBUG
            } else {
                Level::INFO
            },
            ..default()
        },
    ))
    .add_plugins(HexIndexPlugin(args.config()))
    .insert_resource(Hovered(probe));

    app.run();
}
