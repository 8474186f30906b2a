#![deny(unsafe_code)]
//! CLI binary for the constellation particle field.
//!
//! Subcommands:
//! - `render` — advance a field N frames, write a PNG snapshot
//! - `scene` — print the default scene and the parameter schema

mod error;

use clap::{Parser, Subcommand};
use constellation_core::{Scene, Srgb};
use constellation_field::FieldParams;
use error::CliError;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "constellation", about = "Interactive particle field renderer")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Advance a particle field for N frames and write a PNG snapshot.
    Render {
        /// Canvas width in pixels.
        #[arg(short = 'W', long, default_value_t = 800)]
        width: u32,

        /// Canvas height in pixels.
        #[arg(short = 'H', long, default_value_t = 600)]
        height: u32,

        /// Number of simulation frames before the snapshot.
        #[arg(short, long, default_value_t = 300)]
        frames: usize,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Number of particles (overrides the params object).
        #[arg(short, long)]
        count: Option<usize>,

        /// Fixed cursor position as "x,y". Defaults to the canvas center.
        #[arg(long)]
        cursor: Option<String>,

        /// Background color as a hex string.
        #[arg(long, default_value = "#0a0f21")]
        background: String,

        /// Create the field empty (accessibility override); renders the
        /// background only.
        #[arg(long)]
        reduced_motion: bool,

        /// Output file path.
        #[arg(short, long, default_value = "constellation.png")]
        output: PathBuf,

        /// Field parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,
    },
    /// Print the default scene and the field parameter schema.
    Scene,
}

/// Parses a `"x,y"` cursor argument.
fn parse_cursor(s: &str) -> Result<[f64; 2], CliError> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| CliError::Input(format!("invalid --cursor '{s}': expected \"x,y\"")))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| CliError::Input(format!("invalid --cursor '{s}': {e}")))
    };
    Ok([parse(x)?, parse(y)?])
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Scene => {
            let mut scene = Scene::new(800, 600, 42);
            scene.frames = 300;
            let info = serde_json::json!({
                "scene": scene,
                "schema": FieldParams::schema(),
            });
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Default scene:");
                println!("{}", serde_json::to_string_pretty(&info["scene"])?);
                println!("Parameters:");
                println!("{}", serde_json::to_string_pretty(&info["schema"])?);
            }
        }
        Command::Render {
            width,
            height,
            frames,
            seed,
            count,
            cursor,
            background,
            reduced_motion,
            output,
            params,
        } => {
            let mut params: serde_json::Value = serde_json::from_str(&params)
                .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
            if !params.is_object() {
                return Err(CliError::Input("--params must be a JSON object".into()));
            }
            if let Some(n) = count {
                params["count"] = serde_json::json!(n);
            }
            if reduced_motion {
                params["reduced_motion"] = serde_json::json!(true);
            }

            let background =
                Srgb::from_hex(&background).map_err(|e| CliError::Input(e.to_string()))?;

            let mut scene = Scene::new(width, height, seed);
            scene.frames = frames;
            scene.params = params;
            if let Some(c) = cursor {
                scene.cursor = parse_cursor(&c)?;
            }

            let raster = constellation_render::render_scene(&scene, background)?;
            constellation_render::snapshot::write_png(&raster, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "width": width,
                    "height": height,
                    "frames": frames,
                    "seed": seed,
                    "cursor": scene.cursor,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {width}x{height} field ({frames} frames, seed {seed}) -> {}",
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_cursor_accepts_plain_pair() {
        assert_eq!(parse_cursor("400,300").unwrap(), [400.0, 300.0]);
    }

    #[test]
    fn parse_cursor_accepts_whitespace_and_floats() {
        assert_eq!(parse_cursor(" 12.5 , -3 ").unwrap(), [12.5, -3.0]);
    }

    #[test]
    fn parse_cursor_rejects_missing_comma() {
        assert!(parse_cursor("400 300").is_err());
    }

    #[test]
    fn parse_cursor_rejects_non_numeric() {
        assert!(parse_cursor("x,y").is_err());
        assert!(parse_cursor("400,").is_err());
    }
}
