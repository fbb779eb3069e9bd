use anyhow::Context as _;
use clap::{Parser, Subcommand};
use glam::{Vec2, Vec3};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use voxedit_author::{BrushEditor, cast};
use voxedit_common::{EditorConfig, GridCell};
use voxedit_input::{Action, FrameInput};
use voxedit_render::{DebugTextRenderer, EditorCamera, Renderer, Scene};
use voxedit_tools::EditorInspector;

#[derive(Parser)]
#[command(name = "voxedit-cli", about = "Headless voxel editor tooling")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Editor config file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Resolve a cursor position to a grid cell
    Pick {
        /// Cursor X in pixels
        #[arg(long)]
        x: f32,
        /// Cursor Y in pixels, top-down
        #[arg(long)]
        y: f32,
        #[arg(long, default_value = "1280")]
        width: u32,
        #[arg(long, default_value = "720")]
        height: u32,
        /// Camera position as x,y,z (defaults to the config)
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        position: Option<Vec3>,
        /// Camera yaw in degrees
        #[arg(long, allow_negative_numbers = true)]
        yaw: Option<f32>,
        /// Camera pitch in degrees, clamped to ±89
        #[arg(long, allow_negative_numbers = true)]
        pitch: Option<f32>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Fly the camera for a number of fixed-step frames
    Fly {
        #[arg(short, long, default_value = "60")]
        frames: u32,
        /// Seconds per frame
        #[arg(long, default_value = "0.016")]
        dt: f32,
        /// Held actions, e.g. forward,strafe-right
        #[arg(short, long, value_delimiter = ',')]
        keys: Vec<Action>,
        /// Cursor movement per frame as dx,dy pixels
        #[arg(long, value_parser = parse_vec2, allow_hyphen_values = true)]
        look: Option<Vec2>,
    },
}

fn parse_floats<const N: usize>(s: &str) -> Result<[f32; N], String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != N {
        return Err(format!("expected {N} comma-separated numbers, got `{s}`"));
    }
    let mut out = [0.0; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part
            .trim()
            .parse()
            .map_err(|e| format!("`{part}`: {e}"))?;
    }
    Ok(out)
}

fn parse_vec3(s: &str) -> Result<Vec3, String> {
    parse_floats::<3>(s).map(Vec3::from_array)
}

fn parse_vec2(s: &str) -> Result<Vec2, String> {
    parse_floats::<2>(s).map(Vec2::from_array)
}

#[derive(Serialize)]
struct PickReport {
    cursor: [f32; 2],
    viewport: [u32; 2],
    camera_position: [f32; 3],
    yaw: f32,
    pitch: f32,
    cell: Option<GridCell>,
    miss: Option<String>,
}

fn camera_for(config: &EditorConfig, width: u32, height: u32) -> EditorCamera {
    let mut camera = EditorCamera::from_config(&config.camera, 1.0);
    camera.set_viewport(width, height);
    camera
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let config = EditorConfig::load_or_default(cli.config.as_deref())
        .with_context(|| format!("loading config {:?}", cli.config))?;

    match cli.command {
        Commands::Info => {
            println!("voxedit-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", voxedit_common::crate_info());
            println!("input: {}", voxedit_input::crate_info());
            println!("render: {}", voxedit_render::crate_info());
            println!("author: {}", voxedit_author::crate_info());
            println!("tools: {}", voxedit_tools::crate_info());
            let bounds = config.grid.bounds();
            println!("grid: [{}, {}]", bounds.min, bounds.max);
        }
        Commands::Pick {
            x,
            y,
            width,
            height,
            position,
            yaw,
            pitch,
            json,
        } => {
            let mut camera = camera_for(&config, width, height);
            if let Some(position) = position {
                camera.position = position;
            }
            camera.set_orientation(
                yaw.unwrap_or(camera.yaw()),
                pitch.unwrap_or(camera.pitch()),
            );

            let cursor = Vec2::new(x, y);
            let viewport = Vec2::new(width as f32, height as f32);
            let result = cast(cursor, viewport, &camera, config.grid.bounds());

            if json {
                let report = PickReport {
                    cursor: cursor.to_array(),
                    viewport: [width, height],
                    camera_position: camera.position.to_array(),
                    yaw: camera.yaw(),
                    pitch: camera.pitch(),
                    cell: result.ok(),
                    miss: result.err().map(|miss| miss.to_string()),
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                match result {
                    Ok(cell) => {
                        let world = cell.world_position();
                        println!("Cell {cell} at world ({:.1}, {:.1}, {:.1})", world.x, world.y, world.z);
                    }
                    Err(miss) => println!("No placement: {miss}"),
                }
            }
        }
        Commands::Fly {
            frames,
            dt,
            keys,
            look,
        } => {
            anyhow::ensure!(dt >= 0.0, "dt must not be negative, got {dt}");

            let mut camera = camera_for(&config, 1280, 720);
            let editor = BrushEditor::new(&config.brush)?;
            let mut input = FrameInput::new(Vec2::ZERO).holding(keys.iter().copied());
            let look = look.unwrap_or(Vec2::ZERO);

            tracing::debug!(frames, dt, ?keys, "flying");
            for _ in 0..frames {
                camera.update(dt, &input);
                input.cursor += look;
            }

            let summary = EditorInspector::summary(&camera, &editor, None);
            println!("{}", summary.camera_line());
            println!("{}", summary.orientation_line());

            let scene = Scene {
                camera: &camera,
                bounds: config.grid.bounds(),
                placed: editor.placed(),
                preview: None,
                preview_size: editor.brush().size,
            };
            print!("{}", DebugTextRenderer::new().render(&scene));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_vectors() {
        assert_eq!(parse_vec3("1, 2.5,-3"), Ok(Vec3::new(1.0, 2.5, -3.0)));
        assert_eq!(parse_vec2("4,-1"), Ok(Vec2::new(4.0, -1.0)));
        assert!(parse_vec3("1,2").is_err());
        assert!(parse_vec2("a,b").is_err());
    }

    #[test]
    fn cli_parses_pick_and_fly() {
        let cli = Cli::try_parse_from([
            "voxedit-cli", "pick", "--x", "640", "--y", "360", "--pitch", "-89", "--json",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Pick { pitch: Some(p), json: true, .. } if p == -89.0
        ));

        let cli = Cli::try_parse_from(["voxedit-cli", "fly", "--keys", "forward,right"]).unwrap();
        match cli.command {
            Commands::Fly { keys, frames, .. } => {
                assert_eq!(keys, vec![Action::MoveForward, Action::StrafeRight]);
                assert_eq!(frames, 60);
            }
            _ => panic!("expected fly"),
        }
    }

    #[test]
    fn vectors_may_start_negative() {
        let cli = Cli::try_parse_from([
            "voxedit-cli", "pick", "--x", "1", "--y", "1", "--position", "-1,10,0",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Pick { position: Some(p), .. } if p == Vec3::new(-1.0, 10.0, 0.0)
        ));

        let cli = Cli::try_parse_from(["voxedit-cli", "fly", "--look", "-5,0"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Fly { look: Some(l), .. } if l == Vec2::new(-5.0, 0.0)
        ));
    }

    #[test]
    fn rejects_unknown_key() {
        assert!(Cli::try_parse_from(["voxedit-cli", "fly", "--keys", "jump"]).is_err());
    }
}
