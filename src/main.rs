//! Replays a recorded event script through the editor and writes the last frame as svg.

use std::path::PathBuf;

use anyhow::Context;
use bezedit::draw::svg::SvgBackend;
use bezedit::draw::RenderBackend;
use bezedit::{EditorConfig, EventScript, InteractionController};
use clap::Parser;

const USAGE: &[&str] = &[
    "Left click to add a control point",
    "Right click a control point to highlight it",
    "Once a point is highlighted, press `delete` to remove it",
    "Once a point is highlighted, left click anywhere to move it",
    "Once a point is highlighted, right click anywhere else to un-highlight it",
];

/// bezedit CLI arguments
///
/// Examples:
///   bezedit clicks.toml                       # Print the final frame to stdout
///   bezedit clicks.toml -o frame.svg          # Write it to a file
///   bezedit clicks.toml --samples 100         # Coarser curve
///   bezedit clicks.toml --config editor.toml  # Custom radii and viewport
#[derive(Parser, Debug)]
#[clap(
    name = "bezedit",
    version,
    about = "Replay control point edits and render the resulting Bezier curve"
)]
struct Cli {
    /// Event script to replay (TOML)
    script: PathBuf,

    /// Editor config (TOML), defaults are used if omitted
    #[clap(long, short = 'c')]
    config: Option<PathBuf>,

    /// Override the number of curve points per frame
    #[clap(long, short = 's')]
    samples: Option<usize>,

    /// Write the svg here instead of stdout
    #[clap(long, short = 'o')]
    output: Option<PathBuf>,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => EditorConfig::load_from_file(path)?,
        None => EditorConfig::default(),
    };
    if let Some(samples) = cli.samples {
        config.sample_count = samples;
        config.validate()?;
    }

    let script = EventScript::load(&cli.script)?;
    let settings = config.frame_settings();
    let mut controller = InteractionController::from_config(&config);
    let mut backend = SvgBackend::new(config.viewport);

    for event in script.input_events(&config.viewport) {
        controller.handle(event)?;
        if controller.needs_redraw() {
            backend.draw_frame(&controller.frame(&settings));
        }
    }
    if backend.frames() == 0 {
        backend.draw_frame(&controller.frame(&settings));
    }

    log::info!(
        "Replayed {} events into {} frames, {} control points left",
        script.events.len(),
        backend.frames(),
        controller.store().len()
    );

    match &cli.output {
        Some(path) => std::fs::write(path, backend.document())
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{}", backend.document()),
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    log::info!("bezedit v{}", env!("CARGO_PKG_VERSION"));
    for line in USAGE {
        log::info!("* {}", line);
    }

    run(Cli::parse())
}
