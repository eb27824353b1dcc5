use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::seq::SliceRandom;
use raylib::prelude::*;

use rotator::carousel::engine::CarouselEngine;
use rotator::carousel::stage::Stage;
use rotator::constants::*;
use rotator::engine::Engine;
use rotator::texture_loader::load_sorted_image_paths;
use rotator::{FrameScheduler, Operation, Rotator, Settings, SettingsOverride};

/// Rotates the images of each directory through its own carousel.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Image directories, one rotator each
    #[arg(required = true)]
    image_directories: Vec<PathBuf>,

    /// Time each slide stays in view, in milliseconds
    #[arg(long)]
    slide_duration_ms: Option<u64>,

    /// Gap after each slide, in pixels
    #[arg(long)]
    padding: Option<f32>,

    /// Partial settings as JSON, e.g. '{"slide_duration_ms": 3000}'
    #[arg(long)]
    options: Option<String>,

    /// Show the slides in random order
    #[arg(long)]
    shuffle: bool,

    /// Operations to run after initialization: NAME or NAME:ARG
    #[arg(long = "invoke", value_name = "OPERATION")]
    operations: Vec<Operation>,
}

impl Args {
    /// JSON options first, individual flags on top.
    fn overrides(&self) -> Result<SettingsOverride> {
        let base = match &self.options {
            Some(json) => SettingsOverride::from_json(json).context("Invalid --options")?,
            None => SettingsOverride::default(),
        };
        let flags = SettingsOverride {
            slide_duration_ms: self.slide_duration_ms,
            padding: self.padding,
        };
        Ok(base.layer(&flags))
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let overrides = args.overrides()?;
    let settings = Settings::default().merge(&overrides)?;
    info!(
        "Rotating every {:?} with {}px padding",
        settings.slide_duration, settings.padding
    );

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, CarouselEngine::window_height(args.image_directories.len()))
        .title("Rotator")
        .vsync()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Bind one rotator per directory ---
    let mut engine = CarouselEngine::new();
    for (row, dir) in args.image_directories.iter().enumerate() {
        let mut paths = load_sorted_image_paths(dir)?;
        if args.shuffle {
            paths.shuffle(&mut rand::rng());
        }

        // The stage lays slides out with the same gap the rotator computes with
        let stage = Stage::load(&mut rl, &thread, &paths, CarouselEngine::viewport_for(row), settings.padding);
        let mut rotator = Rotator::new(stage, FrameScheduler::new());
        rotator.initialize(&overrides)?;

        for op in &args.operations {
            rotator
                .invoke(op.clone())
                .with_context(|| format!("Failed to run {} on {}", op.name(), dir.display()))?;
        }

        info!("{}: {} slides", dir.display(), rotator.slide_count());
        engine.push(rotator);
    }

    info!("Bound {} rotators", engine.len());

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        engine.handle_input(&rl);
        engine.update(dt);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        engine.draw(&mut d);
    }

    Ok(())
}
