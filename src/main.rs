/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::{error, info};
use strum::IntoEnumIterator;

use trajectory_lab::config::{Preset, SceneConfig};
use trajectory_lab::svg::SvgDocument;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Built-in scene to draw
    #[arg(long, value_enum, default_value_t = Preset::Heart)]
    preset: Preset,

    /// JSON scene file, used instead of the preset
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write the SVG
    #[arg(long, short, default_value = "time-fixed.svg")]
    output: PathBuf,

    /// Override the scene's iteration count
    #[arg(long)]
    iterations: Option<usize>,

    /// Override the scene's base step
    #[arg(long)]
    step: Option<f64>,

    /// Print the resolved scene as JSON and exit
    #[arg(long)]
    dump_config: bool,

    /// List the built-in scenes and exit
    #[arg(long)]
    list_presets: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(failure) = run(Args::parse()) {
        error!("{failure}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    if args.list_presets {
        for preset in Preset::iter() {
            println!("{:<8} {}", preset.to_string(), preset.description());
        }
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => SceneConfig::load(path)?,
        None => args.preset.scene(),
    };
    if let Some(iterations) = args.iterations {
        config.iterations = iterations;
    }
    if let Some(step) = args.step {
        config.base_step = step;
    }
    if args.dump_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    let mut scene = config.build()?;
    info!("Drawing \"{}\" with {} paths", scene.name, scene.styles.len());
    let mut document = SvgDocument::new(&scene.name, scene.styles.clone());
    scene.composer.run(scene.iterations, &mut document);
    info!("Writing SVG file...");
    document.save(&args.output)?;
    info!("Done!");
    Ok(())
}
