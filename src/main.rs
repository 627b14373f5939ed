use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::{info, warn};

use drawme::app::{App, AppOptions, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use drawme::config::Config;
use drawme::script;

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("DRAWME_GIT_HASH"), ")");

#[derive(Parser, Debug)]
#[command(name = "drawme")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Freehand drawing canvas with undo/redo and PNG export")]
struct Cli {
    /// Replay input events and commands from FILE ('-' reads stdin)
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: i32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: i32,

    /// Use this config file instead of ~/.config/drawme/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write exported images here instead of the configured directory
    #[arg(long, short = 'o', value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Do not share exported images
    #[arg(long, action = ArgAction::SetTrue)]
    no_share: bool,

    /// Do not show desktop notifications
    #[arg(long, action = ArgAction::SetTrue)]
    no_notify: bool,

    /// Write a default config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = match &cli.config {
            Some(path) => path.clone(),
            None => Config::get_config_path()?,
        };
        Config::create_default_file(&path)?;
        println!("Wrote default configuration to {}", path.display());
        return Ok(());
    }

    let Some(script_path) = cli.script.as_ref() else {
        print_usage();
        return Ok(());
    };

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => match Config::load() {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load config: {:#}. Using defaults.", e);
                Config::default()
            }
        },
    };

    let source = read_script(script_path)?;
    let commands = script::parse_script(&source)
        .with_context(|| format!("Invalid script {}", script_path.display()))?;
    info!("Loaded {} command(s)", commands.len());

    let options = AppOptions {
        width: cli.width,
        height: cli.height,
        output_dir: cli.output_dir,
        share: !cli.no_share,
        notify: !cli.no_notify,
    };
    let mut app = App::new(&config, options)?;
    let summary = app.run(commands)?;

    for path in summary.saved_paths() {
        println!("{}", path.display());
    }

    let failures = summary.failures();
    if failures > 0 {
        anyhow::bail!("{} export(s) failed", failures);
    }
    Ok(())
}

fn read_script(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read script from stdin")?;
        return Ok(source);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))
}

fn print_usage() {
    println!("drawme: freehand drawing canvas");
    println!();
    println!("Usage:");
    println!("  drawme --script FILE    Replay a drawing script");
    println!("  drawme --script -       Read the script from stdin");
    println!("  drawme --init-config    Write a default config file");
    println!("  drawme --help           Show help");
    println!();
    println!("Script commands (one per line, '#' starts a comment):");
    println!("  down X Y | move X Y | up X Y    Touch input");
    println!("  color SPEC                      Brush color (name, #RRGGBB, #AARRGGBB)");
    println!("  brush SIZE | preset INDEX       Brush size in dp, or a configured preset");
    println!("  undo | redo | clear             Edit history");
    println!("  resize W H                      Change the canvas size");
    println!("  export                          Save as PNG and share");
}
