use clap::{CommandFactory, Parser};
use std::io::Write;
use std::path::Path;

use pixprint::cli::{locate_image, Args};
use pixprint::config::{Config, ConfigError};
use pixprint::{raster, Pipeline};

/// Install the stderr logger. `RUST_LOG` overrides the default `warn` level.
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}

/// Load config file
/// If --config is specified, require the file to exist
/// A config file that exists but does not parse is always fatal
/// Otherwise, fall back to defaults if the default config cannot be read
fn load_config(path: Option<&Path>) -> Config {
    match Config::load(path) {
        Ok(c) => c,
        Err(e) if path.is_some() || matches!(e, ConfigError::ParseError { .. }) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        Err(e) => {
            log::warn!("{}; using default settings", e);
            Config::default()
        }
    }
}

fn run(args: &Args, image_path: &Path) -> pixprint::Result<()> {
    let config = load_config(args.config.as_deref());
    let pipeline = Pipeline::new(args.settings(&config));

    let source = raster::load(image_path)?;
    let prepared = pipeline.prepare(&source)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if !args.quiet {
        writeln!(out, "Displaying: {}", image_path.display())?;
        writeln!(
            out,
            "Resolution: {} x {} (source: {} x {})\n",
            prepared.image.width,
            prepared.image.height,
            prepared.source_width,
            prepared.source_height
        )?;
    }

    pipeline.emit(&prepared, &mut out)?;
    Ok(())
}

fn main() {
    init_logging();

    let args = Args::parse();

    let Some(image_path) = locate_image(args.image.as_deref(), Path::new(".")) else {
        let _ = Args::command().print_help();
        std::process::exit(1);
    };

    if let Err(e) = run(&args, &image_path) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
