//! Morphosis - quaternion Julia set mesher
//!
//! Samples a 3D slice of a quaternion Julia set on a regular grid and
//! extracts its surface with marching cubes.

use clap::Parser;
use env_logger::Env;

use morphosis::app;
use morphosis::cli::Args;
use morphosis::config::AppConfig;

fn main() {
    let args = Args::parse();

    let (config, config_err) = match AppConfig::load_from(&args.config) {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // RUST_LOG overrides the configured level
    env_logger::Builder::from_env(Env::default().default_filter_or(config.debug.log_level.as_str()))
        .init();
    if let Some(e) = config_err {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting Morphosis");

    if let Err(e) = app::run(&args, &config) {
        log::error!("{}", e);
        std::process::exit(e.exit_code());
    }
}
