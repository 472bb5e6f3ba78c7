use std::io;
use std::path::PathBuf;

use media::{Camera, CameraConfig, DisplayWindow};
use viewer::config::ViewerConfig;
use viewer::preview::{self, PreviewOutcome, PreviewSettings, StopReason};

fn main() {
    // Load configuration
    let (config, config_source) = load_config();

    // Initialize logger
    let logger = initialize_logger(&config);
    logger.info("Grayscale viewer starting...");
    match config_source {
        Some(path) => logger.info(&format!("Configuration loaded from: {}", path.display())),
        None => logger.info("No configuration file found, using defaults"),
    }

    run_viewer(&config, &logger);

    logger.info("Grayscale viewer finished");
    if let Err(e) = logger.flush() {
        eprintln!("Failed to flush log: {}", e);
    }
}

/// Loads `viewer.conf` if present, otherwise the defaults
///
/// Also returns the path the configuration came from, if any.
fn load_config() -> (ViewerConfig, Option<PathBuf>) {
    match ViewerConfig::load() {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    }
}

/// Initializes the main logger from configuration
fn initialize_logger(config: &ViewerConfig) -> logging::Logger {
    match logging::Logger::with_component(
        config.log_path.clone(),
        config.log_level,
        "Main".to_string(),
        config.log_console,
    ) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!(
                "Failed to create logger at {}: {}",
                config.log_path.display(),
                e
            );
            std::process::exit(1);
        }
    }
}

/// Opens the camera and runs the preview until it stops
fn run_viewer(config: &ViewerConfig, logger: &logging::Logger) {
    let window = match DisplayWindow::new(&config.window_title, logger.for_component("Display")) {
        Ok(window) => window,
        Err(e) => {
            logger.error(&format!("Cannot prepare window: {}", e));
            eprintln!("{}", e);
            return;
        }
    };

    let camera_config = match CameraConfig::new(config.device_id) {
        Ok(camera_config) => camera_config,
        Err(e) => {
            logger.error(&format!("Invalid camera configuration: {}", e));
            eprintln!("{}", e);
            return;
        }
    };
    let camera_logger = logger.for_component("Camera");

    let outcome = preview::run_preview(
        || Camera::new(camera_config, camera_logger),
        window,
        PreviewSettings::from(config),
        logger,
        &mut io::stdout(),
    );

    match outcome {
        PreviewOutcome::AcquisitionFailed(e) => {
            logger.error(&format!("Camera {} could not be opened: {}", config.device_id, e));
        }
        PreviewOutcome::Finished(summary) => {
            let message = format!(
                "Preview finished: {} frame(s) displayed, {}",
                summary.frames_displayed, summary.reason
            );
            match summary.reason {
                StopReason::UserQuit => logger.info(&message),
                _ => logger.warn(&message),
            }
        }
    }
}
