use app::App;
use camera::impl_directory::CameraDirectory;
use clap::Parser;
use cli::Args;
use display::impl_console::DisplayConsole;
use image_classifier::engine::InferenceEngine;
use library::logger::{impl_console::LoggerConsole, interface::Logger};
use std::process::ExitCode;
use std::sync::Arc;

mod app;
mod camera;
mod cli;
mod config;
mod display;
mod image_classifier;
mod library;
mod rock_paper_scissors;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = args.config();

    let logger = Arc::new(LoggerConsole::new(config.logger_timezone));

    match run(&args, config, logger.clone()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = logger.error(&format!("error: {}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(
    args: &Args,
    config: config::Config,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let image_classifier = InferenceEngine::load(
        &args.model.to_string_lossy(),
        &args.labels.to_string_lossy(),
        config.thread_count,
        logger.clone(),
    )?;

    let mut app = App::new(
        config,
        logger.clone(),
        Box::new(image_classifier),
        Box::new(DisplayConsole::stdout()),
    );

    match (&args.image, &args.frames) {
        (Some(image_path), _) => {
            let image = image::open(image_path)?;
            app.classify_image(&image)
        }
        (None, Some(frames)) => {
            let mut camera = CameraDirectory::new(frames, logger);
            app.classify_stream(&mut camera)
        }
        (None, None) => Err("no image source given".into()),
    }
}
