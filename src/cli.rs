use crate::config::Config;
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(about = "Classify an image, or a stream of frames, with a TensorFlow Lite model")]
#[command(group(ArgGroup::new("source").required(true).args(["image", "frames"])))]
pub struct Args {
    /// Model file (.tflite)
    #[arg(short, long)]
    pub model: PathBuf,

    /// Labels file, one label per line
    #[arg(short, long)]
    pub labels: PathBuf,

    /// Classify a single image
    #[arg(short, long)]
    pub image: Option<PathBuf>,

    /// Classify every image in a directory, in file-name order
    #[arg(short, long)]
    pub frames: Option<PathBuf>,

    /// Interpreter threads; anything but a positive integer means 1
    #[arg(short, long, default_value = "1")]
    pub threads: String,

    /// Minimum confidence for a label to be reported
    #[arg(short, long, default_value_t = 0.1)]
    pub confidence_threshold: f32,

    /// Play rock-paper-scissors with the top label
    #[arg(short = 'r', long)]
    pub play_rps: bool,

    /// Seed for the rock-paper-scissors opponent
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause between frames in stream mode, in milliseconds
    #[arg(long, default_value_t = 0)]
    pub frame_interval_ms: u64,
}

impl Args {
    pub fn config(&self) -> Config {
        Config {
            confidence_threshold: self.confidence_threshold,
            thread_count: parse_thread_count(&self.threads),
            frame_interval: std::time::Duration::from_millis(self.frame_interval_ms),
            play_rock_paper_scissors: self.play_rps,
            rock_paper_scissors_seed: self.seed,
            ..Config::default()
        }
    }
}

pub fn parse_thread_count(value: &str) -> usize {
    match value.trim().parse::<usize>() {
        Ok(count) if count > 0 => count,
        _ => 1,
    }
}
