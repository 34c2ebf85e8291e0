use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub confidence_threshold: f32,
    pub thread_count: usize,
    pub logger_timezone: chrono::FixedOffset,
    pub frame_interval: Duration,
    pub play_rock_paper_scissors: bool,
    pub rock_paper_scissors_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.1,
            thread_count: 1,
            logger_timezone: utc(),
            frame_interval: Duration::ZERO,
            play_rock_paper_scissors: false,
            rock_paper_scissors_seed: None,
        }
    }
}

fn utc() -> chrono::FixedOffset {
    chrono::FixedOffset::east_opt(0).unwrap()
}
