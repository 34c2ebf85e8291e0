use crate::camera::interface::Camera;
use crate::config::Config;
use crate::display::interface::Display;
use crate::image_classifier::interface::{Classification, ImageClassifier};
use crate::library::logger::interface::Logger;
use crate::rock_paper_scissors::RockPaperScissors;
use image::DynamicImage;
use std::sync::Arc;

pub type AppResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

pub struct App {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    image_classifier: Box<dyn ImageClassifier>,
    display: Box<dyn Display>,
    rock_paper_scissors: Option<RockPaperScissors>,
}

impl App {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        image_classifier: Box<dyn ImageClassifier>,
        display: Box<dyn Display>,
    ) -> Self {
        let rock_paper_scissors = config
            .play_rock_paper_scissors
            .then(|| RockPaperScissors::new(config.rock_paper_scissors_seed));

        Self {
            logger: logger.with_namespace("app"),
            config,
            image_classifier,
            display,
            rock_paper_scissors,
        }
    }

    /// Fails when nothing clears the threshold, since a single image gives no
    /// second chance.
    pub fn classify_image(&mut self, image: &DynamicImage) -> AppResult<()> {
        let results = self
            .image_classifier
            .classify(image, self.config.confidence_threshold);

        if results.is_empty() {
            return Err("failed to classify image".into());
        }

        self.show(&results)?;
        self.show_stats()?;
        Ok(())
    }

    pub fn classify_stream(&mut self, camera: &mut dyn Camera) -> AppResult<()> {
        camera.start()?;

        let mut frame_count = 0;
        while let Some(frame) = camera.capture_frame()? {
            frame_count += 1;

            let results = self
                .image_classifier
                .classify(&frame, self.config.confidence_threshold);

            if results.is_empty() {
                self.display.show_message("no results")?;
            } else {
                self.show(&results)?;
            }

            if !self.config.frame_interval.is_zero() {
                std::thread::sleep(self.config.frame_interval);
            }
        }

        camera.stop()?;
        self.logger
            .info(&format!("Classified {} frames", frame_count))?;
        self.show_stats()?;
        Ok(())
    }

    fn show(&mut self, results: &[Classification]) -> AppResult<()> {
        self.display.show_results(results)?;

        if let (Some(game), Some(top)) = (self.rock_paper_scissors.as_mut(), results.first()) {
            match game.play(&top.label) {
                Some(round) => self.display.show_message(&round.to_string())?,
                None => self
                    .logger
                    .info(&format!("'{}' is not a hand, no round played", top.label))?,
            }
        }

        Ok(())
    }

    fn show_stats(&mut self) -> AppResult<()> {
        if let Some(game) = &self.rock_paper_scissors {
            self.display.show_message(&game.stats().to_string())?;
        }
        Ok(())
    }
}
