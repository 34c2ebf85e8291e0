use crate::image_classifier::interface::Classification;

pub type DisplayResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

pub trait Display {
    fn show_results(&mut self, results: &[Classification]) -> DisplayResult;
    fn show_message(&mut self, message: &str) -> DisplayResult;
}
