use crate::display::interface::{Display, DisplayResult};
use crate::image_classifier::interface::Classification;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub enum Shown {
    Results(Vec<Classification>),
    Message(String),
}

#[derive(Debug, Clone, Default)]
pub struct DisplayFake {
    shown: Arc<Mutex<Vec<Shown>>>,
}

impl DisplayFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown(&self) -> Vec<Shown> {
        self.shown.lock().unwrap().clone()
    }
}

impl Display for DisplayFake {
    fn show_results(&mut self, results: &[Classification]) -> DisplayResult {
        self.shown
            .lock()
            .map_err(|e| e.to_string())?
            .push(Shown::Results(results.to_vec()));
        Ok(())
    }

    fn show_message(&mut self, message: &str) -> DisplayResult {
        self.shown
            .lock()
            .map_err(|e| e.to_string())?
            .push(Shown::Message(message.to_string()));
        Ok(())
    }
}
