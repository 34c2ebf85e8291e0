use crate::image_classifier::interface::{Classification, ImageClassifier};
use image::DynamicImage;
use std::collections::VecDeque;

/// Answers each call with the next scripted result list, then with nothing.
pub struct ImageClassifierFake {
    scripted: VecDeque<Vec<Classification>>,
}

impl ImageClassifierFake {
    pub fn new(scripted: Vec<Vec<(&str, f32)>>) -> Self {
        Self {
            scripted: scripted
                .into_iter()
                .map(|results| {
                    results
                        .into_iter()
                        .map(|(label, confidence)| Classification {
                            label: label.to_string(),
                            confidence,
                        })
                        .collect()
                })
                .collect(),
        }
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn classify(&mut self, _image: &DynamicImage, _threshold: f32) -> Vec<Classification> {
        self.scripted.pop_front().unwrap_or_default()
    }
}
