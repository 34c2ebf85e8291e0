use image::DynamicImage;

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub confidence: f32,
}

pub trait ImageClassifier {
    /// Ranked classifications at or above `threshold`. A failed call yields an
    /// empty list, same as an image nothing was recognized in.
    fn classify(&mut self, image: &DynamicImage, threshold: f32) -> Vec<Classification>;
}
