use crate::image_classifier::error::ImageClassifierError;
use crate::image_classifier::interface::{Classification, ImageClassifier};
use crate::image_classifier::interpreter::impl_tract::InterpreterTract;
use crate::image_classifier::interpreter::interface::Interpreter;
use crate::image_classifier::labels::load_labels;
use crate::image_classifier::marshal::{pack, unpack};
use crate::image_classifier::model::ModelHandle;
use crate::image_classifier::ranker::rank;
use crate::library::logger::interface::Logger;
use image::{imageops::FilterType, DynamicImage};
use std::sync::Arc;
use std::time::Instant;

pub struct InferenceEngine<I: Interpreter> {
    model: ModelHandle<I>,
    labels: Vec<String>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl InferenceEngine<InterpreterTract> {
    pub fn load(
        model_path: &str,
        labels_path: &str,
        thread_count: usize,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, ImageClassifierError> {
        let interpreter = InterpreterTract::load(model_path, thread_count, logger.clone())?;
        let labels = load_labels(labels_path)?;
        Self::new(interpreter, labels, logger)
    }
}

impl<I: Interpreter> InferenceEngine<I> {
    pub fn new(
        interpreter: I,
        labels: Vec<String>,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, ImageClassifierError> {
        let model = ModelHandle::new(interpreter, labels.len())?;
        let logger = logger.with_namespace("image_classifier");
        let shape = model.shape();
        let _ = logger.info(&format!(
            "ready: {}x{} input, {} labels",
            shape.width, shape.height, shape.class_count
        ));

        Ok(Self {
            model,
            labels,
            logger,
        })
    }

    #[cfg(test)]
    pub fn model(&self) -> &ModelHandle<I> {
        &self.model
    }

    /// Same as `classify`, but hands per-call failures back instead of
    /// logging them.
    pub fn try_run(
        &mut self,
        image: &DynamicImage,
        threshold: f32,
    ) -> Result<Vec<Classification>, ImageClassifierError> {
        let shape = self.model.shape();
        let resized = image.resize_exact(shape.width, shape.height, FilterType::Triangle);

        let interpreter = self.model.interpreter_mut();
        pack(&resized, shape.channels, interpreter.input_tensor_mut()?)?;

        let started = Instant::now();
        interpreter.invoke()?;
        let duration = started.elapsed();
        let _ = self
            .logger
            .info(&format!("inference duration: {} ms", duration.as_millis()));

        let probabilities = unpack(self.model.interpreter().output_tensor()?, self.labels.len())?;

        Ok(rank(&probabilities, &self.labels, threshold))
    }
}

impl<I: Interpreter> ImageClassifier for InferenceEngine<I> {
    fn classify(&mut self, image: &DynamicImage, threshold: f32) -> Vec<Classification> {
        match self.try_run(image, threshold) {
            Ok(results) => results,
            Err(e) => {
                debug_assert!(!e.is_fatal());
                let _ = self.logger.error(&e.to_string());
                Vec::new()
            }
        }
    }
}
