use crate::image_classifier::error::ImageClassifierError;
use crate::image_classifier::interpreter::interface::{
    ElementType, Interpreter, TensorData, TensorDataMut,
};
use crate::library::logger::interface::Logger;
use std::sync::Arc;
use tract_core::prelude::*;

/// tract runs a plan on the calling thread.
const SUPPORTED_THREAD_COUNT: usize = 1;

pub struct InterpreterTract {
    plan: TypedRunnableModel<TypedModel>,
    input: Option<Tensor>,
    output: Option<Tensor>,
    output_dims: Option<Vec<usize>>,
}

impl InterpreterTract {
    pub fn load(
        model_path: &str,
        thread_count: usize,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, ImageClassifierError> {
        let logger = logger.with_namespace("interpreter").with_namespace("tract");

        let model = tract_tflite::tflite()
            .model_for_path(model_path)
            .map_err(|e| ImageClassifierError::ModelLoadFailed {
                path: model_path.to_string(),
                reason: e.to_string(),
            })?;

        resolve_thread_count(thread_count, logger.as_ref());

        let model = model.into_optimized().map_err(build_failed)?;

        let input = match model.inputs.first() {
            Some(outlet) => Some(allocate(model.outlet_fact(*outlet).map_err(build_failed)?)?),
            None => None,
        };

        let output_dims = match model.outputs.first() {
            Some(outlet) => model
                .outlet_fact(*outlet)
                .map_err(build_failed)?
                .shape
                .as_concrete()
                .map(|dims| dims.to_vec()),
            None => None,
        };

        let plan = model.into_runnable().map_err(build_failed)?;

        let _ = logger.info(&format!(
            "loaded {} (input {:?}, output {:?})",
            model_path,
            input.as_ref().map(|t| t.shape().to_vec()),
            output_dims
        ));

        Ok(Self {
            plan,
            input,
            output: None,
            output_dims,
        })
    }
}

/// Warns when `requested` cannot be honored and returns the count in use.
fn resolve_thread_count(requested: usize, logger: &dyn Logger) -> usize {
    if requested != SUPPORTED_THREAD_COUNT {
        let _ = logger.warn(&format!(
            "failed to set the number of threads to {}, using {}",
            requested, SUPPORTED_THREAD_COUNT
        ));
    }
    SUPPORTED_THREAD_COUNT
}

fn build_failed(error: TractError) -> ImageClassifierError {
    ImageClassifierError::InterpreterBuildFailed(error.to_string())
}

fn allocate(fact: &TypedFact) -> Result<Tensor, ImageClassifierError> {
    let shape = fact.shape.as_concrete().ok_or_else(|| {
        ImageClassifierError::InterpreterBuildFailed(format!(
            "input shape {:?} is not concrete",
            fact.shape
        ))
    })?;
    Tensor::zero_dt(fact.datum_type, shape).map_err(build_failed)
}

fn element_type_of(datum_type: DatumType) -> ElementType {
    match datum_type.unquantized() {
        DatumType::U8 => ElementType::UInt8,
        DatumType::F32 => ElementType::Float32,
        _ => ElementType::Unsupported(format!("{:?}", datum_type)),
    }
}

fn access_failed(error: TractError) -> ImageClassifierError {
    ImageClassifierError::InferenceInvocationFailed(error.to_string())
}

impl Interpreter for InterpreterTract {
    fn input_dims(&self) -> Option<Vec<usize>> {
        self.input.as_ref().map(|tensor| tensor.shape().to_vec())
    }

    fn output_dims(&self) -> Option<Vec<usize>> {
        self.output_dims.clone()
    }

    fn input_tensor_mut(&mut self) -> Result<TensorDataMut<'_>, ImageClassifierError> {
        let input = self.input.as_mut().ok_or_else(|| {
            ImageClassifierError::InferenceInvocationFailed("model has no input".to_string())
        })?;

        match element_type_of(input.datum_type()) {
            ElementType::UInt8 => Ok(TensorDataMut::UInt8(
                input.as_slice_mut::<u8>().map_err(access_failed)?,
            )),
            ElementType::Float32 => Ok(TensorDataMut::Float32(
                input.as_slice_mut::<f32>().map_err(access_failed)?,
            )),
            ElementType::Unsupported(name) => Ok(TensorDataMut::Unsupported(name)),
        }
    }

    fn output_tensor(&self) -> Result<TensorData<'_>, ImageClassifierError> {
        let output = self.output.as_ref().ok_or_else(|| {
            ImageClassifierError::InferenceInvocationFailed("no output produced yet".to_string())
        })?;

        match element_type_of(output.datum_type()) {
            ElementType::UInt8 => Ok(TensorData::UInt8(
                output.as_slice::<u8>().map_err(access_failed)?,
            )),
            ElementType::Float32 => Ok(TensorData::Float32(
                output.as_slice::<f32>().map_err(access_failed)?,
            )),
            ElementType::Unsupported(name) => Ok(TensorData::Unsupported(name)),
        }
    }

    fn invoke(&mut self) -> Result<(), ImageClassifierError> {
        let input = self.input.as_ref().ok_or_else(|| {
            ImageClassifierError::InferenceInvocationFailed("model has no input".to_string())
        })?;

        let mut outputs = self
            .plan
            .run(tvec!(input.clone().into_tvalue()))
            .map_err(|e| ImageClassifierError::InferenceInvocationFailed(e.to_string()))?;

        if outputs.is_empty() {
            return Err(ImageClassifierError::InferenceInvocationFailed(
                "model produced no output".to_string(),
            ));
        }

        self.output = Some(outputs.remove(0).into_tensor());
        Ok(())
    }
}
