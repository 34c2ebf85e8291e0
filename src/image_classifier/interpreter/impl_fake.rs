use crate::image_classifier::error::ImageClassifierError;
use crate::image_classifier::interpreter::interface::{
    ElementType, Interpreter, TensorData, TensorDataMut,
};

#[derive(Debug, Clone, PartialEq)]
pub enum FakeBuffer {
    UInt8(Vec<u8>),
    Float32(Vec<f32>),
    Unsupported(String),
}

impl FakeBuffer {
    fn zeroed(element_type: &ElementType, len: usize) -> Self {
        match element_type {
            ElementType::UInt8 => FakeBuffer::UInt8(vec![0; len]),
            ElementType::Float32 => FakeBuffer::Float32(vec![0.0; len]),
            ElementType::Unsupported(name) => FakeBuffer::Unsupported(name.clone()),
        }
    }
}

/// In-memory interpreter. `invoke` copies `scripted_output` into the output
/// buffer, or fails when `fail_invoke` is set.
#[derive(Debug, Clone)]
pub struct InterpreterFake {
    pub input_dims: Option<Vec<usize>>,
    pub output_dims: Option<Vec<usize>>,
    pub input: FakeBuffer,
    pub output: FakeBuffer,
    pub scripted_output: FakeBuffer,
    pub fail_invoke: bool,
    pub invoke_count: usize,
}

impl InterpreterFake {
    /// NHWC input and `[1, classes]` output.
    pub fn new(
        height: usize,
        width: usize,
        channels: usize,
        input_type: ElementType,
        scripted_output: FakeBuffer,
    ) -> Self {
        let classes = match &scripted_output {
            FakeBuffer::UInt8(data) => data.len(),
            FakeBuffer::Float32(data) => data.len(),
            FakeBuffer::Unsupported(_) => 0,
        };
        Self {
            input_dims: Some(vec![1, height, width, channels]),
            output_dims: Some(vec![1, classes]),
            input: FakeBuffer::zeroed(&input_type, height * width * channels),
            output: scripted_output.clone(),
            scripted_output,
            fail_invoke: false,
            invoke_count: 0,
        }
    }

    pub fn with_output_dims(mut self, output_dims: Option<Vec<usize>>) -> Self {
        self.output_dims = output_dims;
        self
    }

    pub fn with_input_dims(mut self, input_dims: Option<Vec<usize>>) -> Self {
        self.input_dims = input_dims;
        self
    }
}

impl Interpreter for InterpreterFake {
    fn input_dims(&self) -> Option<Vec<usize>> {
        self.input_dims.clone()
    }

    fn output_dims(&self) -> Option<Vec<usize>> {
        self.output_dims.clone()
    }

    fn input_tensor_mut(&mut self) -> Result<TensorDataMut<'_>, ImageClassifierError> {
        Ok(match &mut self.input {
            FakeBuffer::UInt8(data) => TensorDataMut::UInt8(data),
            FakeBuffer::Float32(data) => TensorDataMut::Float32(data),
            FakeBuffer::Unsupported(name) => TensorDataMut::Unsupported(name.clone()),
        })
    }

    fn output_tensor(&self) -> Result<TensorData<'_>, ImageClassifierError> {
        Ok(match &self.output {
            FakeBuffer::UInt8(data) => TensorData::UInt8(data),
            FakeBuffer::Float32(data) => TensorData::Float32(data),
            FakeBuffer::Unsupported(name) => TensorData::Unsupported(name.clone()),
        })
    }

    fn invoke(&mut self) -> Result<(), ImageClassifierError> {
        self.invoke_count += 1;
        if self.fail_invoke {
            return Err(ImageClassifierError::InferenceInvocationFailed(
                "fake invoke failure".to_string(),
            ));
        }
        self.output = self.scripted_output.clone();
        Ok(())
    }
}
