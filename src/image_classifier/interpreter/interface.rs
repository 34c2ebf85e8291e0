use crate::image_classifier::error::ImageClassifierError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementType {
    UInt8,
    Float32,
    Unsupported(String),
}

/// Read view of a tensor, tagged with its element type.
#[derive(Debug)]
pub enum TensorData<'a> {
    UInt8(&'a [u8]),
    Float32(&'a [f32]),
    Unsupported(String),
}

/// Write view of a tensor, tagged with its element type.
#[derive(Debug)]
pub enum TensorDataMut<'a> {
    UInt8(&'a mut [u8]),
    Float32(&'a mut [f32]),
    Unsupported(String),
}

/// A loaded model plus the memory of its first input and first output tensor.
///
/// Tensor buffers are overwritten in place by every call, so one interpreter
/// serves one caller at a time.
pub trait Interpreter {
    /// Dims of the first input tensor, `None` if the model has no input.
    fn input_dims(&self) -> Option<Vec<usize>>;

    /// Dims of the first output tensor, `None` if the model has no output.
    fn output_dims(&self) -> Option<Vec<usize>>;

    fn input_tensor_mut(&mut self) -> Result<TensorDataMut<'_>, ImageClassifierError>;

    fn output_tensor(&self) -> Result<TensorData<'_>, ImageClassifierError>;

    fn invoke(&mut self) -> Result<(), ImageClassifierError>;
}
