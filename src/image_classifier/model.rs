use crate::image_classifier::error::ImageClassifierError;
use crate::image_classifier::interpreter::interface::Interpreter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TensorShape {
    pub height: u32,
    pub width: u32,
    /// Interleaved channels per pixel; 1 when the input has no channel dim.
    pub channels: usize,
    pub class_count: usize,
}

/// Owns the interpreter together with the shape it was validated against.
/// Validation happens once here; later calls trust it.
pub struct ModelHandle<I: Interpreter> {
    interpreter: I,
    shape: TensorShape,
}

impl<I: Interpreter> ModelHandle<I> {
    pub fn new(interpreter: I, label_count: usize) -> Result<Self, ImageClassifierError> {
        let input_dims = interpreter.input_dims();
        let channels = image_channels(input_dims.as_deref());
        let (height, width) = required_image_size(input_dims)?;
        let class_count = required_class_count(interpreter.output_dims())?;

        if class_count != label_count {
            return Err(ImageClassifierError::LabelCountMismatch {
                expected: class_count,
                actual: label_count,
            });
        }

        Ok(Self {
            interpreter,
            shape: TensorShape {
                height,
                width,
                channels,
                class_count,
            },
        })
    }

    pub fn shape(&self) -> TensorShape {
        self.shape
    }

    pub fn interpreter(&self) -> &I {
        &self.interpreter
    }

    pub fn interpreter_mut(&mut self) -> &mut I {
        &mut self.interpreter
    }
}

/// Input dims are (batch, height, width, [channels]).
fn required_image_size(dims: Option<Vec<usize>>) -> Result<(u32, u32), ImageClassifierError> {
    let size = match dims.as_deref() {
        Some([_, height, width, ..]) => u32::try_from(*height)
            .ok()
            .zip(u32::try_from(*width).ok()),
        _ => None,
    };
    size.ok_or(ImageClassifierError::InvalidInputShape(dims))
}

fn image_channels(dims: Option<&[usize]>) -> usize {
    match dims {
        Some([_, _, _, channels, ..]) => *channels,
        _ => 1,
    }
}

fn required_class_count(dims: Option<Vec<usize>>) -> Result<usize, ImageClassifierError> {
    let class_count = dims.as_deref().and_then(|dims| dims.last().copied());
    class_count.ok_or(ImageClassifierError::InvalidOutputShape(dims))
}
