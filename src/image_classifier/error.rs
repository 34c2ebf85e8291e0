use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageClassifierError {
    #[error("failed to load labels from {path:?}: {source}")]
    LabelsUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to load model from {path:?}: {reason}")]
    ModelLoadFailed { path: String, reason: String },

    #[error("failed to build interpreter: {0}")]
    InterpreterBuildFailed(String),

    #[error("input tensor needs at least 3 dims (batch, height, width), got {0:?}")]
    InvalidInputShape(Option<Vec<usize>>),

    #[error("output tensor needs at least 1 dim, got {0:?}")]
    InvalidOutputShape(Option<Vec<usize>>),

    #[error("mismatch between output size ({expected}) and number of labels ({actual})")]
    LabelCountMismatch { expected: usize, actual: usize },

    #[error("tensor type {0} not supported")]
    UnsupportedTensorType(String),

    #[error("input tensor holds {expected} elements but the image has {actual}")]
    TensorSizeMismatch { expected: usize, actual: usize },

    #[error("failed to run inference: {0}")]
    InferenceInvocationFailed(String),
}

impl ImageClassifierError {
    /// Construction-time errors leave the classifier unusable. Everything else
    /// only spoils the current call.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            Self::UnsupportedTensorType(_)
                | Self::TensorSizeMismatch { .. }
                | Self::InferenceInvocationFailed(_)
        )
    }
}
