/// Error types that can occur while building, running or restoring a layer
///
/// # Variants
///
/// - `DimensionMismatch` - A weight matrix, bias vector or layer shape disagrees with the declared input/hidden sizes
/// - `ShapeMismatch` - The tensor handed to `compute` does not hold the number of elements the layer expects
/// - `DeserializationError` - A persisted record is malformed, carries an unknown tag, or fails validation
/// - `SerializationError` - A layer could not be encoded into a record
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    DimensionMismatch(String),
    ShapeMismatch { expected: usize, actual: usize },
    DeserializationError(String),
    SerializationError(String),
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::DimensionMismatch(msg) => write!(f, "Dimension mismatch: {}", msg),
            ModelError::ShapeMismatch { expected, actual } => write!(
                f,
                "Shape mismatch: expected an input of {} elements, got {}",
                expected, actual
            ),
            ModelError::DeserializationError(msg) => write!(f, "Deserialization error: {}", msg),
            ModelError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

/// Implements the standard error trait for ModelError
impl std::error::Error for ModelError {}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        ModelError::DeserializationError(err.to_string())
    }
}
