use super::*;
use ndarray::{Array1, Array2, s};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Elementwise activation layer
pub mod activation_layer;
/// Registry that rebuilds layers from serialized records by kind tag
pub mod layer_registry;
/// Output buffer with a padding border
pub mod layer_output;
/// Shapes and padding every layer is built with
pub mod layer_parameters;
/// Borrowed views of layer parameters
pub mod layer_weight;
/// Padding schemes for tensor borders
pub mod padding_type;
/// Recurrent layers (LSTM) and their gate/state building blocks
pub mod recurrent_layer;
/// Versioned record format for persisting layers
pub mod serialize_weight;

pub use activation_layer::ActivationLayer;
pub use layer_output::LayerOutput;
pub use layer_parameters::{LayerParameters, TensorShape};
pub use padding_type::{PaddingParameters, PaddingScheme};
pub use recurrent_layer::*;

/// Kind discriminant of a concrete layer.
///
/// Written into every serialized record as a plain string tag and resolved back through
/// the [`layer_registry::LayerRegistry`]; a given concrete layer always reports the same
/// variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerType {
    Activation,
    LSTM,
}

impl LayerType {
    /// Returns the tag stored in serialized records.
    pub fn as_str(&self) -> &'static str {
        match self {
            LayerType::Activation => "ActivationLayer",
            LayerType::LSTM => "LSTMLayer",
        }
    }
}

impl std::fmt::Display for LayerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayerType {
    type Err = ModelError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "ActivationLayer" => Ok(LayerType::Activation),
            "LSTMLayer" => Ok(LayerType::LSTM),
            other => Err(ModelError::DeserializationError(format!(
                "unknown layer type tag '{}'",
                other
            ))),
        }
    }
}
