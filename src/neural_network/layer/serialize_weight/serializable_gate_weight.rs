use super::helper_function::{array2_to_vec2, ensure_finite, vec_to_array1, vec2_to_array2};
use crate::error::ModelError;
use crate::neural_network::Element;
use crate::neural_network::layer::layer_weight::LSTMGateWeight;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// Serializable representation of a single gate's weights.
///
/// # Fields
///
/// - `weights` - 2D weight matrix stored as nested vectors, one inner vector per hidden unit
/// - `bias` - Bias vector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializableGateWeight<T> {
    pub weights: Vec<Vec<T>>,
    pub bias: Vec<T>,
}

impl<T: Element> SerializableGateWeight<T> {
    /// Copies the borrowed gate parameters into nested vectors.
    ///
    /// # Errors
    ///
    /// - `ModelError::SerializationError` - If a weight or bias is NaN or infinite, which JSON cannot represent
    pub fn from_gate_weight(weight: &LSTMGateWeight<'_, T>, name: &str) -> Result<Self, ModelError> {
        ensure_finite(weight.weights.iter(), name)?;
        ensure_finite(weight.bias.iter(), name)?;
        Ok(Self {
            weights: array2_to_vec2(weight.weights),
            bias: weight.bias.to_vec(),
        })
    }

    /// Converts back into arrays; `name` identifies the gate in error messages.
    pub fn to_arrays(&self, name: &str) -> Result<(Array2<T>, Array1<T>), ModelError> {
        Ok((vec2_to_array2(&self.weights, name)?, vec_to_array1(&self.bias)))
    }
}
