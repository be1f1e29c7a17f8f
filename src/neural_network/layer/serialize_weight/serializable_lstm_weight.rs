use crate::error::ModelError;
use crate::neural_network::Element;
use crate::neural_network::activation::ActivationKind;
use crate::neural_network::layer::layer_weight::LSTMLayerWeight;
use crate::neural_network::layer::recurrent_layer::LSTMParameters;
use crate::neural_network::layer::serialize_weight::SerializableGateWeight;
use serde::{Deserialize, Serialize};

/// Serializable representation of LSTM layer weights.
///
/// # Fields
///
/// - `input` - Weights for the input gate
/// - `forget` - Weights for the forget gate
/// - `candidate` - Weights for the candidate transform
/// - `output` - Weights for the output gate
/// - `activation` - Squashing activation identifier
/// - `recurrent_activation` - Gating activation identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializableLSTMWeight<T> {
    pub input: SerializableGateWeight<T>,
    pub forget: SerializableGateWeight<T>,
    pub candidate: SerializableGateWeight<T>,
    pub output: SerializableGateWeight<T>,
    pub activation: ActivationKind,
    pub recurrent_activation: ActivationKind,
}

impl<T: Element> SerializableLSTMWeight<T> {
    /// Copies borrowed LSTM weights and the activation identifiers into a record body.
    ///
    /// # Errors
    ///
    /// - `ModelError::SerializationError` - If any gate holds a non-finite value
    pub fn from_layer_weight(
        weight: &LSTMLayerWeight<'_, T>,
        activation: ActivationKind,
        recurrent_activation: ActivationKind,
    ) -> Result<Self, ModelError> {
        Ok(Self {
            input: SerializableGateWeight::from_gate_weight(&weight.input, "input")?,
            forget: SerializableGateWeight::from_gate_weight(&weight.forget, "forget")?,
            candidate: SerializableGateWeight::from_gate_weight(&weight.candidate, "candidate")?,
            output: SerializableGateWeight::from_gate_weight(&weight.output, "output")?,
            activation,
            recurrent_activation,
        })
    }

    /// Converts the stored gates back into [`LSTMParameters`].
    ///
    /// Only the nesting is checked here; shapes are checked against the layer sizes when
    /// the layer is built.
    ///
    /// # Errors
    ///
    /// - `ModelError::DeserializationError` - If a weight matrix has rows of differing length
    pub fn to_parameters(&self) -> Result<LSTMParameters<T>, ModelError> {
        let (input_weights, input_bias) = self.input.to_arrays("input weights")?;
        let (forget_weights, forget_bias) = self.forget.to_arrays("forget weights")?;
        let (candidate_weights, candidate_bias) = self.candidate.to_arrays("candidate weights")?;
        let (output_weights, output_bias) = self.output.to_arrays("output weights")?;

        Ok(LSTMParameters {
            input_weights,
            forget_weights,
            candidate_weights,
            output_weights,
            input_bias,
            forget_bias,
            candidate_bias,
            output_bias,
        })
    }
}
