use crate::error::ModelError;
use crate::neural_network::activation::{ACTIVATION_PARALLEL_THRESHOLD, ActivationKind};
use crate::neural_network::layer::layer_weight::LayerWeight;
use crate::neural_network::layer::serialize_weight::SerializableLayer;
use crate::neural_network::layer::{LayerParameters, LayerType};
use crate::neural_network::{Element, Tensor};
use ndarray::Array1;

/// Defines the interface for inference layers.
///
/// A network executor holds layers as `Box<dyn Layer<T>>` and drives them through this
/// trait: `compute` once per timestep in temporal order, `reset` between unrelated
/// sequences, and `write_state` when persisting the network.
pub trait Layer<T: Element>: Send + Sync {
    /// Feeds one input tensor through the layer.
    ///
    /// # Parameters
    ///
    /// - `input` - The input tensor, including any input padding border declared in the layer parameters
    ///
    /// # Returns
    ///
    /// - `Ok(&Tensor<T>)` - The layer's output buffer, including its padding border
    /// - `Err(ModelError::ShapeMismatch)` - If the input region does not hold the expected number of elements
    fn compute(&mut self, input: &Tensor<T>) -> Result<&Tensor<T>, ModelError>;

    /// Clears any state retained between calls to `compute`.
    ///
    /// Stateless layers keep the default no-op.
    fn reset(&mut self) {}

    /// Returns the fixed kind discriminant of the layer.
    fn layer_type(&self) -> LayerType;

    /// Returns the shapes and padding the layer was built with.
    fn layer_parameters(&self) -> &LayerParameters;

    /// Returns the output buffer as written by the last `compute` call.
    fn output(&self) -> &Tensor<T>;

    /// Returns a description of the output shape of the layer.
    ///
    /// # Returns
    ///
    /// - `String` - A string describing the output dimensions, padding included
    fn output_shape(&self) -> String {
        self.layer_parameters().output_shape.to_string()
    }

    /// Returns references to all parameters held by the layer.
    ///
    /// # Returns
    ///
    /// - `LayerWeight<'_, T>` - An enum containing references to layer weights:
    ///     - `LayerWeight::LSTM` for LSTM layers with the four gate matrices and biases
    ///     - `LayerWeight::Empty` for layers with no parameters
    fn get_weights(&self) -> LayerWeight<'_, T>;

    /// Encodes the layer's parameters into a versioned record.
    ///
    /// Retained recurrent state is never part of the record.
    ///
    /// # Returns
    ///
    /// - `Ok(SerializableLayer)` - A record from which an equivalent layer can be rebuilt
    /// - `Err(ModelError::SerializationError)` - If the parameters could not be encoded
    fn write_state(&self) -> Result<SerializableLayer, ModelError>;
}

/// Defines the interface for elementwise activation functions.
///
/// Implementations must be stateless: `apply` depends on its argument only. Non-finite
/// values are propagated, never clamped.
pub trait ActivationFunction<T: Element>: std::fmt::Debug + Send + Sync {
    /// Applies the function to a single value.
    fn apply(&self, x: T) -> T;

    /// Returns the identifier under which the function is serialized.
    ///
    /// Only the built-in functions have an identifier. Other functions keep the default
    /// `None`, and layers using them cannot be written to a record.
    fn kind(&self) -> Option<ActivationKind> {
        None
    }

    /// Applies the function to every element of `values` in place.
    ///
    /// Large vectors are mapped in parallel; each element is still computed by `apply`, so
    /// the result does not depend on the path taken.
    fn apply_in_place(&self, values: &mut Array1<T>) {
        if values.len() >= ACTIVATION_PARALLEL_THRESHOLD {
            values.par_mapv_inplace(|x| self.apply(x));
        } else {
            values.mapv_inplace(|x| self.apply(x));
        }
    }
}
