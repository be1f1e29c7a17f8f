use super::*;
use crate::neural_network::activation::Activation;
use crate::neural_network::layer::layer_weight::LayerWeight;
use crate::neural_network::layer::serialize_weight::{
    SerializableActivationWeight, SerializableLayer,
};
use tracing::debug;

/// Stateless layer applying an activation function to every active input element.
///
/// The input and output active regions must hold the same number of elements; the
/// elements are copied in row-major order, so the two regions may differ in shape.
///
/// # Fields
///
/// - `layer_parameters` - Input/output shapes and padding
/// - `activation` - Function applied elementwise
/// - `output` - Output buffer with its padding border
#[derive(Debug, Clone)]
pub struct ActivationLayer<T: Element> {
    layer_parameters: LayerParameters,
    activation: Activation<T>,
    output: LayerOutput<T>,
}

impl<T: Element> ActivationLayer<T> {
    /// Creates a new activation layer.
    ///
    /// # Returns
    ///
    /// - `Ok(ActivationLayer<T>)` - The layer
    /// - `Err(ModelError::DimensionMismatch)` - If a shape has no active region or the active regions differ in size
    pub fn new(
        layer_parameters: LayerParameters,
        activation: Activation<T>,
    ) -> Result<Self, ModelError> {
        layer_parameters.validate()?;

        let input_size = layer_parameters.input_size_minus_padding();
        let output_size = layer_parameters.output_size_minus_padding();
        if input_size != output_size {
            return Err(ModelError::DimensionMismatch(format!(
                "activation layer input region holds {} elements but output region holds {}",
                input_size, output_size
            )));
        }

        debug!(size = input_size, activation = ?activation.kind(), "created activation layer");

        Ok(Self {
            layer_parameters,
            activation,
            output: LayerOutput::new(
                &layer_parameters.output_shape,
                &layer_parameters.output_padding,
            ),
        })
    }

    /// Rebuilds a layer from a record written by [`Layer::write_state`].
    ///
    /// # Errors
    ///
    /// - `ModelError::DeserializationError` - If the record is for another kind or element type, or is malformed
    pub fn read_state(record: &SerializableLayer) -> Result<Self, ModelError> {
        record.check_header::<T>(LayerType::Activation)?;
        let body: SerializableActivationWeight = record.body()?;
        Self::new(record.parameters, Activation::from_kind(body.activation))
            .map_err(|e| ModelError::DeserializationError(e.to_string()))
    }

    pub fn get_activation(&self) -> &Activation<T> {
        &self.activation
    }
}

impl<T: Element> Layer<T> for ActivationLayer<T> {
    fn compute(&mut self, input: &Tensor<T>) -> Result<&Tensor<T>, ModelError> {
        let mut values = self.layer_parameters.flatten_input(input)?;
        self.activation.apply_in_place(&mut values);
        self.output.write_active(&values);
        Ok(self.output.tensor())
    }

    fn layer_type(&self) -> LayerType {
        LayerType::Activation
    }

    fn layer_parameters(&self) -> &LayerParameters {
        &self.layer_parameters
    }

    fn output(&self) -> &Tensor<T> {
        self.output.tensor()
    }

    fn get_weights(&self) -> LayerWeight<'_, T> {
        LayerWeight::Empty
    }

    fn write_state(&self) -> Result<SerializableLayer, ModelError> {
        SerializableLayer::new::<T, _>(
            LayerType::Activation,
            self.layer_parameters,
            &SerializableActivationWeight {
                activation: self.activation.serializable_kind()?,
            },
        )
    }
}
