use super::*;
use crate::neural_network::layer::serialize_weight::SerializableLayer;
use ahash::AHashMap;
use tracing::debug;

/// Function that rebuilds a boxed layer from its record.
pub type LayerReader<T> = fn(&SerializableLayer) -> Result<Box<dyn Layer<T>>, ModelError>;

/// Maps layer kind tags to the functions that read them.
///
/// A network reader resolves each record through the registry instead of matching on kinds
/// itself, so new layer kinds only need to be registered.
///
/// # Examples
///
/// ```rust
/// use gated_recurrent::prelude::*;
///
/// let registry = LayerRegistry::<f32>::with_builtin_layers();
/// assert!(registry.contains(LayerType::LSTM));
/// assert!(registry.contains(LayerType::Activation));
/// ```
pub struct LayerRegistry<T: Element> {
    readers: AHashMap<LayerType, LayerReader<T>>,
}

fn read_lstm<T: Element>(record: &SerializableLayer) -> Result<Box<dyn Layer<T>>, ModelError> {
    Ok(Box::new(LSTMLayer::<T>::read_state(record)?))
}

fn read_activation<T: Element>(
    record: &SerializableLayer,
) -> Result<Box<dyn Layer<T>>, ModelError> {
    Ok(Box::new(ActivationLayer::<T>::read_state(record)?))
}

impl<T: Element> LayerRegistry<T> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            readers: AHashMap::new(),
        }
    }

    /// Creates a registry that knows every layer kind of this crate.
    pub fn with_builtin_layers() -> Self {
        let mut registry = Self::new();
        registry.register(LayerType::LSTM, read_lstm::<T>);
        registry.register(LayerType::Activation, read_activation::<T>);
        registry
    }

    /// Registers `reader` for `layer_type`, replacing any previous reader.
    pub fn register(&mut self, layer_type: LayerType, reader: LayerReader<T>) -> &mut Self {
        self.readers.insert(layer_type, reader);
        self
    }

    /// Returns `true` if a reader is registered for `layer_type`.
    pub fn contains(&self, layer_type: LayerType) -> bool {
        self.readers.contains_key(&layer_type)
    }

    /// Rebuilds the layer described by `record`.
    ///
    /// # Errors
    ///
    /// - `ModelError::DeserializationError` - If the tag is unknown or not registered, or the registered reader rejects the record
    pub fn read_layer(&self, record: &SerializableLayer) -> Result<Box<dyn Layer<T>>, ModelError> {
        let layer_type = record.layer_type()?;
        let reader = self.readers.get(&layer_type).ok_or_else(|| {
            ModelError::DeserializationError(format!("no reader registered for {}", layer_type))
        })?;

        let layer = reader(record)?;
        debug!(layer_type = %layer_type, output_shape = %layer.output_shape(), "read layer");
        Ok(layer)
    }

    /// Rebuilds a sequence of layers, stopping at the first failure.
    pub fn read_layers(
        &self,
        records: &[SerializableLayer],
    ) -> Result<Vec<Box<dyn Layer<T>>>, ModelError> {
        records.iter().map(|record| self.read_layer(record)).collect()
    }
}

impl<T: Element> Default for LayerRegistry<T> {
    fn default() -> Self {
        Self::with_builtin_layers()
    }
}
