use super::*;
use serde::de::DeserializeOwned;
use std::io::{Read, Write};

/// Conversions between nested vectors and `ndarray` arrays
mod helper_function;
/// Record body of an `ActivationLayer`
pub mod serializable_activation_weight;
/// Weights and bias of a single gate
pub mod serializable_gate_weight;
/// Record body of an `LSTMLayer`
pub mod serializable_lstm_weight;

pub use serializable_activation_weight::SerializableActivationWeight;
pub use serializable_gate_weight::SerializableGateWeight;
pub use serializable_lstm_weight::SerializableLSTMWeight;

/// Version of the record layout written by this crate.
///
/// Records with a higher version are rejected; lower versions are read as version 1.
pub const SCHEMA_VERSION: u32 = 1;

/// Versioned, field-keyed record of one layer.
///
/// The header (`version`, `type`, `element_type`, `parameters`) is the same for every
/// layer kind. `body` holds the kind-specific fields and is decoded by the layer's
/// `read_state`.
///
/// # Fields
///
/// - `version` - Record layout version, see [`SCHEMA_VERSION`]
/// - `layer_type` - Kind tag, e.g. `"LSTMLayer"`, serialized under the key `type`
/// - `element_type` - Name of the scalar type the parameters were written with (`"f32"` or `"f64"`)
/// - `parameters` - Shapes and padding of the layer
/// - `body` - Kind-specific parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializableLayer {
    pub version: u32,
    #[serde(rename = "type")]
    pub layer_type: String,
    pub element_type: String,
    pub parameters: LayerParameters,
    pub body: serde_json::Value,
}

impl SerializableLayer {
    /// Creates a record for a layer of kind `layer_type` over elements of type `T`.
    ///
    /// # Errors
    ///
    /// - `ModelError::SerializationError` - If `body` cannot be encoded as JSON
    pub fn new<T: Element, B: Serialize>(
        layer_type: LayerType,
        parameters: LayerParameters,
        body: &B,
    ) -> Result<Self, ModelError> {
        let body = serde_json::to_value(body)
            .map_err(|e| ModelError::SerializationError(e.to_string()))?;
        Ok(Self {
            version: SCHEMA_VERSION,
            layer_type: layer_type.as_str().to_string(),
            element_type: T::TYPE_NAME.to_string(),
            parameters,
            body,
        })
    }

    /// Resolves the kind tag.
    ///
    /// # Errors
    ///
    /// - `ModelError::DeserializationError` - If the tag names no known layer kind
    pub fn layer_type(&self) -> Result<LayerType, ModelError> {
        self.layer_type.parse()
    }

    /// Checks that the record can be read as a layer of kind `expected` over `T`.
    ///
    /// # Errors
    ///
    /// - `ModelError::DeserializationError` - If the version is newer than [`SCHEMA_VERSION`], or the kind or element type differ
    pub fn check_header<T: Element>(&self, expected: LayerType) -> Result<(), ModelError> {
        if self.version > SCHEMA_VERSION {
            return Err(ModelError::DeserializationError(format!(
                "record version {} is newer than supported version {}",
                self.version, SCHEMA_VERSION
            )));
        }
        let layer_type = self.layer_type()?;
        if layer_type != expected {
            return Err(ModelError::DeserializationError(format!(
                "expected a {} record, found {}",
                expected, layer_type
            )));
        }
        if self.element_type != T::TYPE_NAME {
            return Err(ModelError::DeserializationError(format!(
                "record holds {} parameters, expected {}",
                self.element_type,
                T::TYPE_NAME
            )));
        }
        Ok(())
    }

    /// Decodes the kind-specific body.
    ///
    /// # Errors
    ///
    /// - `ModelError::DeserializationError` - If the body is missing fields or holds values of the wrong type
    pub fn body<B: DeserializeOwned>(&self) -> Result<B, ModelError> {
        Ok(B::deserialize(&self.body)?)
    }

    /// Encodes the record as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ModelError> {
        serde_json::to_string_pretty(self).map_err(|e| ModelError::SerializationError(e.to_string()))
    }

    /// Decodes a record from JSON.
    ///
    /// # Errors
    ///
    /// - `ModelError::DeserializationError` - If `json` is not a well-formed record
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Writes the record as pretty-printed JSON to `writer`.
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<(), ModelError> {
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| ModelError::SerializationError(e.to_string()))
    }

    /// Reads a record from `reader`.
    ///
    /// # Errors
    ///
    /// - `ModelError::DeserializationError` - If the stream cannot be read or is not a well-formed record
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ModelError> {
        Ok(serde_json::from_reader(reader)?)
    }
}
