pub use crate::error::ModelError;
pub use crate::neural_network::activation::*;
pub use crate::neural_network::layer::activation_layer::ActivationLayer;
pub use crate::neural_network::layer::layer_registry::LayerRegistry;
pub use crate::neural_network::layer::recurrent_layer::*;
pub use crate::neural_network::layer::serialize_weight::SerializableLayer;
pub use crate::neural_network::layer::{
    LayerParameters, LayerType, PaddingParameters, PaddingScheme, TensorShape,
};
pub use crate::neural_network::neural_network_trait::{ActivationFunction, Layer};
pub use crate::neural_network::{Element, Tensor};
