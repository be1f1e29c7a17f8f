use crate::neural_network::activation::ActivationKind;
use serde::{Deserialize, Serialize};

/// Serializable representation of an activation layer.
///
/// # Fields
///
/// - `activation` - Identifier of the applied activation function
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SerializableActivationWeight {
    pub activation: ActivationKind,
}
