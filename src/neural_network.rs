/// Module that contains elementwise activation functions
pub mod activation;
/// Module that contains layer implementations and the layer contract types
pub mod layer;
/// Module that contains the traits shared by layers and activation functions
pub mod neural_network_trait;

pub use activation::*;
pub use layer::*;
pub use neural_network_trait::*;

use crate::error::ModelError;
use ndarray::{Array3, NdFloat};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Type alias for the three-dimensional (rows, columns, channels) tensors exchanged between layers
pub type Tensor<T> = Array3<T>;

/// Numeric element type a layer can be instantiated with.
///
/// Implemented for `f32` and `f64`. The type name is part of every serialized record so
/// a record written by a single-precision layer is never silently read back as double
/// precision.
pub trait Element: NdFloat + Serialize + DeserializeOwned {
    /// Name stored in serialized records (e.g. "f32")
    const TYPE_NAME: &'static str;

    /// Converts a literal constant into this element type.
    fn from_constant(value: f64) -> Self;
}

impl Element for f32 {
    const TYPE_NAME: &'static str = "f32";

    fn from_constant(value: f64) -> Self {
        value as f32
    }
}

impl Element for f64 {
    const TYPE_NAME: &'static str = "f64";

    fn from_constant(value: f64) -> Self {
        value
    }
}
