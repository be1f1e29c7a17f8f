use super::*;
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Linear (identity) activation
pub mod linear;
/// ReLU and LeakyReLU activations
pub mod relu;
/// Sigmoid and HardSigmoid activations
pub mod sigmoid;
/// Tanh and HardTanh activations
pub mod tanh;

pub use linear::Linear;
pub use relu::{LeakyReLU, ReLU};
pub use sigmoid::{HardSigmoid, Sigmoid};
pub use tanh::{HardTanh, Tanh};

/// Threshold for mapping an activation over a vector in parallel.
/// Vectors shorter than this are mapped sequentially, where rayon's
/// scheduling overhead would dominate.
pub const ACTIVATION_PARALLEL_THRESHOLD: usize = 4096;

/// Serializable identifier of an activation function.
///
/// Stored in layer records in place of the function object itself; [`Activation::from_kind`]
/// turns it back into a callable activation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ActivationKind {
    Sigmoid,
    HardSigmoid,
    Tanh,
    HardTanh,
    ReLU,
    LeakyReLU { alpha: f64 },
    Linear,
}

/// Shared handle to an elementwise activation function.
///
/// Cloning the handle is cheap and never copies the function; all clones call the same
/// stateless object. Any type implementing [`ActivationFunction`] can be wrapped, the
/// built-in set can also be created from an [`ActivationKind`].
///
/// # Examples
///
/// ```rust
/// use gated_recurrent::neural_network::activation::{Activation, ActivationKind};
///
/// let sigmoid = Activation::<f64>::from_kind(ActivationKind::Sigmoid);
/// assert_eq!(sigmoid.apply(0.0), 0.5);
/// assert_eq!(sigmoid.kind(), Some(ActivationKind::Sigmoid));
/// ```
#[derive(Clone)]
pub struct Activation<T: Element> {
    function: Arc<dyn ActivationFunction<T>>,
}

impl<T: Element> Activation<T> {
    /// Wraps an activation function.
    pub fn new<F: ActivationFunction<T> + 'static>(function: F) -> Self {
        Self {
            function: Arc::new(function),
        }
    }

    /// Creates one of the built-in activation functions from its identifier.
    pub fn from_kind(kind: ActivationKind) -> Self {
        match kind {
            ActivationKind::Sigmoid => Self::new(Sigmoid),
            ActivationKind::HardSigmoid => Self::new(HardSigmoid),
            ActivationKind::Tanh => Self::new(Tanh),
            ActivationKind::HardTanh => Self::new(HardTanh),
            ActivationKind::ReLU => Self::new(ReLU),
            ActivationKind::LeakyReLU { alpha } => Self::new(LeakyReLU::new(alpha)),
            ActivationKind::Linear => Self::new(Linear),
        }
    }

    /// Returns the identifier of the wrapped function, `None` for functions outside the built-in set.
    pub fn kind(&self) -> Option<ActivationKind> {
        self.function.kind()
    }

    /// Returns the identifier to store in a record.
    ///
    /// # Errors
    ///
    /// - `ModelError::SerializationError` - If the wrapped function is not one of the built-in functions
    pub fn serializable_kind(&self) -> Result<ActivationKind, ModelError> {
        self.kind().ok_or_else(|| {
            ModelError::SerializationError(format!(
                "activation {:?} has no serializable identifier",
                self.function
            ))
        })
    }

    /// Applies the wrapped function to a single value.
    pub fn apply(&self, x: T) -> T {
        self.function.apply(x)
    }

    /// Applies the wrapped function to every element of `values` in place.
    pub fn apply_in_place(&self, values: &mut Array1<T>) {
        self.function.apply_in_place(values)
    }
}

impl<T: Element> From<ActivationKind> for Activation<T> {
    fn from(kind: ActivationKind) -> Self {
        Self::from_kind(kind)
    }
}

impl<T: Element> std::fmt::Debug for Activation<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Activation").field(&self.function).finish()
    }
}

/// Built-in functions are equal when their identifiers are; any other function is only
/// equal to handles sharing the same function object.
impl<T: Element> PartialEq for Activation<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.kind(), other.kind()) {
            (Some(kind), Some(other_kind)) => kind == other_kind,
            _ => Arc::ptr_eq(&self.function, &other.function),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_from_kind_round_trips_identifier() {
        let kinds = [
            ActivationKind::Sigmoid,
            ActivationKind::HardSigmoid,
            ActivationKind::Tanh,
            ActivationKind::HardTanh,
            ActivationKind::ReLU,
            ActivationKind::LeakyReLU { alpha: 0.1 },
            ActivationKind::Linear,
        ];
        for kind in kinds {
            assert_eq!(Activation::<f32>::from_kind(kind).kind(), Some(kind));
        }
    }

    #[test]
    fn test_kind_json_is_tagged() {
        let json = serde_json::to_string(&ActivationKind::LeakyReLU { alpha: 0.25 }).unwrap();
        assert_eq!(json, r#"{"type":"LeakyReLU","alpha":0.25}"#);

        let kind: ActivationKind = serde_json::from_str(r#"{"type":"Tanh"}"#).unwrap();
        assert_eq!(kind, ActivationKind::Tanh);
    }

    #[test]
    fn test_apply_in_place_matches_scalar() {
        let tanh = Activation::<f64>::from_kind(ActivationKind::Tanh);
        let mut values = array![-2.0, -0.5, 0.0, 0.5, 2.0];
        let expected = values.mapv(|x: f64| x.tanh());
        tanh.apply_in_place(&mut values);
        for (got, want) in values.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(*got, *want, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_parallel_path_matches_sequential() {
        let sigmoid = Activation::<f32>::from_kind(ActivationKind::Sigmoid);
        let n = ACTIVATION_PARALLEL_THRESHOLD + 17;
        let mut values = Array1::from_shape_fn(n, |i| (i as f32 - n as f32 / 2.0) / 100.0);
        let expected = values.mapv(|x| sigmoid.apply(x));
        sigmoid.apply_in_place(&mut values);
        assert_eq!(values, expected);
    }

    #[derive(Debug)]
    struct Doubling;

    impl ActivationFunction<f32> for Doubling {
        fn apply(&self, x: f32) -> f32 {
            2.0 * x
        }
    }

    #[test]
    fn test_custom_function() {
        let doubling = Activation::new(Doubling);
        let mut values = array![1.0f32, -3.0];
        doubling.apply_in_place(&mut values);
        assert_eq!(values, array![2.0, -6.0]);
    }

    #[test]
    fn test_custom_function_has_no_identifier() {
        let doubling = Activation::new(Doubling);
        assert_eq!(doubling.kind(), None);
        assert!(matches!(
            doubling.serializable_kind(),
            Err(ModelError::SerializationError(_))
        ));

        assert_eq!(doubling.clone(), doubling);
        assert_ne!(Activation::new(Doubling), doubling);
        assert_ne!(Activation::from_kind(ActivationKind::Linear), doubling);
    }
}
