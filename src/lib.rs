//! An LSTM layer for layered neural-network inference engines.
//!
//! The crate centers on [`neural_network::layer::recurrent_layer::LSTMLayer`], a recurrent
//! layer that keeps a cell state and a hidden state across calls and updates them with the
//! usual four-gate rule. Everything the layer needs from its surroundings is provided in a
//! narrow form: a [`neural_network::Layer`] trait with `compute`/`reset` dispatch, padded
//! output buffers, pluggable elementwise activations and a versioned, field-keyed record
//! format with a registry that rebuilds layers from their kind tag.

/// Error types shared by every layer
///
/// All failures are reported through [`error::ModelError`]:
///
/// - `DimensionMismatch` when parameters disagree with the declared sizes
/// - `ShapeMismatch` when `compute` receives an input of the wrong size
/// - `DeserializationError` when a persisted record cannot be turned back into a layer
/// - `SerializationError` when a layer cannot be encoded
pub mod error;

/// Components for running recurrent inference layers.
///
/// # Core Components
///
/// ## Layers
/// - **LSTMLayer**: Gated recurrent layer with retained cell/hidden state and explicit reset
/// - **ActivationLayer**: Stateless elementwise activation over a padded tensor
///
/// ## Activation Functions
/// - **Sigmoid**, **HardSigmoid**: Gating activations bounded in \[0, 1\]
/// - **Tanh**, **HardTanh**: Symmetric squashing activations
/// - **ReLU**, **LeakyReLU**, **Linear**: Unbounded activations
///
/// ## Serialization
/// - **SerializableLayer**: Versioned record carrying the kind tag, element type, layer shapes and parameters
/// - **LayerRegistry**: Rebuilds boxed layers from records by kind tag
///
/// # Examples
/// ```rust
/// use gated_recurrent::neural_network::*;
/// use ndarray::{Array1, Array2, Array3};
///
/// let parameters = LSTMParameters {
///     input_weights: Array2::<f32>::ones((1, 2)),
///     forget_weights: Array2::zeros((1, 2)),
///     candidate_weights: Array2::ones((1, 2)),
///     output_weights: Array2::ones((1, 2)),
///     input_bias: Array1::zeros(1),
///     forget_bias: Array1::zeros(1),
///     candidate_bias: Array1::zeros(1),
///     output_bias: Array1::zeros(1),
/// };
/// let mut layer = LSTMLayer::new(
///     LayerParameters::vector(1, 1),
///     parameters,
///     Activation::from_kind(ActivationKind::Tanh),
///     Activation::from_kind(ActivationKind::Sigmoid),
/// )
/// .unwrap();
///
/// let input = Array3::from_elem((1, 1, 1), 1.0);
/// let output = layer.compute(&input).unwrap();
/// assert!((output[[0, 0, 0]] - 0.3696).abs() < 1e-4);
///
/// layer.reset();
/// assert!(layer.hidden_state().iter().all(|&h| h == 0.0));
/// ```
pub mod neural_network;

/// A convenience module that re-exports the most commonly used types and traits from this crate.
pub mod prelude;
