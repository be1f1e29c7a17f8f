use super::*;
use crate::neural_network::activation::Activation;
use crate::neural_network::layer::layer_weight::{LSTMGateWeight, LSTMLayerWeight, LayerWeight};
use crate::neural_network::layer::serialize_weight::{SerializableLSTMWeight, SerializableLayer};
use tracing::{debug, trace};

/// Threshold for computing the four gate pre-activations in parallel.
/// When hidden_size * (input_size + hidden_size) < this value, gates are computed sequentially.
/// When hidden_size * (input_size + hidden_size) >= this value, gates are computed with `rayon::join`.
///
/// Below the threshold a single matrix-vector product is too short to amortize
/// rayon's scheduling overhead.
pub const LSTM_PARALLEL_THRESHOLD: usize = 4096;

/// Long Short-Term Memory (LSTM) inference layer
///
/// Each call to `compute` consumes one timestep and advances the retained cell and hidden
/// state. The state persists across calls until `reset` is invoked, so a sequence is fed
/// one element at a time, in order.
///
/// # Mathematical Operations
///
/// For each timestep t, with `x_t` the active region of the input:
/// 1. z_t = \[x_t ; h_{t-1}\]
/// 2. i_t = g(W_i · z_t + b_i)  (Input gate)
/// 3. f_t = g(W_f · z_t + b_f)  (Forget gate)
/// 4. c̃_t = s(W_c · z_t + b_c)  (Candidate)
/// 5. o_t = g(W_o · z_t + b_o)  (Output gate)
/// 6. C_t = f_t ⊙ C_{t-1} + i_t ⊙ c̃_t  (Cell state update)
/// 7. h_t = o_t ⊙ s(C_t)  (Hidden state update)
///
/// Where g is the recurrent (gating) activation, s the activation, and ⊙ element-wise
/// multiplication. `h_t` is written into the active region of the output tensor.
///
/// # Fields
///
/// - `layer_parameters` - Input/output shapes and padding
/// - `input_size` - Number of active input elements per timestep
/// - `hidden_size` - Number of LSTM units, equal to the number of active output elements
/// - `gates` - Shared, immutable gate parameters
/// - `state` - Retained cell and hidden state
/// - `concat` - Scratch buffer holding `[input ; hidden]`
/// - `output` - Output buffer with its padding border
/// - `activation` - Squashing activation applied to the candidate and the cell state
/// - `recurrent_activation` - Gating activation applied to the input, forget and output gates
/// - `reset_trigger` - Last reset signal seen by `compute_with_reset`
#[derive(Debug, Clone)]
pub struct LSTMLayer<T: Element> {
    layer_parameters: LayerParameters,
    input_size: usize,
    hidden_size: usize,

    gates: Arc<LSTMGates<T>>,
    state: RecurrentState<T>,
    concat: Array1<T>,
    output: LayerOutput<T>,

    activation: Activation<T>,
    recurrent_activation: Activation<T>,
    reset_trigger: ResetTrigger,
}

impl<T: Element> LSTMLayer<T> {
    /// Creates a new LSTM layer.
    ///
    /// `input_size` is the number of active elements in the input shape and `hidden_size`
    /// the number of active elements in the output shape.
    ///
    /// # Parameters
    ///
    /// - `layer_parameters` - Input/output shapes and padding
    /// - `parameters` - Weights and biases of the four gates
    /// - `activation` - Squashing activation, usually Tanh
    /// - `recurrent_activation` - Gating activation, usually Sigmoid
    ///
    /// # Returns
    ///
    /// - `Ok(LSTMLayer<T>)` - A layer with zeroed state
    /// - `Err(ModelError::DimensionMismatch)` - If a shape has no active region, or any weight or bias disagrees with the sizes
    pub fn new(
        layer_parameters: LayerParameters,
        parameters: LSTMParameters<T>,
        activation: Activation<T>,
        recurrent_activation: Activation<T>,
    ) -> Result<Self, ModelError> {
        layer_parameters.validate()?;

        let input_size = layer_parameters.input_size_minus_padding();
        let hidden_size = layer_parameters.output_size_minus_padding();
        validate_dimension_greater_than_zero(input_size, "input_size")?;
        validate_dimension_greater_than_zero(hidden_size, "hidden_size")?;

        let gates = parameters.into_gates(input_size, hidden_size)?;

        debug!(
            input_size,
            hidden_size,
            activation = ?activation.kind(),
            recurrent_activation = ?recurrent_activation.kind(),
            "created LSTM layer"
        );

        Ok(Self {
            layer_parameters,
            input_size,
            hidden_size,
            gates: Arc::new(gates),
            state: RecurrentState::zeros(hidden_size),
            concat: Array1::zeros(input_size + hidden_size),
            output: LayerOutput::new(
                &layer_parameters.output_shape,
                &layer_parameters.output_padding,
            ),
            activation,
            recurrent_activation,
            reset_trigger: ResetTrigger::new(),
        })
    }

    /// Rebuilds a layer from a record written by [`Layer::write_state`].
    ///
    /// The record's shapes are re-validated; retained state is not part of the record, so
    /// the layer starts zeroed.
    ///
    /// # Errors
    ///
    /// - `ModelError::DeserializationError` - If the record is for another kind, element type or newer schema, or its contents are malformed or inconsistent
    pub fn read_state(record: &SerializableLayer) -> Result<Self, ModelError> {
        record.check_header::<T>(LayerType::LSTM)?;
        let body: SerializableLSTMWeight<T> = record.body()?;
        let parameters = body.to_parameters()?;

        let layer = Self::new(
            record.parameters,
            parameters,
            Activation::from_kind(body.activation),
            Activation::from_kind(body.recurrent_activation),
        )
        .map_err(|e| ModelError::DeserializationError(e.to_string()))?;

        debug!(
            input_size = layer.input_size,
            hidden_size = layer.hidden_size,
            "read LSTM layer"
        );
        Ok(layer)
    }

    /// Resets the state if `signal` differs from the last observed signal, then computes.
    ///
    /// The first signal is compared against 0, so holding the signal at 0 never resets.
    ///
    /// # Parameters
    ///
    /// - `input` - The input tensor for this timestep
    /// - `signal` - Current value of the reset signal
    ///
    /// # Returns
    ///
    /// - `Ok(&Tensor<T>)` - The output buffer
    /// - `Err(ModelError::ShapeMismatch)` - If the input region has the wrong number of elements
    pub fn compute_with_reset(
        &mut self,
        input: &Tensor<T>,
        signal: i32,
    ) -> Result<&Tensor<T>, ModelError> {
        if self.reset_trigger.observe(signal) {
            debug!(signal, "reset trigger fired");
            self.reset();
        }
        self.compute(input)
    }

    /// Returns the input gate weight matrix.
    pub fn input_weights(&self) -> &Array2<T> {
        &self.gates.input.weights
    }

    /// Returns the forget gate weight matrix.
    pub fn forget_weights(&self) -> &Array2<T> {
        &self.gates.forget.weights
    }

    /// Returns the candidate weight matrix.
    pub fn candidate_weights(&self) -> &Array2<T> {
        &self.gates.candidate.weights
    }

    /// Returns the output gate weight matrix.
    pub fn output_weights(&self) -> &Array2<T> {
        &self.gates.output.weights
    }

    /// Returns the input gate bias.
    pub fn input_bias(&self) -> &Array1<T> {
        &self.gates.input.bias
    }

    /// Returns the forget gate bias.
    pub fn forget_bias(&self) -> &Array1<T> {
        &self.gates.forget.bias
    }

    /// Returns the candidate bias.
    pub fn candidate_bias(&self) -> &Array1<T> {
        &self.gates.candidate.bias
    }

    /// Returns the output gate bias.
    pub fn output_bias(&self) -> &Array1<T> {
        &self.gates.output.bias
    }

    /// Returns the squashing activation.
    pub fn activation(&self) -> &Activation<T> {
        &self.activation
    }

    /// Returns the gating activation.
    pub fn recurrent_activation(&self) -> &Activation<T> {
        &self.recurrent_activation
    }

    /// Returns the number of active input elements consumed per step.
    pub fn input_size(&self) -> usize {
        self.input_size
    }

    /// Returns the number of LSTM units.
    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    /// Returns the hidden state left by the last `compute`.
    pub fn hidden_state(&self) -> &Array1<T> {
        self.state.hidden()
    }

    /// Returns the cell state left by the last `compute`.
    pub fn cell_state(&self) -> &Array1<T> {
        self.state.cell()
    }

    /// Returns the shared gate parameters.
    pub fn gates(&self) -> &Arc<LSTMGates<T>> {
        &self.gates
    }

    /// Computes the four gate pre-activations from the current `concat` buffer.
    fn preactivations(&self) -> (Array1<T>, Array1<T>, Array1<T>, Array1<T>) {
        let gates = &*self.gates;
        let concat = &self.concat;

        if self.hidden_size * concat.len() >= LSTM_PARALLEL_THRESHOLD {
            let ((i_raw, f_raw), (c_raw, o_raw)) = rayon::join(
                || {
                    rayon::join(
                        || gates.input.preactivation(concat),
                        || gates.forget.preactivation(concat),
                    )
                },
                || {
                    rayon::join(
                        || gates.candidate.preactivation(concat),
                        || gates.output.preactivation(concat),
                    )
                },
            );
            (i_raw, f_raw, c_raw, o_raw)
        } else {
            (
                gates.input.preactivation(concat),
                gates.forget.preactivation(concat),
                gates.candidate.preactivation(concat),
                gates.output.preactivation(concat),
            )
        }
    }
}

impl<T: Element> Layer<T> for LSTMLayer<T> {
    fn compute(&mut self, input: &Tensor<T>) -> Result<&Tensor<T>, ModelError> {
        let x_t = self.layer_parameters.flatten_input(input)?;

        self.concat
            .slice_mut(s![..self.input_size])
            .assign(&x_t);
        self.concat
            .slice_mut(s![self.input_size..])
            .assign(self.state.hidden());

        let (mut i_t, mut f_t, mut c_t, mut o_t) = self.preactivations();

        self.recurrent_activation.apply_in_place(&mut i_t);
        self.recurrent_activation.apply_in_place(&mut f_t);
        self.activation.apply_in_place(&mut c_t);
        self.recurrent_activation.apply_in_place(&mut o_t);

        // C_t = f_t ⊙ C_{t-1} + i_t ⊙ c̃_t
        let cell = &f_t * self.state.cell() + &(&i_t * &c_t);

        // h_t = o_t ⊙ s(C_t)
        let mut squashed = cell.clone();
        self.activation.apply_in_place(&mut squashed);
        let hidden = &o_t * &squashed;

        self.output.write_active(&hidden);
        self.state.update(cell, hidden);

        trace!(hidden_size = self.hidden_size, "LSTM step");
        Ok(self.output.tensor())
    }

    fn reset(&mut self) {
        self.state.reset();
        self.output.write_active(self.state.hidden());
    }

    fn layer_type(&self) -> LayerType {
        LayerType::LSTM
    }

    fn layer_parameters(&self) -> &LayerParameters {
        &self.layer_parameters
    }

    fn output(&self) -> &Tensor<T> {
        self.output.tensor()
    }

    fn get_weights(&self) -> LayerWeight<'_, T> {
        fn gate<T: Element>(gate: &Gate<T>) -> LSTMGateWeight<'_, T> {
            LSTMGateWeight {
                weights: &gate.weights,
                bias: &gate.bias,
            }
        }

        LayerWeight::LSTM(LSTMLayerWeight {
            input: gate(&self.gates.input),
            forget: gate(&self.gates.forget),
            candidate: gate(&self.gates.candidate),
            output: gate(&self.gates.output),
        })
    }

    fn write_state(&self) -> Result<SerializableLayer, ModelError> {
        let LayerWeight::LSTM(weights) = self.get_weights() else {
            return Err(ModelError::SerializationError(
                "LSTM layer returned no gate weights".to_string(),
            ));
        };
        let body = SerializableLSTMWeight::from_layer_weight(
            &weights,
            self.activation.serializable_kind()?,
            self.recurrent_activation.serializable_kind()?,
        )?;
        SerializableLayer::new::<T, _>(LayerType::LSTM, self.layer_parameters, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neural_network::activation::ActivationKind;
    use approx::assert_abs_diff_eq;
    use ndarray::{Array3, array};

    fn scalar_parameters() -> LSTMParameters<f64> {
        LSTMParameters {
            input_weights: array![[1.0, 1.0]],
            forget_weights: array![[0.0, 0.0]],
            candidate_weights: array![[1.0, 1.0]],
            output_weights: array![[1.0, 1.0]],
            input_bias: array![0.0],
            forget_bias: array![0.0],
            candidate_bias: array![0.0],
            output_bias: array![0.0],
        }
    }

    fn scalar_layer() -> LSTMLayer<f64> {
        LSTMLayer::new(
            LayerParameters::vector(1, 1),
            scalar_parameters(),
            Activation::from_kind(ActivationKind::Tanh),
            Activation::from_kind(ActivationKind::Sigmoid),
        )
        .unwrap()
    }

    fn input(values: &[f64]) -> Array3<f64> {
        Array3::from_shape_vec((1, 1, values.len()), values.to_vec()).unwrap()
    }

    /// Parameters where every entry differs, so transposed or reordered weights change the result.
    fn distinct_parameters(input_size: usize, hidden_size: usize) -> LSTMParameters<f64> {
        let columns = input_size + hidden_size;
        let weights = |offset: f64| {
            Array2::from_shape_fn((hidden_size, columns), |(r, c)| {
                ((r * columns + c) as f64 * 0.37 + offset).sin() * 0.5
            })
        };
        let bias = |offset: f64| Array1::from_shape_fn(hidden_size, |r| (r as f64 + offset).cos() * 0.1);
        LSTMParameters {
            input_weights: weights(0.1),
            forget_weights: weights(1.3),
            candidate_weights: weights(2.7),
            output_weights: weights(3.9),
            input_bias: bias(0.2),
            forget_bias: bias(1.1),
            candidate_bias: bias(2.3),
            output_bias: bias(3.4),
        }
    }

    fn sigmoid(x: f64) -> f64 {
        1.0 / (1.0 + (-x).exp())
    }

    /// Straightforward single-step LSTM used as an independent reference.
    fn reference_step(
        parameters: &LSTMParameters<f64>,
        x: &Array1<f64>,
        hidden: &Array1<f64>,
        cell: &Array1<f64>,
    ) -> (Array1<f64>, Array1<f64>) {
        let hidden_size = hidden.len();
        let mut next_hidden = Array1::zeros(hidden_size);
        let mut next_cell = Array1::zeros(hidden_size);
        for r in 0..hidden_size {
            let row = |w: &Array2<f64>, b: &Array1<f64>| {
                let mut acc = b[r];
                for (k, v) in x.iter().chain(hidden.iter()).enumerate() {
                    acc += w[[r, k]] * v;
                }
                acc
            };
            let i = sigmoid(row(&parameters.input_weights, &parameters.input_bias));
            let f = sigmoid(row(&parameters.forget_weights, &parameters.forget_bias));
            let c = row(&parameters.candidate_weights, &parameters.candidate_bias).tanh();
            let o = sigmoid(row(&parameters.output_weights, &parameters.output_bias));
            next_cell[r] = f * cell[r] + i * c;
            next_hidden[r] = o * next_cell[r].tanh();
        }
        (next_hidden, next_cell)
    }

    #[test]
    fn test_single_step() {
        let mut layer = scalar_layer();
        let output = layer.compute(&input(&[1.0])).unwrap();

        assert_abs_diff_eq!(output[[0, 0, 0]], 0.3696, epsilon = 1e-4);
        assert_abs_diff_eq!(layer.cell_state()[0], 0.5568, epsilon = 1e-4);
        assert_abs_diff_eq!(layer.hidden_state()[0], 0.3696, epsilon = 1e-4);
    }

    #[test]
    fn test_second_step_uses_recurrent_weights() {
        let mut layer = scalar_layer();
        layer.compute(&input(&[1.0])).unwrap();
        let (h1, c1) = (layer.hidden_state()[0], layer.cell_state()[0]);

        // concat = [0, h1]; only the recurrent column contributes
        let output = layer.compute(&input(&[0.0])).unwrap()[[0, 0, 0]];
        let gate = 1.0 / (1.0 + (-h1).exp());
        let cell = 0.5 * c1 + gate * h1.tanh();
        assert_abs_diff_eq!(layer.cell_state()[0], cell, epsilon = 1e-12);
        assert_abs_diff_eq!(output, gate * cell.tanh(), epsilon = 1e-12);
    }

    #[derive(Debug)]
    struct Doubling;

    impl ActivationFunction<f64> for Doubling {
        fn apply(&self, x: f64) -> f64 {
            2.0 * x
        }
    }

    #[test]
    fn test_custom_activation_cannot_be_written() {
        let layer = LSTMLayer::new(
            LayerParameters::vector(1, 1),
            scalar_parameters(),
            Activation::new(Doubling),
            Activation::from_kind(ActivationKind::Sigmoid),
        )
        .unwrap();
        assert!(matches!(
            layer.write_state(),
            Err(ModelError::SerializationError(_))
        ));
    }

    #[test]
    fn test_state_carries_over_and_reset_restores_it() {
        let mut layer = scalar_layer();
        let first = layer.compute(&input(&[1.0])).unwrap()[[0, 0, 0]];
        let second = layer.compute(&input(&[1.0])).unwrap()[[0, 0, 0]];
        assert_ne!(first, second);

        layer.reset();
        assert!(layer.state.is_zero());
        assert_eq!(layer.output()[[0, 0, 0]], 0.0);

        let after_reset = layer.compute(&input(&[1.0])).unwrap()[[0, 0, 0]];
        assert_eq!(first, after_reset);
    }

    #[test]
    fn test_deterministic_across_instances() {
        let parameters = distinct_parameters(3, 4);
        let build = || {
            LSTMLayer::new(
                LayerParameters::vector(3, 4),
                parameters.clone(),
                Activation::from_kind(ActivationKind::Tanh),
                Activation::from_kind(ActivationKind::Sigmoid),
            )
            .unwrap()
        };
        let mut a = build();
        let mut b = build();
        for step in 0..5 {
            let x = input(&[step as f64 * 0.3, -0.2, 0.7]);
            let out_a = a.compute(&x).unwrap().clone();
            let out_b = b.compute(&x).unwrap().clone();
            assert_eq!(out_a, out_b);
        }
    }

    #[test]
    fn test_matches_reference_step() {
        let parameters = distinct_parameters(2, 3);
        let mut layer = LSTMLayer::new(
            LayerParameters::vector(2, 3),
            parameters.clone(),
            Activation::from_kind(ActivationKind::Tanh),
            Activation::from_kind(ActivationKind::Sigmoid),
        )
        .unwrap();

        let mut hidden = Array1::zeros(3);
        let mut cell = Array1::zeros(3);
        for x in [array![0.5, -1.0], array![0.1, 0.9], array![-0.4, 0.0]] {
            let (h, c) = reference_step(&parameters, &x, &hidden, &cell);
            hidden = h;
            cell = c;

            layer.compute(&input(x.as_slice().unwrap())).unwrap();
            for (got, want) in layer.hidden_state().iter().zip(hidden.iter()) {
                assert_abs_diff_eq!(*got, *want, epsilon = 1e-12);
            }
            for (got, want) in layer.cell_state().iter().zip(cell.iter()) {
                assert_abs_diff_eq!(*got, *want, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_order_matters() {
        let parameters = distinct_parameters(1, 2);
        let build = || {
            LSTMLayer::new(
                LayerParameters::vector(1, 2),
                parameters.clone(),
                Activation::from_kind(ActivationKind::Tanh),
                Activation::from_kind(ActivationKind::Sigmoid),
            )
            .unwrap()
        };
        let mut forward = build();
        let mut backward = build();

        forward.compute(&input(&[1.0])).unwrap();
        let forward_out = forward.compute(&input(&[-1.0])).unwrap().clone();
        backward.compute(&input(&[-1.0])).unwrap();
        let backward_out = backward.compute(&input(&[1.0])).unwrap().clone();

        assert_ne!(forward_out, backward_out);
    }

    #[test]
    fn test_wrong_input_size_leaves_state_untouched() {
        let mut layer = scalar_layer();
        layer.compute(&input(&[1.0])).unwrap();
        let hidden = layer.hidden_state().clone();
        let cell = layer.cell_state().clone();

        let result = layer.compute(&input(&[1.0, 2.0]));
        assert_eq!(
            result,
            Err(ModelError::ShapeMismatch {
                expected: 1,
                actual: 2
            })
        );
        assert_eq!(layer.hidden_state(), &hidden);
        assert_eq!(layer.cell_state(), &cell);
    }

    #[test]
    fn test_rejects_inconsistent_parameters() {
        let mut parameters = scalar_parameters();
        parameters.output_weights = array![[1.0, 0.0, 0.0]];
        let result = LSTMLayer::new(
            LayerParameters::vector(1, 1),
            parameters,
            Activation::from_kind(ActivationKind::Tanh),
            Activation::from_kind(ActivationKind::Sigmoid),
        );
        assert!(matches!(result, Err(ModelError::DimensionMismatch(_))));

        // output region holds 2 elements, gates have hidden_size 1
        let result = LSTMLayer::new(
            LayerParameters::vector(1, 2),
            scalar_parameters(),
            Activation::from_kind(ActivationKind::Tanh),
            Activation::from_kind(ActivationKind::Sigmoid),
        );
        assert!(matches!(result, Err(ModelError::DimensionMismatch(_))));
    }

    #[test]
    fn test_clones_share_parameters_not_state() {
        let mut original = scalar_layer();
        let mut copy = original.clone();
        assert!(Arc::ptr_eq(original.gates(), copy.gates()));

        original.compute(&input(&[1.0])).unwrap();
        assert!(copy.hidden_state().iter().all(|&h| h == 0.0));

        copy.compute(&input(&[1.0])).unwrap();
        assert_eq!(original.hidden_state(), copy.hidden_state());
    }

    #[test]
    fn test_compute_with_reset() {
        let mut layer = scalar_layer();
        let first = layer.compute_with_reset(&input(&[1.0]), 0).unwrap()[[0, 0, 0]];
        let held = layer.compute_with_reset(&input(&[1.0]), 0).unwrap()[[0, 0, 0]];
        assert_ne!(first, held);

        // signal changed: state is cleared before the step
        let changed = layer.compute_with_reset(&input(&[1.0]), 1).unwrap()[[0, 0, 0]];
        assert_eq!(first, changed);
    }

    #[test]
    fn test_accessors_return_stored_parameters() {
        let parameters = distinct_parameters(2, 2);
        let layer = LSTMLayer::new(
            LayerParameters::vector(2, 2),
            parameters.clone(),
            Activation::from_kind(ActivationKind::HardTanh),
            Activation::from_kind(ActivationKind::HardSigmoid),
        )
        .unwrap();

        assert_eq!(layer.input_weights(), &parameters.input_weights);
        assert_eq!(layer.forget_weights(), &parameters.forget_weights);
        assert_eq!(layer.candidate_weights(), &parameters.candidate_weights);
        assert_eq!(layer.output_weights(), &parameters.output_weights);
        assert_eq!(layer.input_bias(), &parameters.input_bias);
        assert_eq!(layer.forget_bias(), &parameters.forget_bias);
        assert_eq!(layer.candidate_bias(), &parameters.candidate_bias);
        assert_eq!(layer.output_bias(), &parameters.output_bias);
        assert_eq!(layer.activation().kind(), Some(ActivationKind::HardTanh));
        assert_eq!(
            layer.recurrent_activation().kind(),
            Some(ActivationKind::HardSigmoid)
        );
        assert_eq!(layer.input_size(), 2);
        assert_eq!(layer.hidden_size(), 2);
        assert_eq!(layer.layer_type(), LayerType::LSTM);
        assert_eq!(layer.output_shape(), "(1, 1, 2)");
    }

    #[test]
    fn test_parallel_path_matches_reference() {
        let (input_size, hidden_size) = (40, 48);
        assert!(hidden_size * (input_size + hidden_size) >= LSTM_PARALLEL_THRESHOLD);

        let parameters = distinct_parameters(input_size, hidden_size);
        let mut layer = LSTMLayer::new(
            LayerParameters::vector(input_size, hidden_size),
            parameters.clone(),
            Activation::from_kind(ActivationKind::Tanh),
            Activation::from_kind(ActivationKind::Sigmoid),
        )
        .unwrap();

        let mut hidden = Array1::zeros(hidden_size);
        let mut cell = Array1::zeros(hidden_size);
        for step in 0..3 {
            let x = Array1::from_shape_fn(input_size, |k| ((k + step) as f64 * 0.11).cos());
            let (h, c) = reference_step(&parameters, &x, &hidden, &cell);
            hidden = h;
            cell = c;

            layer.compute(&input(x.as_slice().unwrap())).unwrap();
            for (got, want) in layer.hidden_state().iter().zip(hidden.iter()) {
                assert_abs_diff_eq!(*got, *want, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_padded_output_border_is_preserved() {
        let layer_parameters = LayerParameters::new(
            TensorShape::new(3, 3, 1),
            PaddingParameters::new(PaddingScheme::Zeros, 1),
            TensorShape::new(3, 3, 1),
            PaddingParameters::new(PaddingScheme::MinusOnes, 1),
        );
        let mut layer = LSTMLayer::new(
            layer_parameters,
            scalar_parameters(),
            Activation::from_kind(ActivationKind::Tanh),
            Activation::from_kind(ActivationKind::Sigmoid),
        )
        .unwrap();

        let mut x = Array3::zeros((3, 3, 1));
        x[[1, 1, 0]] = 1.0;
        let output = layer.compute(&x).unwrap();

        assert_abs_diff_eq!(output[[1, 1, 0]], 0.3696, epsilon = 1e-4);
        let border: Vec<f64> = output
            .indexed_iter()
            .filter(|((r, c, _), _)| (*r, *c) != (1, 1))
            .map(|(_, v)| *v)
            .collect();
        assert_eq!(border, vec![-1.0; 8]);
    }
}
