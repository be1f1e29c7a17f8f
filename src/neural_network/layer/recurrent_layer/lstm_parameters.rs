use super::*;

/// Weights and biases applicable to an LSTM layer.
///
/// Every weight matrix has shape (hidden_size, input_size + hidden_size) and acts on the
/// concatenation `[input ; previous hidden]`, so the first `input_size` columns are the
/// input weights and the remaining `hidden_size` columns the recurrent weights. Every bias
/// has length hidden_size.
///
/// # Fields
///
/// - `input_weights` / `input_bias` - Input gate, controls how much of the candidate enters the cell
/// - `forget_weights` / `forget_bias` - Forget gate, controls how much of the previous cell is kept
/// - `candidate_weights` / `candidate_bias` - Candidate transform, proposes new cell values
/// - `output_weights` / `output_bias` - Output gate, controls how much of the squashed cell is exposed
#[derive(Debug, Clone, PartialEq)]
pub struct LSTMParameters<T: Element> {
    pub input_weights: Array2<T>,
    pub forget_weights: Array2<T>,
    pub candidate_weights: Array2<T>,
    pub output_weights: Array2<T>,

    pub input_bias: Array1<T>,
    pub forget_bias: Array1<T>,
    pub candidate_bias: Array1<T>,
    pub output_bias: Array1<T>,
}

impl<T: Element> LSTMParameters<T> {
    /// Splits a fused parameter block into per-gate parameters.
    ///
    /// Some model stores keep the four gates stacked as `[W_i; W_f; W_c; W_o]` with shape
    /// (4 * hidden_size, input_size + hidden_size) and one bias of length 4 * hidden_size in
    /// the same order.
    ///
    /// # Parameters
    ///
    /// - `weights` - Stacked weight block
    /// - `bias` - Stacked bias vector
    ///
    /// # Returns
    ///
    /// - `Ok(LSTMParameters<T>)` - The four gates split out in input, forget, candidate, output order
    /// - `Err(ModelError::DimensionMismatch)` - If the row count is zero or not a multiple of 4, or the bias length differs from it
    pub fn from_stacked(weights: &Array2<T>, bias: &Array1<T>) -> Result<Self, ModelError> {
        let rows = weights.nrows();
        if rows == 0 || rows % 4 != 0 {
            return Err(ModelError::DimensionMismatch(format!(
                "stacked weights have {} rows, expected a positive multiple of 4",
                rows
            )));
        }
        if bias.len() != rows {
            return Err(ModelError::DimensionMismatch(format!(
                "stacked bias has length {}, expected {}",
                bias.len(),
                rows
            )));
        }

        let hidden_size = rows / 4;
        let block = |k: usize| {
            (
                weights
                    .slice(s![k * hidden_size..(k + 1) * hidden_size, ..])
                    .to_owned(),
                bias.slice(s![k * hidden_size..(k + 1) * hidden_size])
                    .to_owned(),
            )
        };
        let (input_weights, input_bias) = block(0);
        let (forget_weights, forget_bias) = block(1);
        let (candidate_weights, candidate_bias) = block(2);
        let (output_weights, output_bias) = block(3);

        Ok(Self {
            input_weights,
            forget_weights,
            candidate_weights,
            output_weights,
            input_bias,
            forget_bias,
            candidate_bias,
            output_bias,
        })
    }

    /// Validates every gate against the layer sizes and converts to [`LSTMGates`].
    ///
    /// # Errors
    ///
    /// - `ModelError::DimensionMismatch` - If either size is zero or any matrix or bias has the wrong shape
    pub fn into_gates(
        self,
        input_size: usize,
        hidden_size: usize,
    ) -> Result<LSTMGates<T>, ModelError> {
        validate_dimension_greater_than_zero(input_size, "input_size")?;
        validate_dimension_greater_than_zero(hidden_size, "hidden_size")?;

        Ok(LSTMGates {
            input: Gate::new(
                "input",
                self.input_weights,
                self.input_bias,
                input_size,
                hidden_size,
            )?,
            forget: Gate::new(
                "forget",
                self.forget_weights,
                self.forget_bias,
                input_size,
                hidden_size,
            )?,
            candidate: Gate::new(
                "candidate",
                self.candidate_weights,
                self.candidate_bias,
                input_size,
                hidden_size,
            )?,
            output: Gate::new(
                "output",
                self.output_weights,
                self.output_bias,
                input_size,
                hidden_size,
            )?,
        })
    }
}
