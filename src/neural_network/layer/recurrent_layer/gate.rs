use super::*;

/// Weights and bias of one affine gate transform.
///
/// # Fields
///
/// - `weights` - Weight matrix with shape (hidden_size, input_size + hidden_size), applied to `[input ; previous hidden]`
/// - `bias` - Bias vector of length hidden_size
#[derive(Debug, Clone, PartialEq)]
pub struct Gate<T: Element> {
    pub weights: Array2<T>,
    pub bias: Array1<T>,
}

impl<T: Element> Gate<T> {
    /// Creates a gate after checking its shapes against the layer sizes.
    ///
    /// # Errors
    ///
    /// - `ModelError::DimensionMismatch` - If the weights are not (hidden_size, input_size + hidden_size) or the bias is not hidden_size long
    pub fn new(
        name: &str,
        weights: Array2<T>,
        bias: Array1<T>,
        input_size: usize,
        hidden_size: usize,
    ) -> Result<Self, ModelError> {
        validate_gate_shape(name, &weights, &bias, input_size, hidden_size)?;
        Ok(Self { weights, bias })
    }

    /// Computes the gate pre-activation `weights · concat + bias`.
    #[inline]
    pub fn preactivation(&self, concat: &Array1<T>) -> Array1<T> {
        self.weights.dot(concat) + &self.bias
    }
}

/// The four validated gates of an LSTM layer.
///
/// Immutable once built. Layers hold it behind an `Arc`, so clones of a layer share one
/// copy of the parameters while keeping their own retained state.
#[derive(Debug, Clone, PartialEq)]
pub struct LSTMGates<T: Element> {
    pub input: Gate<T>,
    pub forget: Gate<T>,
    pub candidate: Gate<T>,
    pub output: Gate<T>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_preactivation() {
        let gate = Gate::new(
            "input",
            array![[1.0f64, 2.0, 0.5], [0.0, -1.0, 1.0]],
            array![0.5, -0.5],
            1,
            2,
        )
        .unwrap();
        let concat = array![1.0, 2.0, 4.0];
        assert_eq!(gate.preactivation(&concat), array![7.5, 1.5]);
    }

    #[test]
    fn test_rejects_wrong_column_count() {
        let result = Gate::new("output", Array2::<f32>::zeros((2, 2)), Array1::zeros(2), 1, 2);
        assert!(matches!(result, Err(ModelError::DimensionMismatch(_))));
    }

    #[test]
    fn test_rejects_wrong_bias_length() {
        let result = Gate::new("forget", Array2::<f32>::zeros((2, 3)), Array1::zeros(3), 1, 2);
        assert!(matches!(result, Err(ModelError::DimensionMismatch(_))));
    }
}
