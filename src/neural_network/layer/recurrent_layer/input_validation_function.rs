use super::*;

/// Validates that a dimension value is greater than 0
///
/// # Parameters
///
/// - `value` - The dimension value to validate
/// - `name` - The name of the dimension for error messages
///
/// # Returns
///
/// * `Ok(())` if validation passes
/// * `Err(ModelError::DimensionMismatch)` if validation fails
pub(super) fn validate_dimension_greater_than_zero(
    value: usize,
    name: &str,
) -> Result<(), ModelError> {
    if value == 0 {
        return Err(ModelError::DimensionMismatch(format!(
            "{} must be greater than 0",
            name
        )));
    }
    Ok(())
}

/// Validates the shapes of one gate's weight matrix and bias vector
///
/// # Parameters
///
/// - `name` - Gate name for error messages (e.g. "forget")
/// - `weights` - Weight matrix, expected shape (hidden_size, input_size + hidden_size)
/// - `bias` - Bias vector, expected length hidden_size
/// - `input_size` - Number of input elements per timestep
/// - `hidden_size` - Number of hidden units
///
/// # Returns
///
/// * `Ok(())` if validation passes
/// * `Err(ModelError::DimensionMismatch)` if either shape is wrong
pub(super) fn validate_gate_shape<T: Element>(
    name: &str,
    weights: &Array2<T>,
    bias: &Array1<T>,
    input_size: usize,
    hidden_size: usize,
) -> Result<(), ModelError> {
    let expected = (hidden_size, input_size + hidden_size);
    if weights.dim() != expected {
        return Err(ModelError::DimensionMismatch(format!(
            "{} weights have shape {:?}, expected {:?} (hidden_size, input_size + hidden_size)",
            name,
            weights.dim(),
            expected
        )));
    }
    if bias.len() != hidden_size {
        return Err(ModelError::DimensionMismatch(format!(
            "{} bias has length {}, expected hidden_size {}",
            name,
            bias.len(),
            hidden_size
        )));
    }
    Ok(())
}
