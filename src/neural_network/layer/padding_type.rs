use super::*;

/// Defines the values written into the padding border of a tensor.
///
/// Padding cells are filled once when the buffer is created and never written again:
/// - `Zeros`: Every padding cell is 0
/// - `MinusOnes`: Every padding cell is -1
/// - `AlternatingZeroAndOnes`: Cells alternate 0/1 in a checkerboard over (row, column)
/// - `Min`: The lowest finite value of the element type, for use before max pooling
/// - `Max`: The largest finite value of the element type, for use before min pooling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaddingScheme {
    #[default]
    Zeros,
    MinusOnes,
    AlternatingZeroAndOnes,
    Min,
    Max,
}

impl PaddingScheme {
    /// Returns the padding value for the cell at (`row`, `column`).
    pub fn value_at<T: Element>(&self, row: usize, column: usize) -> T {
        match self {
            PaddingScheme::Zeros => T::zero(),
            PaddingScheme::MinusOnes => -T::one(),
            PaddingScheme::AlternatingZeroAndOnes => {
                if (row + column) % 2 == 0 {
                    T::zero()
                } else {
                    T::one()
                }
            }
            PaddingScheme::Min => T::min_value(),
            PaddingScheme::Max => T::max_value(),
        }
    }
}

/// Padding border around the rows and columns of a tensor.
///
/// # Fields
///
/// - `scheme` - How padding cells are filled
/// - `size` - Width of the border on each side of the row and column axes; channels are never padded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaddingParameters {
    pub scheme: PaddingScheme,
    pub size: usize,
}

impl PaddingParameters {
    /// Creates padding parameters.
    pub fn new(scheme: PaddingScheme, size: usize) -> Self {
        Self { scheme, size }
    }

    /// No padding border.
    pub fn none() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_values() {
        assert_eq!(PaddingScheme::Zeros.value_at::<f32>(1, 2), 0.0);
        assert_eq!(PaddingScheme::MinusOnes.value_at::<f32>(0, 0), -1.0);
        assert_eq!(PaddingScheme::AlternatingZeroAndOnes.value_at::<f64>(0, 0), 0.0);
        assert_eq!(PaddingScheme::AlternatingZeroAndOnes.value_at::<f64>(0, 1), 1.0);
        assert_eq!(PaddingScheme::Min.value_at::<f64>(3, 3), f64::MIN);
        assert_eq!(PaddingScheme::Max.value_at::<f32>(3, 3), f32::MAX);
    }
}
