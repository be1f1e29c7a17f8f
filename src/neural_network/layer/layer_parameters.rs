use super::*;

/// Largest number of elements a layer tensor may hold.
///
/// Bounded so the buffer of the widest element type (`f64`) stays within `isize::MAX` bytes.
pub const MAX_TENSOR_ELEMENTS: usize = isize::MAX as usize / std::mem::size_of::<f64>();

/// Shape of a (rows, columns, channels) tensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TensorShape {
    pub rows: usize,
    pub columns: usize,
    pub channels: usize,
}

impl TensorShape {
    /// Creates a tensor shape.
    pub fn new(rows: usize, columns: usize, channels: usize) -> Self {
        Self {
            rows,
            columns,
            channels,
        }
    }

    /// Shape of a plain vector of `size` elements laid out as 1 x 1 x size.
    pub fn vector(size: usize) -> Self {
        Self::new(1, 1, size)
    }

    /// Total number of elements, or `None` if the product overflows `usize`.
    pub fn size(&self) -> Option<usize> {
        self.rows
            .checked_mul(self.columns)?
            .checked_mul(self.channels)
    }

    /// Returns the shape with a border of `padding` removed from rows and columns,
    /// or `None` when the border leaves nothing behind.
    pub fn minus_padding(&self, padding: usize) -> Option<TensorShape> {
        let border = padding.checked_mul(2)?;
        let rows = self.rows.checked_sub(border)?;
        let columns = self.columns.checked_sub(border)?;
        if rows == 0 || columns == 0 || self.channels == 0 {
            return None;
        }
        Some(TensorShape::new(rows, columns, self.channels))
    }

    /// Returns the dimensions as an `ndarray` shape tuple.
    pub fn dim(&self) -> (usize, usize, usize) {
        (self.rows, self.columns, self.channels)
    }
}

impl std::fmt::Display for TensorShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.rows, self.columns, self.channels)
    }
}

/// Shapes and padding common to every layer.
///
/// Both shapes include their padding border. The active region of a tensor is the shape
/// minus the border; layers read only the active region of their input and write only the
/// active region of their output.
///
/// # Fields
///
/// - `input_shape` - Shape of the tensor passed to `compute`, padding included
/// - `input_padding` - Padding border of the input tensor
/// - `output_shape` - Shape of the output buffer, padding included
/// - `output_padding` - Padding border of the output buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerParameters {
    pub input_shape: TensorShape,
    pub input_padding: PaddingParameters,
    pub output_shape: TensorShape,
    pub output_padding: PaddingParameters,
}

impl LayerParameters {
    /// Creates layer parameters.
    pub fn new(
        input_shape: TensorShape,
        input_padding: PaddingParameters,
        output_shape: TensorShape,
        output_padding: PaddingParameters,
    ) -> Self {
        Self {
            input_shape,
            input_padding,
            output_shape,
            output_padding,
        }
    }

    /// Parameters for an unpadded layer mapping a vector of `input_size` elements to a
    /// vector of `output_size` elements.
    pub fn vector(input_size: usize, output_size: usize) -> Self {
        Self::new(
            TensorShape::vector(input_size),
            PaddingParameters::none(),
            TensorShape::vector(output_size),
            PaddingParameters::none(),
        )
    }

    /// Number of elements in the active region of the input.
    pub fn input_size_minus_padding(&self) -> usize {
        self.input_shape
            .minus_padding(self.input_padding.size)
            .and_then(|shape| shape.size())
            .unwrap_or(0)
    }

    /// Number of elements in the active region of the output.
    pub fn output_size_minus_padding(&self) -> usize {
        self.output_shape
            .minus_padding(self.output_padding.size)
            .and_then(|shape| shape.size())
            .unwrap_or(0)
    }

    /// Checks that both shapes can be allocated and that both padding borders leave a
    /// non-empty active region.
    ///
    /// # Returns
    ///
    /// - `Ok(())` - If both shapes are usable
    /// - `Err(ModelError::DimensionMismatch)` - If a shape is too large to allocate, is empty, or its border consumes it
    pub fn validate(&self) -> Result<(), ModelError> {
        let checks = [
            ("input", &self.input_shape, &self.input_padding),
            ("output", &self.output_shape, &self.output_padding),
        ];
        for (name, shape, padding) in checks {
            if !shape.size().is_some_and(|size| size <= MAX_TENSOR_ELEMENTS) {
                return Err(ModelError::DimensionMismatch(format!(
                    "{} shape {} exceeds the maximum of {} elements",
                    name, shape, MAX_TENSOR_ELEMENTS
                )));
            }
            if shape.minus_padding(padding.size).is_none() {
                return Err(ModelError::DimensionMismatch(format!(
                    "{} shape {} has no active region inside a padding border of {}",
                    name, shape, padding.size
                )));
            }
        }
        Ok(())
    }

    /// Copies the active region of `input` into a flat vector in row-major order.
    ///
    /// # Parameters
    ///
    /// - `input` - Tensor handed to `compute`
    ///
    /// # Returns
    ///
    /// - `Ok(Array1<T>)` - The active input elements
    /// - `Err(ModelError::ShapeMismatch)` - If the active region of `input` does not hold the expected number of elements
    pub fn flatten_input<T: Element>(&self, input: &Tensor<T>) -> Result<Array1<T>, ModelError> {
        let expected = self.input_size_minus_padding();
        let padding = self.input_padding.size;
        let (rows, columns, _) = input.dim();

        let border = padding.saturating_mul(2);
        if rows <= border || columns <= border {
            return Err(ModelError::ShapeMismatch {
                expected,
                actual: input.len(),
            });
        }

        let active = input.slice(s![padding..rows - padding, padding..columns - padding, ..]);
        if active.len() != expected {
            return Err(ModelError::ShapeMismatch {
                expected,
                actual: active.len(),
            });
        }

        Ok(active.iter().copied().collect())
    }
}
