use super::*;

/// Output buffer of a layer.
///
/// Holds the full output tensor, padding border included. The border is filled according to
/// the padding scheme when the buffer is created; afterwards only the active region is
/// ever written.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerOutput<T: Element> {
    tensor: Tensor<T>,
    padding: usize,
}

impl<T: Element> LayerOutput<T> {
    /// Allocates a buffer of `shape`, with the padding border filled and the active region zeroed.
    ///
    /// `shape` must have passed [`LayerParameters::validate`].
    pub fn new(shape: &TensorShape, padding: &PaddingParameters) -> Self {
        let scheme = padding.scheme;
        let size = padding.size;
        let (rows, columns, _) = shape.dim();

        let mut tensor = Tensor::<T>::from_shape_fn(shape.dim(), |(row, column, _)| {
            scheme.value_at::<T>(row, column)
        });
        let border = size.saturating_mul(2);
        if rows > border && columns > border {
            tensor
                .slice_mut(s![size..rows - size, size..columns - size, ..])
                .fill(T::zero());
        }

        Self {
            tensor,
            padding: size,
        }
    }

    /// Returns the full output tensor.
    pub fn tensor(&self) -> &Tensor<T> {
        &self.tensor
    }

    /// Writes `values` into the active region in row-major (row, column, channel) order.
    ///
    /// The caller guarantees `values` has exactly as many elements as the active region;
    /// layers check this once at construction.
    pub fn write_active(&mut self, values: &Array1<T>) {
        let padding = self.padding;
        let (rows, columns, _) = self.tensor.dim();
        let mut active = self
            .tensor
            .slice_mut(s![padding..rows - padding, padding..columns - padding, ..]);
        active
            .iter_mut()
            .zip(values.iter())
            .for_each(|(dst, &src)| *dst = src);
    }
}
