use crate::error::ModelError;
use crate::neural_network::Element;
use ndarray::{Array1, Array2};

pub(super) fn array2_to_vec2<T: Element>(array: &Array2<T>) -> Vec<Vec<T>> {
    array.outer_iter().map(|row| row.to_vec()).collect()
}

pub(super) fn vec2_to_array2<T: Element>(vec: &[Vec<T>], name: &str) -> Result<Array2<T>, ModelError> {
    let rows = vec.len();
    let cols = if rows > 0 { vec[0].len() } else { 0 };
    if let Some(row) = vec.iter().position(|row| row.len() != cols) {
        return Err(ModelError::DeserializationError(format!(
            "{} row {} has length {}, expected {}",
            name,
            row,
            vec[row].len(),
            cols
        )));
    }
    let flat: Vec<T> = vec.iter().flat_map(|row| row.iter().copied()).collect();
    Array2::from_shape_vec((rows, cols), flat)
        .map_err(|e| ModelError::DeserializationError(format!("{}: {}", name, e)))
}

pub(super) fn ensure_finite<'a, T: Element>(
    mut values: impl Iterator<Item = &'a T>,
    name: &str,
) -> Result<(), ModelError> {
    match values.find(|v| !v.is_finite()) {
        Some(value) => Err(ModelError::SerializationError(format!(
            "{} gate holds the non-finite value {}",
            name, value
        ))),
        None => Ok(()),
    }
}

pub(super) fn vec_to_array1<T: Element>(vec: &[T]) -> Array1<T> {
    Array1::from_vec(vec.to_vec())
}
