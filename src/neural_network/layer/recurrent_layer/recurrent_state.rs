use super::*;

/// Retained state of an LSTM layer.
///
/// # Fields
///
/// - `cell` - Long-term memory vector carried across timesteps
/// - `hidden` - Short-term output vector, fed back as part of the next timestep's input
#[derive(Debug, Clone, PartialEq)]
pub struct RecurrentState<T: Element> {
    cell: Array1<T>,
    hidden: Array1<T>,
}

impl<T: Element> RecurrentState<T> {
    /// Creates an all-zero state for `hidden_size` units.
    pub fn zeros(hidden_size: usize) -> Self {
        Self {
            cell: Array1::zeros(hidden_size),
            hidden: Array1::zeros(hidden_size),
        }
    }

    /// Returns the cell state.
    pub fn cell(&self) -> &Array1<T> {
        &self.cell
    }

    /// Returns the hidden state.
    pub fn hidden(&self) -> &Array1<T> {
        &self.hidden
    }

    /// Returns `true` if both vectors are entirely zero.
    pub fn is_zero(&self) -> bool {
        self.cell.iter().chain(self.hidden.iter()).all(|v| *v == T::zero())
    }

    /// Sets both vectors to zero without reallocating.
    pub fn reset(&mut self) {
        self.cell.fill(T::zero());
        self.hidden.fill(T::zero());
    }

    pub(super) fn update(&mut self, cell: Array1<T>, hidden: Array1<T>) {
        self.cell = cell;
        self.hidden = hidden;
    }
}
