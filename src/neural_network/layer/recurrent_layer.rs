use super::*;
use std::sync::Arc;

/// Affine gate parameters shared by recurrent cells
pub mod gate;
/// Input validation functions for recurrent layers
mod input_validation_function;
/// A LSTM (Long Short-Term Memory) layer implementation
pub mod lstm;
/// Construction-time parameters of an LSTM layer
pub mod lstm_parameters;
/// Retained cell/hidden state of a recurrent layer
pub mod recurrent_state;
/// Reset signal that fires when its value changes
pub mod reset_trigger;

pub use gate::{Gate, LSTMGates};
pub use lstm::LSTMLayer;
pub use lstm_parameters::LSTMParameters;
pub use recurrent_state::RecurrentState;
pub use reset_trigger::ResetTrigger;

use input_validation_function::*;
