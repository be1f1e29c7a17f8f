use super::*;

/// Container for borrowed views of a layer's parameters
///
/// # Variants
///
/// - `LSTM` - The four gate matrices and biases of an LSTM layer
/// - `Empty` - Represents a layer with no parameters
pub enum LayerWeight<'a, T: Element> {
    LSTM(LSTMLayerWeight<'a, T>),
    Empty,
}

/// Weights of a single LSTM gate
///
/// # Fields
///
/// - `weights` - Weight matrix with shape (hidden_size, input_size + hidden_size)
/// - `bias` - Bias vector of length hidden_size
pub struct LSTMGateWeight<'a, T: Element> {
    pub weights: &'a Array2<T>,
    pub bias: &'a Array1<T>,
}

/// Weights of a Long Short-Term Memory (LSTM) layer
///
/// # Fields
///
/// - `input` - Input gate, which controls what new information to store
/// - `forget` - Forget gate, which controls what information to discard
/// - `candidate` - Candidate transform, which proposes new cell state values
/// - `output` - Output gate, which controls what to expose as the hidden state
pub struct LSTMLayerWeight<'a, T: Element> {
    pub input: LSTMGateWeight<'a, T>,
    pub forget: LSTMGateWeight<'a, T>,
    pub candidate: LSTMGateWeight<'a, T>,
    pub output: LSTMGateWeight<'a, T>,
}
