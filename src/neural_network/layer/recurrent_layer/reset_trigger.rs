/// Reset signal for recurrent layers.
///
/// Tracks the last observed signal value and fires whenever a new value differs from it.
/// The initial value is 0, so a signal that is held at 0 never fires.
///
/// # Examples
///
/// ```rust
/// use gated_recurrent::neural_network::layer::recurrent_layer::ResetTrigger;
///
/// let mut trigger = ResetTrigger::new();
/// assert!(!trigger.observe(0));
/// assert!(trigger.observe(1));
/// assert!(!trigger.observe(1));
/// assert!(trigger.observe(0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResetTrigger {
    last_signal: i32,
}

impl ResetTrigger {
    /// Creates a trigger whose last observed value is 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `signal` and returns `true` if it differs from the previous value.
    pub fn observe(&mut self, signal: i32) -> bool {
        let fired = signal != self.last_signal;
        self.last_signal = signal;
        fired
    }

    /// Returns the last observed signal value.
    pub fn get_last_signal(&self) -> i32 {
        self.last_signal
    }
}
