use crate::neural_network::Element;
use crate::neural_network::activation::ActivationKind;
use crate::neural_network::neural_network_trait::ActivationFunction;

/// Rectified linear unit: `max(x, 0)`, with NaN passed through.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReLU;

impl<T: Element> ActivationFunction<T> for ReLU {
    fn apply(&self, x: T) -> T {
        if x < T::zero() { T::zero() } else { x }
    }

    fn kind(&self) -> Option<ActivationKind> {
        Some(ActivationKind::ReLU)
    }
}

/// Leaky ReLU: `x` for non-negative inputs, `alpha * x` otherwise.
///
/// # Fields
///
/// - `alpha` - Slope applied to negative inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeakyReLU {
    alpha: f64,
}

impl LeakyReLU {
    /// Creates a leaky ReLU with the given negative slope.
    pub fn new(alpha: f64) -> Self {
        Self { alpha }
    }

    /// Returns the negative slope.
    pub fn get_alpha(&self) -> f64 {
        self.alpha
    }
}

impl<T: Element> ActivationFunction<T> for LeakyReLU {
    fn apply(&self, x: T) -> T {
        if x < T::zero() {
            T::from_constant(self.alpha) * x
        } else {
            x
        }
    }

    fn kind(&self) -> Option<ActivationKind> {
        Some(ActivationKind::LeakyReLU { alpha: self.alpha })
    }
}
