use crate::neural_network::Element;
use crate::neural_network::activation::ActivationKind;
use crate::neural_network::neural_network_trait::ActivationFunction;

/// Hyperbolic tangent, the conventional squashing activation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tanh;

impl<T: Element> ActivationFunction<T> for Tanh {
    fn apply(&self, x: T) -> T {
        x.tanh()
    }

    fn kind(&self) -> Option<ActivationKind> {
        Some(ActivationKind::Tanh)
    }
}

/// Piecewise-linear tanh: `clamp(x, -1, 1)`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HardTanh;

impl<T: Element> ActivationFunction<T> for HardTanh {
    fn apply(&self, x: T) -> T {
        if x < -T::one() {
            -T::one()
        } else if x > T::one() {
            T::one()
        } else {
            x
        }
    }

    fn kind(&self) -> Option<ActivationKind> {
        Some(ActivationKind::HardTanh)
    }
}
