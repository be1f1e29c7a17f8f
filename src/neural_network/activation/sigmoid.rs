use crate::neural_network::Element;
use crate::neural_network::activation::ActivationKind;
use crate::neural_network::neural_network_trait::ActivationFunction;

/// Logistic sigmoid `1 / (1 + e^(-x))`, the conventional gating activation.
///
/// Evaluated without input clipping: `-inf` maps to 0, `+inf` to 1 and NaN stays NaN.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sigmoid;

impl<T: Element> ActivationFunction<T> for Sigmoid {
    fn apply(&self, x: T) -> T {
        T::one() / (T::one() + (-x).exp())
    }

    fn kind(&self) -> Option<ActivationKind> {
        Some(ActivationKind::Sigmoid)
    }
}

/// Piecewise-linear approximation of the sigmoid: `clamp(0.2 * x + 0.5, 0, 1)`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HardSigmoid;

impl<T: Element> ActivationFunction<T> for HardSigmoid {
    fn apply(&self, x: T) -> T {
        let y = T::from_constant(0.2) * x + T::from_constant(0.5);
        // explicit comparisons so NaN falls through unchanged
        if y < T::zero() {
            T::zero()
        } else if y > T::one() {
            T::one()
        } else {
            y
        }
    }

    fn kind(&self) -> Option<ActivationKind> {
        Some(ActivationKind::HardSigmoid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_sigmoid_values() {
        assert_eq!(ActivationFunction::<f64>::apply(&Sigmoid, 0.0), 0.5);
        assert_abs_diff_eq!(
            ActivationFunction::<f64>::apply(&Sigmoid, 1.0),
            0.7310585786300049,
            epsilon = 1e-12
        );
        assert_eq!(ActivationFunction::<f32>::apply(&Sigmoid, f32::NEG_INFINITY), 0.0);
        assert_eq!(ActivationFunction::<f32>::apply(&Sigmoid, f32::INFINITY), 1.0);
        assert!(ActivationFunction::<f32>::apply(&Sigmoid, f32::NAN).is_nan());
    }

    #[test]
    fn test_hard_sigmoid_values() {
        assert_abs_diff_eq!(
            ActivationFunction::<f64>::apply(&HardSigmoid, 1.0),
            0.7,
            epsilon = 1e-12
        );
        assert_eq!(ActivationFunction::<f64>::apply(&HardSigmoid, 10.0), 1.0);
        assert_eq!(ActivationFunction::<f64>::apply(&HardSigmoid, -10.0), 0.0);
        assert!(ActivationFunction::<f64>::apply(&HardSigmoid, f64::NAN).is_nan());
    }
}
