use crate::neural_network::Element;
use crate::neural_network::activation::ActivationKind;
use crate::neural_network::neural_network_trait::ActivationFunction;

/// Identity activation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Linear;

impl<T: Element> ActivationFunction<T> for Linear {
    fn apply(&self, x: T) -> T {
        x
    }

    fn kind(&self) -> Option<ActivationKind> {
        Some(ActivationKind::Linear)
    }

    fn apply_in_place(&self, _values: &mut ndarray::Array1<T>) {}
}
