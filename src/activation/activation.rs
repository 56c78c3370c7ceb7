use std::convert::Infallible;
use std::str::FromStr;

/// Element-wise nonlinearity applied after a layer's linear transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationFunction {
    Sigmoid,
}

impl ActivationFunction {
    /// Resolves an activation by name.
    ///
    /// Only `"sigmoid"` is implemented, and every other name also resolves to
    /// `Sigmoid` (with a warning) rather than failing.
    pub fn from_name(name: &str) -> ActivationFunction {
        match name {
            "sigmoid" => ActivationFunction::Sigmoid,
            other => {
                log::warn!("unknown activation {other:?}, falling back to sigmoid");
                ActivationFunction::Sigmoid
            }
        }
    }

    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => 1.0 / (1.0 + (-x).exp()),
        }
    }

    /// Derivative expressed in terms of the activated output `y = function(x)`,
    /// not the pre-activation input.
    pub fn derivative(&self, y: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => y * (1.0 - y),
        }
    }
}

impl FromStr for ActivationFunction {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ActivationFunction::from_name(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn sigmoid_values() {
        let s = ActivationFunction::Sigmoid;
        assert_abs_diff_eq!(s.function(0.0), 0.5);
        assert_abs_diff_eq!(s.function(2.0), 0.880_797_077_977_882_3, epsilon = 1e-12);
        assert_abs_diff_eq!(s.function(-2.0), 1.0 - s.function(2.0), epsilon = 1e-12);
    }

    #[test]
    fn derivative_takes_activated_output() {
        let s = ActivationFunction::Sigmoid;
        let y = s.function(0.0);
        assert_abs_diff_eq!(s.derivative(y), 0.25);
        assert_abs_diff_eq!(s.derivative(0.9), 0.09, epsilon = 1e-12);
    }

    #[test]
    fn every_name_resolves_to_sigmoid() {
        assert_eq!(ActivationFunction::from_name("sigmoid"), ActivationFunction::Sigmoid);
        assert_eq!(ActivationFunction::from_name("relu"), ActivationFunction::Sigmoid);
        assert_eq!("".parse::<ActivationFunction>(), Ok(ActivationFunction::Sigmoid));
    }
}
