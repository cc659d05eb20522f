//! Kernel choices for SVM training
//!
//! A kernel choice names the similarity function the solver should use and
//! carries that function's hyperparameters. The kernel computation itself is
//! the solver's business; nothing here evaluates K(x, y).

use crate::core::traits::ParamUpdate;
use crate::native::{KernelType, SolverParams};
use serde::{Deserialize, Serialize};

/// Kernel function selection with its hyperparameters
///
/// Immutable value object; constructors never validate. A negative gamma or
/// degree is rejected by the solver boundary (see [`SolverParams::check`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Kernel {
    /// K(x, y) = x^T y
    Linear,
    /// K(x, y) = (gamma * x^T y + coef0)^degree
    Polynomial { degree: i32, gamma: f64, coef0: f64 },
    /// K(x, y) = exp(-gamma * ||x - y||^2)
    Rbf { gamma: f64 },
    /// K(x, y) = tanh(gamma * x^T y + coef0)
    Sigmoid { gamma: f64, coef0: f64 },
    /// Kernel values supplied by the caller as an extra data column
    Precomputed,
}

impl Kernel {
    /// Linear kernel
    pub fn linear() -> Self {
        Self::Linear
    }

    /// Polynomial kernel of the given degree
    pub fn polynomial(degree: i32, gamma: f64, coef0: f64) -> Self {
        Self::Polynomial {
            degree,
            gamma,
            coef0,
        }
    }

    /// RBF kernel with an explicit gamma
    pub fn rbf(gamma: f64) -> Self {
        Self::Rbf { gamma }
    }

    /// RBF kernel with gamma left to the solver
    ///
    /// A gamma of zero is the solver's sentinel for "substitute
    /// 1/n_features once the training data is known".
    pub fn rbf_auto() -> Self {
        Self::Rbf { gamma: 0.0 }
    }

    /// Sigmoid kernel
    pub fn sigmoid(gamma: f64, coef0: f64) -> Self {
        Self::Sigmoid { gamma, coef0 }
    }

    /// Precomputed kernel matrix
    pub fn precomputed() -> Self {
        Self::Precomputed
    }

    /// The solver's kernel code for this choice
    pub fn kernel_type(&self) -> KernelType {
        match self {
            Kernel::Linear => KernelType::Linear,
            Kernel::Polynomial { .. } => KernelType::Polynomial,
            Kernel::Rbf { .. } => KernelType::Rbf,
            Kernel::Sigmoid { .. } => KernelType::Sigmoid,
            Kernel::Precomputed => KernelType::Precomputed,
        }
    }
}

impl Default for Kernel {
    /// RBF with solver-resolved gamma, the reference train tool's default
    fn default() -> Self {
        Self::rbf_auto()
    }
}

impl ParamUpdate for Kernel {
    /// Writes the kernel code plus exactly the hyperparameters this variant
    /// carries; a linear or precomputed kernel leaves degree/gamma/coef0
    /// untouched.
    fn update(&self, params: SolverParams) -> SolverParams {
        let params = SolverParams {
            kernel_type: self.kernel_type(),
            ..params
        };

        match self {
            Kernel::Linear | Kernel::Precomputed => params,
            Kernel::Polynomial {
                degree,
                gamma,
                coef0,
            } => SolverParams {
                degree: *degree,
                gamma: *gamma,
                coef0: *coef0,
                ..params
            },
            Kernel::Rbf { gamma } => SolverParams {
                gamma: *gamma,
                ..params
            },
            Kernel::Sigmoid { gamma, coef0 } => SolverParams {
                gamma: *gamma,
                coef0: *coef0,
                ..params
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_rbf_update_writes_code_and_gamma() {
        let params = Kernel::rbf(0.25).update(SolverParams::default());

        assert_eq!(params.kernel_type, KernelType::Rbf);
        assert_abs_diff_eq!(params.gamma, 0.25);
        // Untouched hyperparameters keep the record's prior values.
        assert_eq!(params.degree, 3);
        assert_eq!(params.coef0, 0.0);
    }

    #[test]
    fn test_polynomial_update_writes_all_three() {
        let params = Kernel::polynomial(5, 0.5, 1.0).update(SolverParams::default());

        assert_eq!(params.kernel_type, KernelType::Polynomial);
        assert_eq!(params.degree, 5);
        assert_abs_diff_eq!(params.gamma, 0.5);
        assert_abs_diff_eq!(params.coef0, 1.0);
    }

    #[test]
    fn test_sigmoid_update() {
        let params = Kernel::sigmoid(0.1, -1.0).update(SolverParams::default());

        assert_eq!(params.kernel_type, KernelType::Sigmoid);
        assert_abs_diff_eq!(params.gamma, 0.1);
        assert_abs_diff_eq!(params.coef0, -1.0);
    }

    #[test]
    fn test_linear_touches_only_the_code() {
        let base = SolverParams {
            gamma: 0.75,
            degree: 7,
            coef0: 2.0,
            ..SolverParams::default()
        };
        let params = Kernel::linear().update(base.clone());

        assert_eq!(params.kernel_type, KernelType::Linear);
        assert_eq!(params.gamma, base.gamma);
        assert_eq!(params.degree, base.degree);
        assert_eq!(params.coef0, base.coef0);
    }

    #[test]
    fn test_precomputed_touches_only_the_code() {
        let params = Kernel::precomputed().update(SolverParams::default());
        assert_eq!(params.kernel_type, KernelType::Precomputed);
        assert_eq!(params.gamma, 0.0);
    }

    #[test]
    fn test_auto_gamma_is_the_zero_sentinel() {
        assert_eq!(Kernel::rbf_auto(), Kernel::Rbf { gamma: 0.0 });
        assert_eq!(Kernel::default(), Kernel::rbf_auto());
    }

    #[test]
    fn test_kernel_type_mapping() {
        assert_eq!(Kernel::linear().kernel_type(), KernelType::Linear);
        assert_eq!(
            Kernel::polynomial(3, 0.0, 0.0).kernel_type(),
            KernelType::Polynomial
        );
        assert_eq!(Kernel::rbf(1.0).kernel_type(), KernelType::Rbf);
        assert_eq!(Kernel::sigmoid(1.0, 0.0).kernel_type(), KernelType::Sigmoid);
        assert_eq!(Kernel::precomputed().kernel_type(), KernelType::Precomputed);
    }

    #[test]
    fn test_serde_uses_canonical_kernel_names() {
        let kernel = Kernel::rbf(0.5);
        let json = serde_json::to_string(&kernel).unwrap();
        assert!(json.contains("\"type\":\"rbf\""));

        let back: Kernel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, kernel);

        let json = serde_json::to_string(&Kernel::linear()).unwrap();
        assert_eq!(json, "{\"type\":\"linear\"}");
    }
}
