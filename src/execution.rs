//! Execution parameters for a training run
//!
//! Run control as opposed to problem definition: how precisely to optimize,
//! whether to cross-validate, and the solver's resource and output knobs.

use crate::core::traits::ParamUpdate;
use crate::native::SolverParams;
use serde::{Deserialize, Serialize};

/// Run-control parameters applied last in the update order
///
/// Because execution updates are applied after formulation and kernel
/// updates, these values take precedence wherever fields overlap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionParams {
    /// Termination tolerance of the optimizer
    pub eps: f64,
    /// Cross-validation fold count; 0 disables cross-validation
    pub n_folds: u32,
    /// Kernel cache size in megabytes
    pub cache_size_mb: f64,
    /// Shrinking heuristics on/off
    pub shrinking: bool,
    /// Train with probability estimates
    pub probability: bool,
}

impl ExecutionParams {
    /// Execution parameters with the given tolerance and fold count,
    /// standard values for everything else
    pub fn new(eps: f64, n_folds: u32) -> Self {
        Self {
            eps,
            n_folds,
            ..Self::default()
        }
    }

    /// Set the termination tolerance
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    /// Set the cross-validation fold count (0 disables)
    pub fn with_folds(mut self, n_folds: u32) -> Self {
        self.n_folds = n_folds;
        self
    }

    /// Set the kernel cache size in megabytes
    pub fn with_cache_size_mb(mut self, cache_size_mb: f64) -> Self {
        self.cache_size_mb = cache_size_mb;
        self
    }

    /// Enable or disable the shrinking heuristics
    pub fn with_shrinking(mut self, shrinking: bool) -> Self {
        self.shrinking = shrinking;
        self
    }

    /// Enable or disable probability estimates
    pub fn with_probability(mut self, probability: bool) -> Self {
        self.probability = probability;
        self
    }

    /// Whether this run performs cross-validation
    pub fn is_cross_validation(&self) -> bool {
        self.n_folds > 0
    }
}

impl Default for ExecutionParams {
    /// The standard execution configuration: eps 1e-3, no cross-validation,
    /// 100 MB cache, shrinking on, probability off
    fn default() -> Self {
        Self {
            eps: 0.001,
            n_folds: 0,
            cache_size_mb: 100.0,
            shrinking: true,
            probability: false,
        }
    }
}

impl ParamUpdate for ExecutionParams {
    fn update(&self, params: SolverParams) -> SolverParams {
        SolverParams {
            eps: self.eps,
            n_folds: self.n_folds,
            cache_size_mb: self.cache_size_mb,
            shrinking: self.shrinking,
            probability: self.probability,
            ..params
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_standard_execution_defaults() {
        let execution = ExecutionParams::default();

        assert_abs_diff_eq!(execution.eps, 0.001);
        assert_eq!(execution.n_folds, 0);
        assert_abs_diff_eq!(execution.cache_size_mb, 100.0);
        assert!(execution.shrinking);
        assert!(!execution.probability);
        assert!(!execution.is_cross_validation());
    }

    #[test]
    fn test_new_fills_remaining_fields_with_standard_values() {
        let execution = ExecutionParams::new(0.01, 5);

        assert_abs_diff_eq!(execution.eps, 0.01);
        assert_eq!(execution.n_folds, 5);
        assert!(execution.is_cross_validation());
        assert_abs_diff_eq!(execution.cache_size_mb, 100.0);
        assert!(execution.shrinking);
    }

    #[test]
    fn test_builder_methods() {
        let execution = ExecutionParams::default()
            .with_eps(0.0001)
            .with_folds(10)
            .with_cache_size_mb(512.0)
            .with_shrinking(false)
            .with_probability(true);

        assert_abs_diff_eq!(execution.eps, 0.0001);
        assert_eq!(execution.n_folds, 10);
        assert_abs_diff_eq!(execution.cache_size_mb, 512.0);
        assert!(!execution.shrinking);
        assert!(execution.probability);
    }

    #[test]
    fn test_update_writes_all_run_control_fields() {
        let execution = ExecutionParams::new(0.005, 3)
            .with_cache_size_mb(200.0)
            .with_shrinking(false)
            .with_probability(true);
        let params = execution.update(SolverParams::default());

        assert_abs_diff_eq!(params.eps, 0.005);
        assert_eq!(params.n_folds, 3);
        assert_abs_diff_eq!(params.cache_size_mb, 200.0);
        assert!(!params.shrinking);
        assert!(params.probability);
    }

    #[test]
    fn test_update_leaves_problem_fields_alone() {
        let base = SolverParams {
            c: 8.0,
            gamma: 0.5,
            ..SolverParams::default()
        };
        let params = ExecutionParams::default().update(base.clone());

        assert_eq!(params.c, base.c);
        assert_eq!(params.gamma, base.gamma);
        assert_eq!(params.svm_type, base.svm_type);
        assert_eq!(params.kernel_type, base.kernel_type);
    }
}
