//! Aggregate training configuration
//!
//! Composes a formulation, a kernel choice, and execution parameters into the
//! single parameter record the solver consumes.
//!
//! # Quick Start
//!
//! ```
//! use svmcfg::{ExecutionParams, Formulation, Kernel, TrainConfig};
//!
//! let config = TrainConfig::new(
//!     Formulation::c_svc(10.0),
//!     Kernel::rbf(0.5),
//!     ExecutionParams::new(0.001, 5),
//! );
//!
//! assert_eq!(config.eps(), 0.001);
//! assert!(config.is_cross_validation());
//! assert_eq!(config.params().c, 10.0);
//! ```

use crate::core::error::Result;
use crate::core::traits::{apply_updates, ParamUpdate};
use crate::execution::ExecutionParams;
use crate::formulation::Formulation;
use crate::kernel::Kernel;
use crate::native::SolverParams;

/// One fully-resolved training configuration
///
/// The solver parameter record is built once at construction by applying the
/// component updates in fixed order: formulation, then kernel, then
/// execution. Execution runs last, so its values win wherever fields
/// overlap. The record and the components are read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainConfig {
    formulation: Formulation,
    kernel: Kernel,
    execution: ExecutionParams,
    params: SolverParams,
}

impl TrainConfig {
    /// Build a configuration from explicit components.
    ///
    /// Never fails; a nonsensical combination is only refused by the solver
    /// boundary, reachable early through [`TrainConfig::check`].
    pub fn new(formulation: Formulation, kernel: Kernel, execution: ExecutionParams) -> Self {
        let params = apply_updates(
            SolverParams::default(),
            [
                &formulation as &dyn ParamUpdate,
                &kernel as &dyn ParamUpdate,
                &execution as &dyn ParamUpdate,
            ],
        );

        Self {
            formulation,
            kernel,
            execution,
            params,
        }
    }

    /// Build a configuration with the standard execution parameters.
    pub fn with_default_execution(formulation: Formulation, kernel: Kernel) -> Self {
        Self::new(formulation, kernel, ExecutionParams::default())
    }

    /// Termination tolerance of this run
    pub fn eps(&self) -> f64 {
        self.execution.eps
    }

    /// Cross-validation fold count; 0 means a plain training run
    pub fn n_folds(&self) -> u32 {
        self.execution.n_folds
    }

    /// Whether this run performs cross-validation
    pub fn is_cross_validation(&self) -> bool {
        self.execution.is_cross_validation()
    }

    /// The problem formulation component
    pub fn formulation(&self) -> &Formulation {
        &self.formulation
    }

    /// The kernel component
    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    /// The execution component
    pub fn execution(&self) -> &ExecutionParams {
        &self.execution
    }

    /// The resolved parameter record, ready to hand to the solver
    pub fn params(&self) -> &SolverParams {
        &self.params
    }

    /// Run the solver boundary's acceptance rules on the resolved record.
    pub fn check(&self) -> Result<()> {
        self.params.check()
    }
}

impl Default for TrainConfig {
    /// The reference train tool's defaults end to end: C-SVC, RBF with
    /// solver-resolved gamma, standard execution parameters
    fn default() -> Self {
        Self::with_default_execution(Formulation::default(), Kernel::default())
    }
}
