//! Native parameter record of the external solver boundary
//!
//! LibSVM-compatible solvers consume one flat parameter record per training
//! run. This module mirrors that record with safe Rust types; the solver
//! itself (training loop, kernel evaluation, optimization) lives entirely in
//! the external library and is not reimplemented here.

use crate::core::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// SVM problem formulation selector, with the solver's native codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum SvmType {
    /// C-support vector classification
    CSvc = 0,
    /// nu-support vector classification
    NuSvc = 1,
    /// Distribution estimation (one-class SVM)
    OneClass = 2,
    /// epsilon-support vector regression
    EpsilonSvr = 3,
    /// nu-support vector regression
    NuSvr = 4,
}

impl SvmType {
    /// Native code of this formulation as the solver defines it.
    pub fn to_raw(self) -> i32 {
        self as i32
    }

    /// Canonical name from the solver's type table.
    pub fn name(self) -> &'static str {
        match self {
            SvmType::CSvc => "c_svc",
            SvmType::NuSvc => "nu_svc",
            SvmType::OneClass => "one_class",
            SvmType::EpsilonSvr => "epsilon_svr",
            SvmType::NuSvr => "nu_svr",
        }
    }
}

impl fmt::Display for SvmType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Kernel function selector, with the solver's native codes.
///
/// Only the selector and hyperparameters travel through the configuration;
/// the kernel computation happens inside the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum KernelType {
    /// K(x, y) = x^T y
    Linear = 0,
    /// K(x, y) = (gamma * x^T y + coef0)^degree
    Polynomial = 1,
    /// K(x, y) = exp(-gamma * ||x - y||^2)
    Rbf = 2,
    /// K(x, y) = tanh(gamma * x^T y + coef0)
    Sigmoid = 3,
    /// Kernel values supplied by the caller
    Precomputed = 4,
}

impl KernelType {
    /// Native code of this kernel as the solver defines it.
    pub fn to_raw(self) -> i32 {
        self as i32
    }

    /// Canonical name from the solver's kernel table.
    pub fn name(self) -> &'static str {
        match self {
            KernelType::Linear => "linear",
            KernelType::Polynomial => "polynomial",
            KernelType::Rbf => "rbf",
            KernelType::Sigmoid => "sigmoid",
            KernelType::Precomputed => "precomputed",
        }
    }
}

impl fmt::Display for KernelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The solver's training parameter record.
///
/// Field set and semantics belong to the external library; this crate only
/// populates them. C arrays become `Vec`s and int flags become `bool`s, and
/// the record additionally carries the train driver's cross-validation fold
/// count, which the classic C layout keeps beside the struct.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverParams {
    pub svm_type: SvmType,
    pub kernel_type: KernelType,
    /// Degree of the polynomial kernel
    pub degree: i32,
    /// Kernel width; 0 tells the solver to substitute 1/n_features
    pub gamma: f64,
    /// Independent term of polynomial and sigmoid kernels
    pub coef0: f64,
    /// Kernel cache size in megabytes
    pub cache_size_mb: f64,
    /// Termination tolerance of the optimizer
    pub eps: f64,
    /// Cost of constraint violation (C-SVC, epsilon-SVR, nu-SVR)
    pub c: f64,
    /// Class labels with per-class cost multipliers (C-SVC)
    pub weight_label: Vec<i32>,
    pub weight: Vec<f64>,
    /// Fraction parameter of nu-SVC, one-class and nu-SVR
    pub nu: f64,
    /// Epsilon of the epsilon-SVR loss function
    pub p: f64,
    /// Shrinking heuristics on/off
    pub shrinking: bool,
    /// Train a model with probability estimates
    pub probability: bool,
    /// Cross-validation fold count; 0 disables cross-validation
    pub n_folds: u32,
}

impl Default for SolverParams {
    /// The reference train tool's defaults: C-SVC with an RBF kernel,
    /// gamma resolved by the solver, 100 MB cache, eps 1e-3.
    fn default() -> Self {
        Self {
            svm_type: SvmType::CSvc,
            kernel_type: KernelType::Rbf,
            degree: 3,
            gamma: 0.0,
            coef0: 0.0,
            cache_size_mb: 100.0,
            eps: 0.001,
            c: 1.0,
            weight_label: Vec::new(),
            weight: Vec::new(),
            nu: 0.5,
            p: 0.1,
            shrinking: true,
            probability: false,
            n_folds: 0,
        }
    }
}

impl SolverParams {
    /// Run the boundary's parameter acceptance rules.
    ///
    /// Mirrors the screening the solver applies on entry, with the same
    /// rejection messages, so a bad record fails here instead of inside the
    /// native call. Unknown type codes are unrepresentable in this mirror and
    /// need no rule. The nu-feasibility screening that inspects class counts
    /// requires the training set and stays with the solver.
    pub fn check(&self) -> Result<()> {
        if self.gamma < 0.0 {
            return Err(ConfigError::ConfigRejected("gamma < 0".to_string()));
        }

        if self.degree < 0 {
            return Err(ConfigError::ConfigRejected(
                "degree of polynomial kernel < 0".to_string(),
            ));
        }

        if self.cache_size_mb <= 0.0 {
            return Err(ConfigError::ConfigRejected("cache_size <= 0".to_string()));
        }

        if self.eps <= 0.0 {
            return Err(ConfigError::ConfigRejected("eps <= 0".to_string()));
        }

        match self.svm_type {
            SvmType::CSvc | SvmType::EpsilonSvr | SvmType::NuSvr => {
                if self.c <= 0.0 {
                    return Err(ConfigError::ConfigRejected("C <= 0".to_string()));
                }
            }
            _ => {}
        }

        match self.svm_type {
            SvmType::NuSvc | SvmType::OneClass | SvmType::NuSvr => {
                if self.nu <= 0.0 || self.nu > 1.0 {
                    return Err(ConfigError::ConfigRejected(
                        "nu <= 0 or nu > 1".to_string(),
                    ));
                }
            }
            _ => {}
        }

        if self.svm_type == SvmType::EpsilonSvr && self.p < 0.0 {
            return Err(ConfigError::ConfigRejected("p < 0".to_string()));
        }

        if self.probability && self.svm_type == SvmType::OneClass {
            return Err(ConfigError::ConfigRejected(
                "one-class SVM probability output not supported yet".to_string(),
            ));
        }

        if self.weight_label.len() != self.weight.len() {
            return Err(ConfigError::ConfigRejected(
                "class weight arrays differ in length".to_string(),
            ));
        }

        if self.n_folds == 1 {
            return Err(ConfigError::ConfigRejected(
                "n-fold cross validation: n must >= 2".to_string(),
            ));
        }

        Ok(())
    }
}
