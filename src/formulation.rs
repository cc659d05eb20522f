//! SVM problem formulations
//!
//! A formulation selects the problem variant the solver optimizes
//! (classification, distribution estimation, or regression) and carries the
//! hyperparameters belonging to that variant. It knows nothing about kernels
//! or run control; its only job is to write its own fields onto the solver
//! parameter record.

use crate::core::traits::ParamUpdate;
use crate::native::{SolverParams, SvmType};
use serde::{Deserialize, Serialize};

/// Per-class cost multiplier for C-SVC
///
/// The effective cost for the class becomes `weight * C`, the usual remedy
/// for unbalanced training sets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassWeight {
    /// Class label as it appears in the training data
    pub label: i32,
    /// Multiplier applied to C for this class
    pub weight: f64,
}

/// SVM problem variant with its hyperparameters
///
/// Immutable value object; constructors never validate. Out-of-range
/// hyperparameters are surfaced by the solver boundary's acceptance rules
/// (see [`SolverParams::check`]), not at construction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Formulation {
    /// C-support vector classification
    CSvc {
        /// Cost of constraint violation
        c: f64,
        /// Optional per-class cost multipliers
        weights: Vec<ClassWeight>,
    },
    /// nu-support vector classification
    NuSvc {
        /// Upper bound on the fraction of margin errors
        nu: f64,
    },
    /// One-class SVM for distribution estimation
    OneClass {
        /// Upper bound on the fraction of outliers
        nu: f64,
    },
    /// epsilon-support vector regression
    EpsilonSvr {
        /// Cost of constraint violation
        c: f64,
        /// Width of the epsilon-insensitive loss tube
        p: f64,
    },
    /// nu-support vector regression
    NuSvr {
        /// Cost of constraint violation
        c: f64,
        /// Controls the tube width via the support vector fraction
        nu: f64,
    },
}

impl Formulation {
    /// C-support vector classification with cost `c` and no class weights
    pub fn c_svc(c: f64) -> Self {
        Self::CSvc {
            c,
            weights: Vec::new(),
        }
    }

    /// nu-support vector classification
    pub fn nu_svc(nu: f64) -> Self {
        Self::NuSvc { nu }
    }

    /// One-class SVM
    pub fn one_class(nu: f64) -> Self {
        Self::OneClass { nu }
    }

    /// epsilon-support vector regression with loss tube width `p`
    pub fn epsilon_svr(c: f64, p: f64) -> Self {
        Self::EpsilonSvr { c, p }
    }

    /// nu-support vector regression
    pub fn nu_svr(c: f64, nu: f64) -> Self {
        Self::NuSvr { c, nu }
    }

    /// Attach a per-class cost multiplier.
    ///
    /// Only C-SVC consumes class weights; for the other variants the call
    /// has no effect, matching the reference train tool's handling of its
    /// weight options.
    pub fn with_class_weight(mut self, label: i32, weight: f64) -> Self {
        if let Formulation::CSvc { weights, .. } = &mut self {
            weights.push(ClassWeight { label, weight });
        }
        self
    }

    /// The solver's type code for this variant
    pub fn svm_type(&self) -> SvmType {
        match self {
            Formulation::CSvc { .. } => SvmType::CSvc,
            Formulation::NuSvc { .. } => SvmType::NuSvc,
            Formulation::OneClass { .. } => SvmType::OneClass,
            Formulation::EpsilonSvr { .. } => SvmType::EpsilonSvr,
            Formulation::NuSvr { .. } => SvmType::NuSvr,
        }
    }
}

impl Default for Formulation {
    /// C-SVC with C = 1, the reference train tool's default problem
    fn default() -> Self {
        Self::c_svc(1.0)
    }
}

impl ParamUpdate for Formulation {
    fn update(&self, params: SolverParams) -> SolverParams {
        let params = SolverParams {
            svm_type: self.svm_type(),
            ..params
        };

        match self {
            Formulation::CSvc { c, weights } => SolverParams {
                c: *c,
                weight_label: weights.iter().map(|w| w.label).collect(),
                weight: weights.iter().map(|w| w.weight).collect(),
                ..params
            },
            Formulation::NuSvc { nu } => SolverParams { nu: *nu, ..params },
            Formulation::OneClass { nu } => SolverParams { nu: *nu, ..params },
            Formulation::EpsilonSvr { c, p } => SolverParams {
                c: *c,
                p: *p,
                ..params
            },
            Formulation::NuSvr { c, nu } => SolverParams {
                c: *c,
                nu: *nu,
                ..params
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native::KernelType;

    #[test]
    fn test_c_svc_update_writes_type_and_cost() {
        let params = Formulation::c_svc(10.0).update(SolverParams::default());

        assert_eq!(params.svm_type, SvmType::CSvc);
        assert_eq!(params.c, 10.0);
        // Fields the variant does not own keep their prior values.
        assert_eq!(params.nu, 0.5);
        assert_eq!(params.p, 0.1);
        assert_eq!(params.kernel_type, KernelType::Rbf);
    }

    #[test]
    fn test_class_weights_become_parallel_arrays() {
        let formulation = Formulation::c_svc(1.0)
            .with_class_weight(1, 2.0)
            .with_class_weight(-1, 0.5);
        let params = formulation.update(SolverParams::default());

        assert_eq!(params.weight_label, vec![1, -1]);
        assert_eq!(params.weight, vec![2.0, 0.5]);
    }

    #[test]
    fn test_class_weight_ignored_outside_c_svc() {
        let formulation = Formulation::nu_svc(0.3).with_class_weight(1, 2.0);
        let params = formulation.update(SolverParams::default());

        assert!(params.weight_label.is_empty());
        assert!(params.weight.is_empty());
    }

    #[test]
    fn test_regression_variants_write_their_fields() {
        let params = Formulation::epsilon_svr(2.0, 0.25).update(SolverParams::default());
        assert_eq!(params.svm_type, SvmType::EpsilonSvr);
        assert_eq!(params.c, 2.0);
        assert_eq!(params.p, 0.25);

        let params = Formulation::nu_svr(4.0, 0.7).update(SolverParams::default());
        assert_eq!(params.svm_type, SvmType::NuSvr);
        assert_eq!(params.c, 4.0);
        assert_eq!(params.nu, 0.7);
    }

    #[test]
    fn test_one_class_writes_nu_only() {
        let base = SolverParams::default();
        let params = Formulation::one_class(0.05).update(base.clone());

        assert_eq!(params.svm_type, SvmType::OneClass);
        assert_eq!(params.nu, 0.05);
        assert_eq!(params.c, base.c);
    }

    #[test]
    fn test_svm_type_mapping() {
        assert_eq!(Formulation::c_svc(1.0).svm_type(), SvmType::CSvc);
        assert_eq!(Formulation::nu_svc(0.5).svm_type(), SvmType::NuSvc);
        assert_eq!(Formulation::one_class(0.5).svm_type(), SvmType::OneClass);
        assert_eq!(
            Formulation::epsilon_svr(1.0, 0.1).svm_type(),
            SvmType::EpsilonSvr
        );
        assert_eq!(Formulation::nu_svr(1.0, 0.5).svm_type(), SvmType::NuSvr);
    }

    #[test]
    fn test_default_is_unweighted_c_svc() {
        assert_eq!(Formulation::default(), Formulation::c_svc(1.0));
    }

    #[test]
    fn test_serde_uses_canonical_type_names() {
        let formulation = Formulation::epsilon_svr(1.0, 0.1);
        let json = serde_json::to_string(&formulation).unwrap();
        assert!(json.contains("\"type\":\"epsilon_svr\""));

        let back: Formulation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, formulation);
    }
}
