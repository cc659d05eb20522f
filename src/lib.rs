//! Typed training configuration for LibSVM-compatible SVM solvers
//!
//! Composes a problem formulation, a kernel choice, and execution parameters
//! into the flat parameter record such solvers consume. The solver itself is
//! an external dependency; this crate only assembles and screens its input.

pub mod config;
pub mod core;
pub mod execution;
pub mod formulation;
pub mod kernel;
pub mod native;
pub mod persistence;

// Re-export main types for convenience
pub use crate::config::TrainConfig;
pub use crate::core::error::{ConfigError, Result};
pub use crate::core::traits::{apply_updates, ParamUpdate};
pub use crate::execution::ExecutionParams;
pub use crate::formulation::{ClassWeight, Formulation};
pub use crate::kernel::Kernel;
pub use crate::native::{KernelType, SolverParams, SvmType};
pub use crate::persistence::{ConfigDocument, ConfigMetadata};

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
