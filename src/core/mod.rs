//! Core error and trait plumbing for SVM configuration

pub mod error;
pub mod traits;

pub use self::error::*;
pub use self::traits::*;
