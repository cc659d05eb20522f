//! Configuration serialization and persistence
//!
//! This module provides functionality to save and load training
//! configurations for use with the CLI application and other scenarios where
//! a run's parameters need to outlive the process that composed them.
//!
//! Only the three components and the metadata are stored. The resolved
//! solver parameter record is derived state and is rebuilt through
//! [`TrainConfig::new`] on load, so the fixed update order applies to loaded
//! configurations exactly as it does to fresh ones.

use crate::config::TrainConfig;
use crate::core::error::{ConfigError, Result};
use crate::execution::ExecutionParams;
use crate::formulation::Formulation;
use crate::kernel::Kernel;
use crate::native::{KernelType, SvmType};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Serializable representation of a training configuration
#[derive(Serialize, Deserialize)]
pub struct ConfigDocument {
    /// Formulation type code, duplicated for external tooling
    pub svm_type: SvmType,
    /// Kernel type code, duplicated for external tooling
    pub kernel_type: KernelType,
    /// Problem formulation component
    pub formulation: Formulation,
    /// Kernel component
    pub kernel: Kernel,
    /// Execution component
    pub execution: ExecutionParams,
    /// Document metadata
    pub metadata: ConfigMetadata,
}

/// Configuration metadata for tracking and validation
#[derive(Serialize, Deserialize)]
pub struct ConfigMetadata {
    /// Library version used to create the document
    pub library_version: String,
    /// Creation timestamp
    pub created_at: String,
    /// Free-form note about the run
    pub description: Option<String>,
}

impl ConfigDocument {
    /// Create a document from a training configuration
    pub fn from_config(config: &TrainConfig) -> Self {
        Self {
            svm_type: config.formulation().svm_type(),
            kernel_type: config.kernel().kernel_type(),
            formulation: config.formulation().clone(),
            kernel: config.kernel().clone(),
            execution: config.execution().clone(),
            metadata: ConfigMetadata {
                library_version: env!("CARGO_PKG_VERSION").to_string(),
                created_at: chrono::Utc::now().to_rfc3339(),
                description: None,
            },
        }
    }

    /// Attach a free-form description
    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.metadata.description = Some(description.into());
        self
    }

    /// Save the document to a file as pretty-printed JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path).map_err(ConfigError::IoError)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| ConfigError::SerializationError(e.to_string()))?;
        Ok(())
    }

    /// Load a document from a file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path).map_err(ConfigError::IoError)?;
        let reader = BufReader::new(file);
        let document = serde_json::from_reader(reader)
            .map_err(|e| ConfigError::SerializationError(e.to_string()))?;
        Ok(document)
    }

    /// Rebuild the training configuration this document describes.
    ///
    /// The duplicated type codes must agree with the stored components;
    /// a hand-edited document that disagrees with itself is refused.
    pub fn into_config(self) -> Result<TrainConfig> {
        if self.svm_type != self.formulation.svm_type() {
            return Err(ConfigError::InvalidParameter(format!(
                "document says svm_type {} but the formulation is {}",
                self.svm_type,
                self.formulation.svm_type()
            )));
        }

        if self.kernel_type != self.kernel.kernel_type() {
            return Err(ConfigError::InvalidParameter(format!(
                "document says kernel_type {} but the kernel is {}",
                self.kernel_type,
                self.kernel.kernel_type()
            )));
        }

        Ok(TrainConfig::new(
            self.formulation,
            self.kernel,
            self.execution,
        ))
    }

    /// Print configuration summary
    pub fn print_summary(&self) {
        println!("=== SVM Training Configuration ===");
        println!("Formulation: {}", self.svm_type);
        println!("Kernel: {}", self.kernel_type);
        println!("Termination eps: {}", self.execution.eps);
        if self.execution.is_cross_validation() {
            println!("Cross-validation: {} folds", self.execution.n_folds);
        } else {
            println!("Cross-validation: off");
        }
        println!("Library Version: {}", self.metadata.library_version);
        println!("Created: {}", self.metadata.created_at);
        if let Some(description) = &self.metadata.description {
            println!("Description: {description}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_config() -> TrainConfig {
        TrainConfig::new(
            Formulation::c_svc(5.0).with_class_weight(1, 2.0),
            Kernel::rbf(0.125),
            ExecutionParams::new(0.01, 5),
        )
    }

    #[test]
    fn test_document_round_trip() -> Result<()> {
        let config = sample_config();
        let document = ConfigDocument::from_config(&config).with_description("round trip");

        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        document.save_to_file(temp_file.path())?;

        let loaded = ConfigDocument::load_from_file(temp_file.path())?;
        assert_eq!(loaded.svm_type, SvmType::CSvc);
        assert_eq!(loaded.kernel_type, KernelType::Rbf);
        assert_eq!(
            loaded.metadata.description.as_deref(),
            Some("round trip")
        );

        let rebuilt = loaded.into_config()?;
        assert_eq!(rebuilt, config);
        assert_eq!(rebuilt.params(), config.params());

        Ok(())
    }

    #[test]
    fn test_metadata_records_library_version() {
        let document = ConfigDocument::from_config(&sample_config());
        assert_eq!(document.metadata.library_version, env!("CARGO_PKG_VERSION"));
        assert!(!document.metadata.created_at.is_empty());
        assert!(document.metadata.description.is_none());
    }

    #[test]
    fn test_inconsistent_document_is_refused() {
        let mut document = ConfigDocument::from_config(&sample_config());
        document.kernel_type = KernelType::Sigmoid;

        let err = document.into_config().unwrap_err();
        assert!(err.to_string().contains("kernel_type"));
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "{{ not a config").expect("Failed to write");
        temp_file.flush().expect("Failed to flush");

        let result = ConfigDocument::load_from_file(temp_file.path());
        assert!(matches!(
            result,
            Err(ConfigError::SerializationError(_))
        ));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = ConfigDocument::load_from_file("/nonexistent/config.json");
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
