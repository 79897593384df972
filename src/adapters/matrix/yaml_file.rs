//! YAML file matrix source.
//!
//! The file maps initiative keys to phase keys to hour deltas:
//!
//! ```yaml
//! automated_testing:
//!   discover: -6
//!   plan: -10
//!   # ...
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::efficiency::{DeltaMatrix, ImpactMatrix};
use crate::domain::foundation::{DomainError, ErrorCode, Initiative, Phase};
use crate::ports::ImpactMatrixSource;

type RawMatrix = BTreeMap<Initiative, BTreeMap<Phase, f64>>;

/// Loads the impact matrix from a YAML file on disk.
#[derive(Debug, Clone)]
pub struct YamlMatrixSource {
    path: PathBuf,
}

impl YamlMatrixSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unavailable(&self, message: impl Into<String>) -> DomainError {
        DomainError::new(ErrorCode::MatrixUnavailable, message)
            .with_detail("path", self.path.display().to_string())
    }

    /// Parses YAML text into a validated matrix. Every one of the 49 cells is required.
    pub fn parse(&self, yaml: &str) -> Result<ImpactMatrix, DomainError> {
        let raw: RawMatrix = serde_yaml::from_str(yaml)
            .map_err(|e| self.unavailable(format!("Invalid impact matrix YAML: {}", e)))?;

        let mut deltas = DeltaMatrix::ZERO;
        for initiative in Initiative::all() {
            let row = raw.get(initiative).ok_or_else(|| {
                self.unavailable(format!("Impact matrix is missing initiative '{}'", initiative.key()))
                    .with_detail("initiative", initiative.key())
            })?;
            for phase in Phase::all() {
                let value = row.get(phase).ok_or_else(|| {
                    self.unavailable(format!(
                        "Impact matrix is missing {} / {}",
                        initiative.key(),
                        phase.key()
                    ))
                    .with_detail("initiative", initiative.key())
                    .with_detail("phase", phase.key())
                })?;
                deltas[(*initiative, *phase)] = *value;
            }
        }

        ImpactMatrix::new(deltas).map_err(|e| e.with_detail("path", self.path.display().to_string()))
    }
}

impl ImpactMatrixSource for YamlMatrixSource {
    fn load(&self) -> Result<ImpactMatrix, DomainError> {
        let yaml = std::fs::read_to_string(&self.path)
            .map_err(|e| self.unavailable(format!("Cannot read impact matrix file: {}", e)))?;
        self.parse(&yaml)
    }

    fn describe(&self) -> String {
        format!("YAML file {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn seed_yaml() -> String {
        serde_yaml::to_string(&ImpactMatrix::seed()).unwrap()
    }

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_complete_matrix_from_file() {
        let file = write_temp(&seed_yaml());
        let matrix = YamlMatrixSource::new(file.path()).load().unwrap();
        assert_eq!(matrix, ImpactMatrix::seed());
    }

    #[test]
    fn missing_file_is_unavailable() {
        let err = YamlMatrixSource::new("/nonexistent/matrix.yaml").load().unwrap_err();
        assert_eq!(err.code, ErrorCode::MatrixUnavailable);
        assert_eq!(err.details.get("path"), Some(&"/nonexistent/matrix.yaml".to_string()));
    }

    #[test]
    fn missing_cell_is_reported() {
        let yaml = seed_yaml().replace("  post_go_live: -58.0\n", "");
        let err = YamlMatrixSource::new("matrix.yaml").parse(&yaml).unwrap_err();
        assert_eq!(err.code, ErrorCode::MatrixUnavailable);
        assert_eq!(err.details.get("initiative"), Some(&"edcc".to_string()));
        assert_eq!(err.details.get("phase"), Some(&"post_go_live".to_string()));
    }

    #[test]
    fn positive_cell_is_rejected() {
        let yaml = seed_yaml().replacen("discover: -13.0", "discover: 13.0", 1);
        let err = YamlMatrixSource::new("matrix.yaml").parse(&yaml).unwrap_err();
        assert_eq!(err.code, ErrorCode::MatrixUnavailable);
        assert_eq!(err.details.get("phase"), Some(&"discover".to_string()));
    }

    #[test]
    fn unknown_initiative_is_rejected() {
        let yaml = format!("{}quantum_computing:\n  discover: -1.0\n", seed_yaml());
        assert!(YamlMatrixSource::new("matrix.yaml").parse(&yaml).is_err());
    }
}
