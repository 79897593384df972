//! Built-in research sample matrix.

use crate::domain::efficiency::ImpactMatrix;
use crate::domain::foundation::DomainError;
use crate::ports::ImpactMatrixSource;

/// Serves the compiled-in sample matrix.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedMatrixSource;

impl SeedMatrixSource {
    pub fn new() -> Self {
        Self
    }
}

impl ImpactMatrixSource for SeedMatrixSource {
    fn load(&self) -> Result<ImpactMatrix, DomainError> {
        Ok(ImpactMatrix::seed())
    }

    fn describe(&self) -> String {
        "built-in sample matrix".to_string()
    }
}
