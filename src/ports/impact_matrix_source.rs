//! ImpactMatrixSource port - Where the seed impact matrix comes from.

use crate::domain::efficiency::ImpactMatrix;
use crate::domain::foundation::DomainError;

/// Produces the immutable impact matrix the engine is built on.
///
/// Called once at startup. Implementations must return a fully validated
/// matrix or a `MatrixUnavailable` error.
pub trait ImpactMatrixSource: Send + Sync {
    /// Loads and validates the matrix.
    fn load(&self) -> Result<ImpactMatrix, DomainError>;

    /// Human-readable origin used in logs.
    fn describe(&self) -> String;
}
