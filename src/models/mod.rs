/// # Email Request and Decomposition
///
/// The request body of the validation endpoint and the transient
/// local-part/domain and name/TLD splits used by the pipeline.
pub mod email;

/// # Health Status Response
///
/// Service status with a timestamp and the sizes of the loaded reference lists.
pub mod health;

/// # Reference Data
///
/// The popular-domain, popular-TLD and disposable-domain sets, loaded from
/// line-delimited files or supplied directly.
pub mod reference;

/// # Validation Result
///
/// The `{valid, error}` verdict and the per-stage failure taxonomy.
pub mod validation;

pub use health::HealthResponse;
pub use reference::{ReferenceData, ReferenceSet, ReferenceSources};
pub use validation::{ValidationError, ValidationResult};
