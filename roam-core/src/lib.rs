pub mod identity;
pub mod pii;

/// Boxed error returned by repository traits for storage-level faults.
/// Domain crates translate these into their own `Unavailable` variants.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
