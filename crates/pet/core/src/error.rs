//! Common error infrastructure for pet-core.
//!
//! Engine failures are expected, local outcomes (an empty name, an empty
//! wallet). Nothing in the engine is fatal; malformed magnitudes are clamped
//! instead of rejected, so the only errors left are validation failures.

/// Severity level of an error, used for categorization and logging priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The request may succeed later once the state changes.
    ///
    /// Examples: not enough coins yet
    Recoverable,

    /// Invalid input, should not be retried unchanged.
    ///
    /// Examples: empty pet name, unknown shop item
    Validation,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all pet-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait PetError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
