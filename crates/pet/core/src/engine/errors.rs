use crate::error::{ErrorSeverity, PetError};

/// Errors surfaced while executing an operation through the engine.
///
/// Every variant leaves the state untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineError {
    #[error("pet name must not be empty")]
    EmptyName,

    #[error("a pet named {name:?} has already been adopted")]
    AlreadyAdopted { name: String },

    #[error("insufficient coins: need {required}, have {available}")]
    InsufficientFunds { required: u32, available: u32 },

    #[error("unknown item {item_id:?}")]
    UnknownItem { item_id: String },
}

impl PetError for EngineError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InsufficientFunds { .. } => ErrorSeverity::Recoverable,
            Self::EmptyName | Self::AlreadyAdopted { .. } | Self::UnknownItem { .. } => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyName => "ENGINE_EMPTY_NAME",
            Self::AlreadyAdopted { .. } => "ENGINE_ALREADY_ADOPTED",
            Self::InsufficientFunds { .. } => "ENGINE_INSUFFICIENT_FUNDS",
            Self::UnknownItem { .. } => "ENGINE_UNKNOWN_ITEM",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_a_short_balance_is_recoverable() {
        let short = EngineError::InsufficientFunds {
            required: 75,
            available: 50,
        };
        assert!(short.severity().is_recoverable());
        assert_eq!(short.error_code(), "ENGINE_INSUFFICIENT_FUNDS");

        let unknown = EngineError::UnknownItem {
            item_id: "golden-bone".into(),
        };
        assert_eq!(unknown.severity(), ErrorSeverity::Validation);
        assert_eq!(unknown.severity().as_str(), "validation");
        assert_eq!(EngineError::EmptyName.error_code(), "ENGINE_EMPTY_NAME");
    }
}
