//! Error types for the planning engine.

use thiserror::Error;

/// Errors that abort an engine call outright.
///
/// Constraint violations and infeasible slots are *not* errors; they come
/// back as warning strings alongside a best-effort result, so a caller can
/// still show a partial plan.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A request field failed validation before any planning ran.
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    /// The layout generator emitted geometry that fails its own no-overlap
    /// audit. This is a defect in the generator, never an input condition.
    #[error("Layout invariant violated: {0}")]
    LayoutInvariant(String),
}

impl EngineError {
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_names_the_field() {
        let err = EngineError::invalid_input("totalAreaSqFt", "must be strictly positive");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'totalAreaSqFt': must be strictly positive"
        );
    }

    #[test]
    fn test_layout_invariant_is_distinct_from_input_errors() {
        let err = EngineError::LayoutInvariant("beds 'bed-1' and 'bed-2' overlap".into());
        assert!(matches!(err, EngineError::LayoutInvariant(_)));
        assert!(err.to_string().starts_with("Layout invariant violated"));
    }
}
