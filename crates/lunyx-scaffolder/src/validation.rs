//! Answer validation

use crate::error::{Field, ValidationError};

/// Reject an empty answer.
///
/// Only the empty string is rejected. Whitespace-only answers pass and are
/// carried through unchanged; no length or character-set rules apply.
pub fn validate(field: Field, answer: &str) -> Result<&str, ValidationError> {
    if answer.is_empty() {
        return Err(ValidationError { field });
    }
    Ok(answer)
}
