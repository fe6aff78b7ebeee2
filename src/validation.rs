//! Input validation for catalog items.
//!
//! Checks structural integrity of training items before allocation.
//! Detects:
//! - Duplicate IDs
//! - Non-positive durations
//! - Blank role, name, or instructor fields
//!
//! Advisory: the allocator itself does not reject invalid input; a
//! session may validate before regenerating and surface the issues.

use crate::models::TrainingItem;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two items share the same ID.
    DuplicateId,
    /// An item's duration is zero or negative.
    NonPositiveDuration,
    /// A required text field is blank.
    MissingField,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a list of training items.
///
/// Checks:
/// 1. No duplicate item IDs
/// 2. Every duration is positive
/// 3. Role, name, and instructor are non-blank
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_items(items: &[TrainingItem]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen_ids = HashSet::new();

    for item in items {
        if !seen_ids.insert(item.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate item ID: {}", item.id),
            ));
        }

        if item.duration_min <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveDuration,
                format!(
                    "Item '{}' has non-positive duration {}",
                    item.id, item.duration_min
                ),
            ));
        }

        for (field, value) in [
            ("role", &item.role),
            ("name", &item.name),
            ("instructor", &item.instructor),
        ] {
            if value.trim().is_empty() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MissingField,
                    format!("Item '{}' has blank {field}", item.id),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_items() -> Vec<TrainingItem> {
        vec![
            TrainingItem::new("T1", "Driver", "Safety", 120, "Ana"),
            TrainingItem::new("T2", "Operator", "Forklift", 180, "Bruno"),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_items(&valid_items()).is_ok());
    }

    #[test]
    fn test_empty_input_is_valid() {
        assert!(validate_items(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let items = vec![
            TrainingItem::new("T1", "Driver", "Safety", 120, "Ana"),
            TrainingItem::new("T1", "Operator", "Forklift", 180, "Bruno"),
        ];
        let errors = validate_items(&items).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_non_positive_duration() {
        let items = vec![TrainingItem::new("T1", "Driver", "Safety", 0, "Ana")];
        let errors = validate_items(&items).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveDuration));
    }

    #[test]
    fn test_blank_fields() {
        let items = vec![TrainingItem::new("T1", "  ", "Safety", 120, "")];
        let errors = validate_items(&items).unwrap_err();
        let missing: Vec<_> = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::MissingField)
            .collect();
        assert_eq!(missing.len(), 2);
    }

    #[test]
    fn test_multiple_errors_collected() {
        let items = vec![
            TrainingItem::new("T1", "Driver", "Safety", -5, "Ana"),
            TrainingItem::new("T1", "", "Forklift", 180, "Bruno"),
        ];
        let errors = validate_items(&items).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
