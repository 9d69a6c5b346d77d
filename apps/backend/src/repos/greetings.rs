//! Repository layer for greetings: input validation and the five CRUD
//! operations, expressed against a request-scoped transaction.

use sea_orm::DatabaseTransaction;
use uuid::Uuid;

use crate::adapters::greetings_sea as adapter;
use crate::entities::greetings::Model;
use crate::errors::domain::{DomainError, FieldViolation, NotFoundKind};

pub use crate::adapters::greetings_sea::{GreetingCreate, GreetingPatch};

pub const SENDER_MAX_CHARS: usize = 50;
pub const RECIPIENT_MAX_CHARS: usize = 50;
// Matches the storage column width; the two must not drift apart.
pub const MESSAGE_MAX_CHARS: usize = 280;

fn check_field(
    field: &'static str,
    value: &str,
    max_chars: usize,
    violations: &mut Vec<FieldViolation>,
) {
    if value.is_empty() {
        violations.push(FieldViolation::new(field, "must not be empty"));
    } else if value.chars().count() > max_chars {
        violations.push(FieldViolation::new(
            field,
            format!("must be at most {max_chars} characters"),
        ));
    }
}

fn validate_create(create: &GreetingCreate) -> Result<(), DomainError> {
    let mut violations = Vec::new();
    check_field("sender", &create.sender, SENDER_MAX_CHARS, &mut violations);
    check_field(
        "recipient",
        &create.recipient,
        RECIPIENT_MAX_CHARS,
        &mut violations,
    );
    check_field(
        "message",
        &create.message,
        MESSAGE_MAX_CHARS,
        &mut violations,
    );
    if violations.is_empty() {
        Ok(())
    } else {
        Err(DomainError::validation(violations))
    }
}

fn validate_patch(patch: &GreetingPatch) -> Result<(), DomainError> {
    let mut violations = Vec::new();
    if let Some(sender) = &patch.sender {
        check_field("sender", sender, SENDER_MAX_CHARS, &mut violations);
    }
    if let Some(recipient) = &patch.recipient {
        check_field("recipient", recipient, RECIPIENT_MAX_CHARS, &mut violations);
    }
    if let Some(message) = &patch.message {
        check_field("message", message, MESSAGE_MAX_CHARS, &mut violations);
    }
    if violations.is_empty() {
        Ok(())
    } else {
        Err(DomainError::validation(violations))
    }
}

pub async fn list_greetings(txn: &DatabaseTransaction) -> Result<Vec<Model>, DomainError> {
    Ok(adapter::list(txn).await?)
}

pub async fn create_greeting(
    txn: &DatabaseTransaction,
    create: GreetingCreate,
) -> Result<Model, DomainError> {
    validate_create(&create)?;
    Ok(adapter::insert(txn, create).await?)
}

pub async fn get_greeting(txn: &DatabaseTransaction, id: Uuid) -> Result<Model, DomainError> {
    adapter::find_by_id(txn, id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Greeting, format!("greeting {id} not found"))
    })
}

/// Partial update: lookup first (absent id wins over a bad payload),
/// then validate whichever fields are present.
pub async fn update_greeting(
    txn: &DatabaseTransaction,
    id: Uuid,
    patch: GreetingPatch,
) -> Result<Model, DomainError> {
    let current = get_greeting(txn, id).await?;
    validate_patch(&patch)?;

    if patch.is_empty() {
        return Ok(current);
    }
    Ok(adapter::update(txn, current, patch).await?)
}

pub async fn delete_greeting(txn: &DatabaseTransaction, id: Uuid) -> Result<(), DomainError> {
    let current = get_greeting(txn, id).await?;
    adapter::delete(txn, current).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(sender: &str, recipient: &str, message: &str) -> GreetingCreate {
        GreetingCreate {
            sender: sender.to_string(),
            recipient: recipient.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_valid_create_passes() {
        assert!(validate_create(&create("Alice", "Bob", "Hi")).is_ok());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let ok = create(&"a".repeat(50), &"b".repeat(50), &"c".repeat(280));
        assert!(validate_create(&ok).is_ok());
    }

    #[test]
    fn test_over_length_fields_rejected() {
        let bad = create(&"a".repeat(51), "Bob", "Hi");
        let err = validate_create(&bad).unwrap_err();
        match err {
            DomainError::Validation(violations) => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].field, "sender");
            }
            other => panic!("expected validation error, got {other:?}"),
        }

        let bad = create("Alice", "Bob", &"c".repeat(281));
        assert!(validate_create(&bad).is_err());
    }

    #[test]
    fn test_empty_fields_rejected_with_one_violation_each() {
        let err = validate_create(&create("", "", "")).unwrap_err();
        match err {
            DomainError::Validation(violations) => assert_eq!(violations.len(), 3),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_length_is_counted_in_chars_not_bytes() {
        // 50 multibyte characters are 100 bytes but still within bounds
        let ok = create(&"é".repeat(50), "Bob", "Hi");
        assert!(validate_create(&ok).is_ok());
    }

    #[test]
    fn test_patch_validates_only_present_fields() {
        let patch = GreetingPatch {
            sender: None,
            recipient: None,
            message: Some("Howdy".to_string()),
        };
        assert!(validate_patch(&patch).is_ok());

        let patch = GreetingPatch {
            sender: Some(String::new()),
            recipient: None,
            message: None,
        };
        assert!(validate_patch(&patch).is_err());
    }

    #[test]
    fn test_empty_patch_is_valid() {
        assert!(validate_patch(&GreetingPatch::default()).is_ok());
    }
}
