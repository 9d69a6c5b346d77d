//! SeaORM adapter for the greeting repository.

use sea_orm::{ActiveModelTrait, DatabaseTransaction, EntityTrait, ModelTrait, Set};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::entities::greetings;

pub mod dto;

pub use dto::{GreetingCreate, GreetingPatch};

// Adapter functions return DbErr; the repos layer maps to DomainError.

pub async fn list(txn: &DatabaseTransaction) -> Result<Vec<greetings::Model>, sea_orm::DbErr> {
    greetings::Entity::find().all(txn).await
}

pub async fn find_by_id(
    txn: &DatabaseTransaction,
    id: Uuid,
) -> Result<Option<greetings::Model>, sea_orm::DbErr> {
    greetings::Entity::find_by_id(id).one(txn).await
}

pub async fn insert(
    txn: &DatabaseTransaction,
    dto: GreetingCreate,
) -> Result<greetings::Model, sea_orm::DbErr> {
    let now = OffsetDateTime::now_utc();
    // Postgres keeps microseconds; truncate so the returned row always
    // equals the stored one.
    let now = now
        .replace_nanosecond(now.microsecond() * 1000)
        .unwrap_or(now);

    let active = greetings::ActiveModel {
        id: Set(Uuid::new_v4()),
        sender: Set(dto.sender),
        recipient: Set(dto.recipient),
        message: Set(dto.message),
        created_at: Set(now),
    };

    active.insert(txn).await
}

/// Apply a partial update field by field; absent fields keep their
/// stored value, id and created_at stay Unchanged.
pub async fn update(
    txn: &DatabaseTransaction,
    current: greetings::Model,
    dto: GreetingPatch,
) -> Result<greetings::Model, sea_orm::DbErr> {
    let mut active: greetings::ActiveModel = current.into();
    if let Some(sender) = dto.sender {
        active.sender = Set(sender);
    }
    if let Some(recipient) = dto.recipient {
        active.recipient = Set(recipient);
    }
    if let Some(message) = dto.message {
        active.message = Set(message);
    }

    active.update(txn).await
}

pub async fn delete(
    txn: &DatabaseTransaction,
    model: greetings::Model,
) -> Result<(), sea_orm::DbErr> {
    model.delete(txn).await?;
    Ok(())
}
