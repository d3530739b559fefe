//! # Model operations
//!
//! The persistence steps behind each default handler, as plain async
//! functions over a [`DatabaseConnection`]. Custom handlers can call these
//! directly and keep the same ordering, identity and timestamp rules.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};
use uuid::Uuid;

use crate::traits::CrudModel;

/// Filtered select, newest first for timestamp-capable models and unordered otherwise.
#[must_use]
pub fn base_query<M: CrudModel>(condition: Condition) -> Select<M::EntityType> {
    let query = M::EntityType::find().filter(condition);
    match M::TIMESTAMPS {
        Some(timestamps) => query.order_by_desc(timestamps.created_at),
        None => query,
    }
}

/// Fetch one page of records matching `condition`.
///
/// # Errors
///
/// Returns the `DbErr` raised by the query.
pub async fn find_page<M: CrudModel>(
    db: &DatabaseConnection,
    condition: Condition,
    offset: u64,
    limit: u64,
) -> Result<Vec<M>, DbErr> {
    base_query::<M>(condition)
        .offset(offset)
        .limit(limit)
        .all(db)
        .await
}

/// Count every record matching `condition`.
///
/// # Errors
///
/// Returns the `DbErr` raised by the query.
pub async fn count<M: CrudModel>(db: &DatabaseConnection, condition: Condition) -> Result<u64, DbErr> {
    PaginatorTrait::count(M::EntityType::find().filter(condition), db).await
}

/// # Errors
///
/// Returns the `DbErr` raised by the query. A missing record is `Ok(None)`.
pub async fn find_one<M: CrudModel>(db: &DatabaseConnection, id: Uuid) -> Result<Option<M>, DbErr> {
    M::EntityType::find()
        .filter(M::ID_COLUMN.eq(id))
        .one(db)
        .await
}

/// Insert `model` as a new record.
///
/// Any identifier in `model` is replaced by a fresh one. Timestamp-capable
/// models get both times set to now.
///
/// # Errors
///
/// Returns the `DbErr` raised by the insert.
pub async fn insert<M: CrudModel>(db: &DatabaseConnection, model: M) -> Result<M, DbErr> {
    let mut active = model.into_active_model().reset_all();
    active.set(M::ID_COLUMN, Uuid::new_v4().into());
    if let Some(timestamps) = M::TIMESTAMPS {
        let now = Utc::now();
        active.set(timestamps.created_at, now.into());
        active.set(timestamps.updated_at, now.into());
    }
    active.insert(db).await
}

/// Replace the whole of `existing` (stored under `id`) with `model`.
///
/// `model` takes over `id` and is written as an update, never an insert.
/// Timestamp-capable models keep the original creation time and get a new
/// update time.
///
/// # Errors
///
/// Returns `DbErr::RecordNotUpdated` when the row vanished since `existing`
/// was read, or the `DbErr` raised by the update.
pub async fn replace<M: CrudModel>(
    db: &DatabaseConnection,
    id: Uuid,
    existing: &M,
    model: M,
) -> Result<M, DbErr> {
    let mut active = model.into_active_model().reset_all();
    active.set(M::ID_COLUMN, id.into());
    if let Some(timestamps) = M::TIMESTAMPS {
        let original = existing.clone().into_active_model();
        if let Some(created_at) = original.get(timestamps.created_at).into_value() {
            active.set(timestamps.created_at, created_at);
        }
        active.set(timestamps.updated_at, Utc::now().into());
    }
    active.update(db).await
}

/// # Errors
///
/// Returns `DbErr::RecordNotFound` when nothing was deleted, or the `DbErr`
/// raised by the delete.
pub async fn remove<M: CrudModel>(db: &DatabaseConnection, id: Uuid) -> Result<(), DbErr> {
    let res = M::EntityType::delete_many()
        .filter(M::ID_COLUMN.eq(id))
        .exec(db)
        .await?;

    match res.rows_affected {
        0 => Err(DbErr::RecordNotFound(format!(
            "{} not found",
            M::RESOURCE_NAME_SINGULAR
        ))),
        _ => Ok(()),
    }
}
