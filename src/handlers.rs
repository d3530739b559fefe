//! # Default handlers
//!
//! Generic Axum handlers for the six CRUD operations. Each takes the
//! database connection explicitly through `State` and works for any
//! [`CrudModel`]. [`crate::CrudRouter`] wires them up; they can also be
//! mounted by hand or mixed with custom handlers.

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
};
use sea_orm::{Condition, ConnectionTrait, DatabaseConnection};
use uuid::Uuid;

use crate::errors::ApiError;
use crate::models::PageParams;
use crate::operations;
use crate::pagination::{calculate_content_range, parse_pagination};
use crate::search::build_search_condition;
use crate::traits::CrudModel;

async fn list_page<M: CrudModel>(
    db: &DatabaseConnection,
    params: &PageParams,
    condition: Condition,
) -> Result<(HeaderMap, Json<Vec<M>>), ApiError> {
    let (offset, limit) = parse_pagination(params, &M::pagination_config());
    let items = operations::find_page::<M>(db, condition.clone(), offset, limit).await?;
    let total_count = operations::count::<M>(db, condition).await?;
    let headers = calculate_content_range(offset, limit, total_count, M::RESOURCE_NAME_PLURAL);
    Ok((headers, Json(items)))
}

async fn find_existing<M: CrudModel>(db: &DatabaseConnection, id: Uuid) -> Result<M, ApiError> {
    operations::find_one::<M>(db, id)
        .await?
        .ok_or_else(|| ApiError::not_found(M::RESOURCE_NAME_SINGULAR, Some(id.to_string())))
}

/// `GET /` - one page of records, newest first for timestamp-capable models.
///
/// # Errors
///
/// Database failures become `500 Internal Server Error`.
pub async fn index<M>(
    Query(params): Query<PageParams>,
    State(db): State<DatabaseConnection>,
) -> Result<(HeaderMap, Json<Vec<M>>), ApiError>
where
    M: CrudModel,
{
    list_page::<M>(&db, &params, Condition::all()).await
}

/// `GET /search` - like `index`, filtered by the model's searchable fields.
///
/// `?age=30` filters `age = 30`; `?name=jo` matches names containing "jo" in
/// any case. Fields missing from the query string are not filtered.
///
/// # Errors
///
/// Database failures become `500 Internal Server Error`.
pub async fn search<M>(
    Query(params): Query<PageParams>,
    Query(fields): Query<HashMap<String, String>>,
    State(db): State<DatabaseConnection>,
) -> Result<(HeaderMap, Json<Vec<M>>), ApiError>
where
    M: CrudModel,
{
    let condition = build_search_condition::<M>(&fields, db.get_database_backend());
    list_page::<M>(&db, &params, condition).await
}

/// `GET /{id}`
///
/// # Errors
///
/// `404 Not Found` when no record has this id.
pub async fn item<M>(
    State(db): State<DatabaseConnection>,
    Path(id): Path<Uuid>,
) -> Result<Json<M>, ApiError>
where
    M: CrudModel,
{
    find_existing::<M>(&db, id).await.map(Json)
}

/// `POST /` - insert the decoded body under a fresh id and return the saved record.
///
/// # Errors
///
/// Malformed bodies keep Axum's rejection status; database failures become `500`.
pub async fn create<M>(
    State(db): State<DatabaseConnection>,
    payload: Result<Json<M>, JsonRejection>,
) -> Result<Json<M>, ApiError>
where
    M: CrudModel,
{
    let Json(model) = payload?;
    let created = operations::insert::<M>(&db, model).await?;
    tracing::debug!(resource = M::RESOURCE_NAME_SINGULAR, "record created");
    Ok(Json(created))
}

/// `PUT /{id}` and `PATCH /{id}` - replace the whole record.
///
/// The lookup happens before the body is decoded, so an unknown id is a 404
/// whatever the body holds.
///
/// # Errors
///
/// `404 Not Found` for an unknown id, Axum's rejection status for a malformed
/// body, `500` for database failures.
pub async fn update<M>(
    State(db): State<DatabaseConnection>,
    Path(id): Path<Uuid>,
    payload: Result<Json<M>, JsonRejection>,
) -> Result<Json<M>, ApiError>
where
    M: CrudModel,
{
    let existing = find_existing::<M>(&db, id).await?;
    let Json(model) = payload?;
    let updated = operations::replace::<M>(&db, id, &existing, model).await?;
    tracing::debug!(resource = M::RESOURCE_NAME_SINGULAR, %id, "record replaced");
    Ok(Json(updated))
}

/// `DELETE /{id}` - `204 No Content` on success.
///
/// # Errors
///
/// `404 Not Found` when no record has this id.
pub async fn delete<M>(
    State(db): State<DatabaseConnection>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError>
where
    M: CrudModel,
{
    find_existing::<M>(&db, id).await?;
    operations::remove::<M>(&db, id).await?;
    tracing::debug!(resource = M::RESOURCE_NAME_SINGULAR, %id, "record deleted");
    Ok(StatusCode::NO_CONTENT)
}
