#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode},
};
use crudroute::CrudRouter;
use sea_orm::{Database, DatabaseConnection, DbErr};
use sea_orm_migration::prelude::*;
use serde_json::Value;
use tower::ServiceExt;

pub mod note_entity;

pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect("sqlite::memory:").await?;

    // Run migrations
    Migrator::up(&db, None).await?;

    Ok(db)
}

pub fn setup_test_app(db: &DatabaseConnection) -> Router {
    let api = CrudRouter::<person_entity::Model>::new().register(Router::new(), db);
    let api = CrudRouter::<note_entity::Model>::new().register(api, db);

    Router::new().nest("/api/v1", api)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn parse<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).unwrap()
    }
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<&Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();

    TestResponse {
        status,
        headers,
        body,
    }
}

/// POST a person and return the saved record.
pub async fn create_person(app: &Router, name: &str, age: i32) -> person_entity::Model {
    let response = send(
        app,
        "POST",
        "/api/v1/people",
        Some(&serde_json::json!({"name": name, "age": age})),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    response.parse()
}

/// POST a note and return the saved record.
pub async fn create_note(app: &Router, title: &str, priority: i32) -> note_entity::Model {
    let response = send(
        app,
        "POST",
        "/api/v1/notes",
        Some(&serde_json::json!({"title": title, "priority": priority})),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    response.parse()
}

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(CreatePeopleTable), Box::new(CreateNotesTable)]
    }
}

pub struct CreatePeopleTable;

#[async_trait::async_trait]
impl MigrationName for CreatePeopleTable {
    fn name(&self) -> &'static str {
        "m20240101_000001_create_people_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for CreatePeopleTable {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let table = Table::create()
            .table(PeopleTable)
            .if_not_exists()
            .col(
                ColumnDef::new(PersonColumn::Id)
                    .uuid()
                    .not_null()
                    .primary_key(),
            )
            .col(ColumnDef::new(PersonColumn::Name).string().not_null())
            .col(ColumnDef::new(PersonColumn::Age).integer().not_null())
            .col(
                ColumnDef::new(PersonColumn::CreatedAt)
                    .timestamp_with_time_zone()
                    .not_null(),
            )
            .col(
                ColumnDef::new(PersonColumn::UpdatedAt)
                    .timestamp_with_time_zone()
                    .not_null(),
            )
            .to_owned();

        manager.create_table(table).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PeopleTable).to_owned())
            .await?;
        Ok(())
    }
}

pub struct CreateNotesTable;

#[async_trait::async_trait]
impl MigrationName for CreateNotesTable {
    fn name(&self) -> &'static str {
        "m20240101_000002_create_notes_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for CreateNotesTable {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let table = Table::create()
            .table(NotesTable)
            .if_not_exists()
            .col(
                ColumnDef::new(NoteColumn::Id)
                    .uuid()
                    .not_null()
                    .primary_key(),
            )
            .col(ColumnDef::new(NoteColumn::Title).string().not_null())
            .col(ColumnDef::new(NoteColumn::Body).text().null())
            .col(
                ColumnDef::new(NoteColumn::Priority)
                    .integer()
                    .not_null()
                    .default(0),
            )
            .to_owned();

        manager.create_table(table).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NotesTable).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(Debug)]
pub enum PersonColumn {
    Id,
    Name,
    Age,
    CreatedAt,
    UpdatedAt,
}

impl Iden for PersonColumn {
    fn unquoted(&self, s: &mut dyn std::fmt::Write) {
        write!(
            s,
            "{}",
            match self {
                Self::Id => "id",
                Self::Name => "name",
                Self::Age => "age",
                Self::CreatedAt => "created_at",
                Self::UpdatedAt => "updated_at",
            }
        )
        .unwrap();
    }
}

#[derive(Debug)]
pub struct PeopleTable;

impl Iden for PeopleTable {
    fn unquoted(&self, s: &mut dyn std::fmt::Write) {
        write!(s, "people").unwrap();
    }
}

#[derive(Debug)]
pub enum NoteColumn {
    Id,
    Title,
    Body,
    Priority,
}

impl Iden for NoteColumn {
    fn unquoted(&self, s: &mut dyn std::fmt::Write) {
        write!(
            s,
            "{}",
            match self {
                Self::Id => "id",
                Self::Title => "title",
                Self::Body => "body",
                Self::Priority => "priority",
            }
        )
        .unwrap();
    }
}

#[derive(Debug)]
pub struct NotesTable;

impl Iden for NotesTable {
    fn unquoted(&self, s: &mut dyn std::fmt::Write) {
        write!(s, "notes").unwrap();
    }
}
