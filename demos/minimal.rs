//! Minimal CRUD API for a `tasks` table.
//!
//! ```bash
//! cargo run --example minimal
//! ```
//!
//! Then try:
//! - `curl -X POST localhost:3000/tasks -H 'content-type: application/json' -d '{"title":"write docs","done":false}'`
//! - `curl 'localhost:3000/tasks/search?title=DOCS'`

use chrono::{DateTime, Utc};
use crudroute::{CrudModel, CrudRouter, Timestamps};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, entity::prelude::*};
use serde::{Deserialize, Serialize};
use std::env;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(default)]
    pub id: Uuid,
    pub title: String,
    pub done: bool,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}
impl ActiveModelBehavior for ActiveModel {}

impl CrudModel for Model {
    type EntityType = Entity;
    type ColumnType = Column;
    type ActiveModelType = ActiveModel;

    const ID_COLUMN: Self::ColumnType = Column::Id;
    const RESOURCE_NAME_SINGULAR: &'static str = "task";
    const RESOURCE_NAME_PLURAL: &'static str = "tasks";
    const TIMESTAMPS: Option<Timestamps<Self::ColumnType>> = Some(Timestamps {
        created_at: Column::CreatedAt,
        updated_at: Column::UpdatedAt,
    });

    fn searchable_fields() -> Vec<(&'static str, Self::ColumnType)> {
        vec![("title", Column::Title)]
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("crudroute=debug")),
        )
        .init();

    let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string());
    let db: DatabaseConnection = Database::connect(&database_url).await?;

    db.execute(sea_orm::Statement::from_string(
        db.get_database_backend(),
        r"CREATE TABLE IF NOT EXISTS tasks (
            id TEXT PRIMARY KEY NOT NULL,
            title TEXT NOT NULL,
            done BOOLEAN NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );"
        .to_owned(),
    ))
    .await?;

    let app = CrudRouter::<Model>::new().into_router::<()>(&db);
    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
    tracing::info!("listening on http://0.0.0.0:3000/tasks");
    axum::serve(listener, app).await?;
    Ok(())
}
