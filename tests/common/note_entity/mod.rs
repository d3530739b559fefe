use crudroute::{CrudModel, PaginationConfig};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A model without the timestamp capability.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "notes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(default)]
    pub id: Uuid,
    pub title: String,
    pub body: Option<String>,
    pub priority: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl CrudModel for Model {
    type EntityType = Entity;
    type ColumnType = Column;
    type ActiveModelType = ActiveModel;

    const ID_COLUMN: Self::ColumnType = Column::Id;
    const RESOURCE_NAME_SINGULAR: &'static str = "note";
    const RESOURCE_NAME_PLURAL: &'static str = "notes";

    fn searchable_fields() -> Vec<(&'static str, Self::ColumnType)> {
        vec![("title", Column::Title), ("priority", Column::Priority)]
    }

    fn pagination_config() -> PaginationConfig {
        PaginationConfig {
            default_per_page: 5,
            max_per_page: 20,
        }
    }
}
