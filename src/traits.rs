use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, EntityTrait, FromQueryResult,
    IntoActiveModel,
};
use serde::{Serialize, de::DeserializeOwned};

use crate::pagination::PaginationConfig;

/// The creation and update time columns of a timestamp-capable model.
///
/// Both columns must hold `DateTime<Utc>`. Declaring them through
/// [`CrudModel::TIMESTAMPS`] is the single opt-in: records are stamped on
/// create and update and listed newest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timestamps<C> {
    pub created_at: C,
    pub updated_at: C,
}

/// A Sea-ORM model that can be exposed through the generated CRUD routes.
///
/// Implement this on the entity's `Model`. The model is decoded from request
/// bodies as-is, so the identifier and timestamp fields should carry
/// `#[serde(default)]`: the server assigns them.
///
/// ```rust,ignore
/// impl CrudModel for Model {
///     type EntityType = Entity;
///     type ColumnType = Column;
///     type ActiveModelType = ActiveModel;
///
///     const ID_COLUMN: Column = Column::Id;
///     const RESOURCE_NAME_SINGULAR: &'static str = "person";
///     const RESOURCE_NAME_PLURAL: &'static str = "people";
///
///     const TIMESTAMPS: Option<Timestamps<Column>> = Some(Timestamps {
///         created_at: Column::CreatedAt,
///         updated_at: Column::UpdatedAt,
///     });
///
///     fn searchable_fields() -> Vec<(&'static str, Column)> {
///         vec![("name", Column::Name), ("age", Column::Age)]
///     }
/// }
/// ```
pub trait CrudModel:
    Sized
    + Clone
    + Send
    + Sync
    + Serialize
    + DeserializeOwned
    + FromQueryResult
    + IntoActiveModel<Self::ActiveModelType>
    + 'static
{
    type EntityType: EntityTrait<Model = Self, Column = Self::ColumnType> + Sync;
    type ColumnType: ColumnTrait + std::fmt::Debug;
    type ActiveModelType: ActiveModelTrait<Entity = Self::EntityType>
        + ActiveModelBehavior
        + Send
        + Sync;

    /// UUID primary key column.
    const ID_COLUMN: Self::ColumnType;
    const RESOURCE_NAME_SINGULAR: &'static str;
    const RESOURCE_NAME_PLURAL: &'static str;
    /// Timestamp columns, `None` for models without creation/update times.
    const TIMESTAMPS: Option<Timestamps<Self::ColumnType>> = None;

    /// Mount point used by [`crate::CrudRouter::new`].
    #[must_use]
    fn route_prefix() -> String {
        format!("/{}", Self::RESOURCE_NAME_PLURAL)
    }

    /// Query-string names and the columns they filter in `GET /search`, in order.
    #[must_use]
    fn searchable_fields() -> Vec<(&'static str, Self::ColumnType)> {
        vec![]
    }

    #[must_use]
    fn pagination_config() -> PaginationConfig {
        PaginationConfig::default()
    }
}
