//! Generic CRUD routes for Sea-ORM models on Axum.
//!
//! Implement [`CrudModel`] on an entity's `Model`, then mount its routes:
//!
//! ```rust,ignore
//! let app = CrudRouter::<person::Model>::new().register(Router::new(), &db);
//! // GET /people, POST /people, GET /people/search,
//! // GET|PUT|PATCH|DELETE /people/{id}
//! ```
pub mod errors;
pub mod handlers;
pub mod models;
pub mod operations;
pub mod pagination;
pub mod routes;
pub mod search;
pub mod traits;

pub use errors::ApiError;
pub use models::PageParams;
pub use pagination::PaginationConfig;
pub use routes::CrudRouter;
pub use traits::{CrudModel, Timestamps};
