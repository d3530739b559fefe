use std::marker::PhantomData;

use axum::{
    Router,
    handler::Handler,
    routing::{MethodRouter, delete, get, post, put},
};
use sea_orm::DatabaseConnection;

use crate::handlers;
use crate::traits::CrudModel;

/// The six CRUD handlers for a model, ready to be mounted on a router.
///
/// | Method | Path | Handler |
/// |---|---|---|
/// | GET | `/` | `index` |
/// | POST | `/` | `create` |
/// | GET | `/search` | `search` |
/// | GET | `/{id}` | `item` |
/// | PUT, PATCH | `/{id}` | `update` |
/// | DELETE | `/{id}` | `delete` |
///
/// Every slot starts with the default handler from [`crate::handlers`] and can
/// be replaced with any Axum handler whose state is the database connection:
///
/// ```rust,ignore
/// let app = CrudRouter::<person::Model>::new()
///     .with_prefix("/api/people")
///     .delete(soft_delete_person)
///     .register(Router::new(), &db);
/// ```
pub struct CrudRouter<M> {
    prefix: String,
    index: MethodRouter<DatabaseConnection>,
    search: MethodRouter<DatabaseConnection>,
    item: MethodRouter<DatabaseConnection>,
    create: MethodRouter<DatabaseConnection>,
    update: MethodRouter<DatabaseConnection>,
    delete: MethodRouter<DatabaseConnection>,
    _model: PhantomData<fn() -> M>,
}

impl<M: CrudModel> Default for CrudRouter<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: CrudModel> CrudRouter<M> {
    /// Default handlers, mounted at [`CrudModel::route_prefix`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            prefix: M::route_prefix(),
            index: get(handlers::index::<M>),
            search: get(handlers::search::<M>),
            item: get(handlers::item::<M>),
            create: post(handlers::create::<M>),
            update: put(handlers::update::<M>).patch(handlers::update::<M>),
            delete: delete(handlers::delete::<M>),
            _model: PhantomData,
        }
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub fn index<H, T>(mut self, handler: H) -> Self
    where
        H: Handler<T, DatabaseConnection>,
        T: 'static,
    {
        self.index = get(handler);
        self
    }

    #[must_use]
    pub fn search<H, T>(mut self, handler: H) -> Self
    where
        H: Handler<T, DatabaseConnection>,
        T: 'static,
    {
        self.search = get(handler);
        self
    }

    #[must_use]
    pub fn item<H, T>(mut self, handler: H) -> Self
    where
        H: Handler<T, DatabaseConnection>,
        T: 'static,
    {
        self.item = get(handler);
        self
    }

    #[must_use]
    pub fn create<H, T>(mut self, handler: H) -> Self
    where
        H: Handler<T, DatabaseConnection>,
        T: 'static,
    {
        self.create = post(handler);
        self
    }

    /// Replaces the handler behind both `PUT /{id}` and `PATCH /{id}`.
    #[must_use]
    pub fn update<H, T>(mut self, handler: H) -> Self
    where
        H: Handler<T, DatabaseConnection>,
        T: 'static,
    {
        self.update = put(handler.clone()).patch(handler);
        self
    }

    #[must_use]
    pub fn delete<H, T>(mut self, handler: H) -> Self
    where
        H: Handler<T, DatabaseConnection>,
        T: 'static,
    {
        self.delete = delete(handler);
        self
    }

    /// The routes relative to the mount point, still waiting for their state.
    #[must_use]
    pub fn routes(self) -> Router<DatabaseConnection> {
        Router::new()
            .route("/", self.index.merge(self.create))
            .route("/search", self.search)
            .route("/{id}", self.item.merge(self.update).merge(self.delete))
    }

    /// Mount the routes on `router` under the prefix, with `db` as their state.
    ///
    /// A prefix of `""` or `"/"` merges the routes at the root of `router`.
    #[must_use]
    pub fn register<S>(self, router: Router<S>, db: &DatabaseConnection) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        let mount = mount_path(&self.prefix);
        tracing::debug!(
            resource = M::RESOURCE_NAME_PLURAL,
            mount = mount.as_deref().unwrap_or("/"),
            "registering CRUD routes"
        );

        let routes = self.routes().with_state(db.clone());
        match mount {
            Some(path) => router.nest(&path, routes),
            None => router.merge(routes),
        }
    }

    /// Shorthand for [`Self::register`] onto an empty router.
    #[must_use]
    pub fn into_router<S>(self, db: &DatabaseConnection) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        self.register(Router::new(), db)
    }
}

/// Normalize a prefix into a nest path; `None` means the root.
fn mount_path(prefix: &str) -> Option<String> {
    let trimmed = prefix.trim_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(format!("/{trimmed}"))
    }
}
