//! API server builder and router

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::store::UserStore;

/// Builder for configuring and creating the users service
#[derive(Debug, Default)]
pub struct UsersBuilder {
    store: Option<UserStore>,
}

impl UsersBuilder {
    /// Create a new users builder
    pub fn new() -> Self {
        Self { store: None }
    }

    /// Use an existing store instead of a fresh, empty one
    pub fn store(mut self, store: UserStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Build the users service
    ///
    /// Returns a Router that can be served with any tower-compatible server
    pub fn build(self) -> Router {
        let store = self.store.unwrap_or_default();

        Router::new()
            .route("/", get(root))
            .merge(crate::users::router())
            .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
            .with_state(store)
    }
}

/// Welcome endpoint
async fn root() -> &'static str {
    "Hello, users API!"
}
