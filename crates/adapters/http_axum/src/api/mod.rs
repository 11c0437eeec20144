//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod properties;

use axum::Router;
use axum::routing::{get, post};

use listings_app::ports::PropertyRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<PR>() -> Router<AppState<PR>>
where
    PR: PropertyRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/properties",
            get(properties::list::<PR>).post(properties::create::<PR>),
        )
        // Older clients post here; same contract as `POST /properties`.
        .route("/add-property", post(properties::add::<PR>))
}
