use axum::{Router, http::Method, middleware, routing::get};
use tower_http::cors::{Any, CorsLayer};

use crate::{
    auth::auth_middleware,
    routes::{healthz, whoami},
};

pub fn app() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
        .allow_credentials(false);

    let protected_routes = Router::new()
        .route("/whoami", get(whoami))
        .layer(middleware::from_fn(auth_middleware));

    Router::new()
        .merge(protected_routes)
        .route("/healthz", get(healthz))
        .layer(cors)
}
