//! Static file server over the build output.

use std::path::Path;

use axum::Router;
use tower_http::services::ServeDir;

/// Create the router serving `output_dir`.
///
/// The site has no server-side routes; every request falls through to the
/// files written by the build.
pub fn create_router(output_dir: &Path) -> Router {
    Router::new().fallback_service(ServeDir::new(output_dir))
}
