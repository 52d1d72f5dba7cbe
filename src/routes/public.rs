use crate::ServiceState;
use std::sync::Arc;
use tower_http::services::ServeDir;

/// Serves the form page and anything else under the public directory.
pub fn add_routers(
    router: axum::Router<Arc<ServiceState>>,
    public_dir: &str,
) -> axum::Router<Arc<ServiceState>> {
    router.fallback_service(ServeDir::new(public_dir))
}
