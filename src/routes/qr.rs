use std::sync::Arc;

use crate::controllers::qr;
use crate::ServiceState;
use axum::routing::post;

pub fn add_routers(router: axum::Router<Arc<ServiceState>>) -> axum::Router<Arc<ServiceState>> {
    router.route("/api/generate-qr", post(qr::generate_qr))
}
