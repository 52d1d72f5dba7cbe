use crate::{
    dto::{request::GenerateQrQuery, response::GenerateQrResponse},
    utils::error::{self, AppResult},
    ServiceState,
};
use axum::{
    extract::{RawQuery, State},
    Json,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Relays a url from the query string to the generation service.
pub async fn generate_qr(
    State(state): State<Arc<ServiceState>>,
    RawQuery(raw): RawQuery,
) -> AppResult<Json<GenerateQrResponse>> {
    let query = GenerateQrQuery::from_raw(raw.as_deref());
    let Some(url) = query.target() else {
        return Err(error::url_required());
    };
    info!("Generating the QR code for '{}'.", url);

    let upstream = state
        .generator
        .generate(url)
        .await
        .map_err(|e| error::generation_failed("Error generating QR Code", e))?;

    let res = GenerateQrResponse::from(upstream);
    info!(
        qr_image_len = ?res.qr_image.as_ref().map(String::len),
        qr_code_url = ?res.qr_code_url,
        id = ?res.id,
        "QR service responded"
    );
    debug!(qr_image = ?res.qr_image, "QR image payload");
    Ok(Json(res))
}
