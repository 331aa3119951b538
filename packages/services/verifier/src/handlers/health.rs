//! Liveness check

use kite_core::response::render_pong;

use crate::response::JsonResponse;

/// GET /
pub async fn ping() -> JsonResponse {
    tracing::debug!("ping");
    render_pong().into()
}
