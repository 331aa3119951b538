//! 렌더링된 응답을 axum 응답으로 변환

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use kite_core::response::{Rendered, CONTENT_TYPE};

/// JSON 응답
///
/// 상태 코드와 본문은 `kite_core::response`에서 결정되며,
/// 여기서는 Content-Type만 붙입니다.
#[derive(Debug)]
pub struct JsonResponse(pub Rendered);

impl From<Rendered> for JsonResponse {
    fn from(rendered: Rendered) -> Self {
        Self(rendered)
    }
}

impl IntoResponse for JsonResponse {
    fn into_response(self) -> Response {
        let Rendered { status, body } = self.0;
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, [(header::CONTENT_TYPE, CONTENT_TYPE)], body).into_response()
    }
}
