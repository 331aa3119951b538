//! HTTP 핸들러

pub mod auth;
pub mod health;

use kite_core::response::ErrorEnvelope;

use crate::response::JsonResponse;

/// 등록되지 않은 경로
pub async fn not_found() -> JsonResponse {
    ErrorEnvelope::NOT_FOUND.render().into()
}

/// 경로는 있으나 메서드가 등록되지 않은 경우
pub async fn method_not_allowed() -> JsonResponse {
    ErrorEnvelope::METHOD_NOT_ALLOWED.render().into()
}
