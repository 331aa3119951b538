//! 공통 에러 타입
//!
//! Kite 전체에서 사용되는 에러 타입을 정의합니다.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Kite 공통 에러
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────────────────────
    // Request Errors
    // ─────────────────────────────────────────────────────────────────────────────
    #[error("invalid parameters: {reason}")]
    InvalidParameters { reason: String },

    // ─────────────────────────────────────────────────────────────────────────────
    // Store Errors
    // ─────────────────────────────────────────────────────────────────────────────
    /// 키 저장소에 질의할 수 없음 (연결/인증 실패, 풀 타임아웃, 쿼리 오류)
    ///
    /// "결과 없음"은 에러가 아닙니다. `Ok(None)`으로 표현됩니다.
    #[error("key store unavailable: {message}")]
    StoreUnavailable { message: String },
}

impl Error {
    /// 저장소 에러 생성 헬퍼
    pub fn store_unavailable(message: impl Into<String>) -> Self {
        Error::StoreUnavailable {
            message: message.into(),
        }
    }

    /// 에러 코드 (로그용)
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidParameters { .. } => "INVALID_PARAMETERS",
            Error::StoreUnavailable { .. } => "STORE_UNAVAILABLE",
        }
    }
}
