//! Verification Service
//!
//! 호출자가 제시한 키를 [`KeyStore`]에 조회하여 [`VerificationOutcome`]으로 변환합니다.
//!
//! # 판정 순서
//!
//! 1. 키 파라미터가 없거나 비어 있음 → `InvalidParameters` (저장소 조회 없음)
//! 2. 저장소 조회 실패 → `InternalError`
//! 3. 일치하는 키 없음 또는 만료됨 → `NotFound`
//! 4. 그 외 → `Found`
//!
//! 조회는 요청당 한 번만 시도하며 재시도하지 않습니다.

use std::sync::Arc;

use crate::auth::AccessKey;
use crate::error::{Error, Result};
use crate::store::KeyStore;

/// 검증 요청
#[derive(Debug, Clone, Default)]
pub struct VerificationRequest {
    /// 쿼리 문자열에서 추출한 원본 키 값
    pub key_param: Option<String>,
}

impl VerificationRequest {
    pub fn new(key_param: Option<String>) -> Self {
        Self { key_param }
    }

    /// 조회 가능한 키 값 반환
    pub fn key(&self) -> Result<&str> {
        match self.key_param.as_deref() {
            Some(key) if !key.is_empty() => Ok(key),
            Some(_) => Err(Error::InvalidParameters {
                reason: "empty key parameter".to_string(),
            }),
            None => Err(Error::InvalidParameters {
                reason: "missing key parameter".to_string(),
            }),
        }
    }
}

/// 검증 결과
///
/// `NotFound`와 `InvalidParameters`는 응답에서는 구분되지 않지만
/// 로그에서 구분하기 위해 별도 variant로 유지합니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// 존재하고 만료되지 않은 키
    Found { key: AccessKey },

    /// 키 파라미터가 없거나 비어 있음
    InvalidParameters,

    /// 일치하는 유효 키 없음 (만료 포함)
    NotFound,

    /// 저장소 조회 실패
    InternalError,
}

/// 키 검증기
///
/// 요청 간 공유 상태가 없으므로 `Clone`하여 여러 핸들러에서 동시에 사용할 수 있습니다.
#[derive(Clone)]
pub struct Verifier {
    store: Arc<dyn KeyStore>,
}

impl Verifier {
    /// 새 검증기 생성
    pub fn new(store: Arc<dyn KeyStore>) -> Self {
        Self { store }
    }

    /// 요청 검증
    pub async fn verify(&self, request: &VerificationRequest) -> VerificationOutcome {
        let value = match request.key() {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(code = e.code(), "rejecting request: {}", e);
                return VerificationOutcome::InvalidParameters;
            }
        };

        match self.store.lookup(value).await {
            Err(e) => {
                tracing::error!(code = e.code(), "key lookup failed: {}", e);
                VerificationOutcome::InternalError
            }
            Ok(None) => {
                tracing::info!("unknown key presented");
                VerificationOutcome::NotFound
            }
            Ok(Some(key)) if key.is_expired() => {
                tracing::info!("expired key presented");
                VerificationOutcome::NotFound
            }
            Ok(Some(key)) => {
                tracing::debug!(key = %key, "key verified");
                VerificationOutcome::Found { key }
            }
        }
    }
}

impl std::fmt::Debug for Verifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Verifier").finish_non_exhaustive()
    }
}
