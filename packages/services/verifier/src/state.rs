//! Verifier 앱 상태

use std::sync::Arc;

use kite_core::{KeyStore, Verifier};

/// 앱 상태
///
/// 모든 핸들러에서 공유하는 상태입니다. 요청 간 변경되는 값은 없습니다.
pub struct AppState {
    /// 키 검증기
    pub verifier: Verifier,
}

impl AppState {
    /// 새 상태 생성
    pub fn new(store: Arc<dyn KeyStore>) -> Self {
        Self {
            verifier: Verifier::new(store),
        }
    }
}
