//! /auth 핸들러
//!
//! 쿼리 문자열의 `key` 파라미터를 검증합니다.

use std::sync::Arc;

use axum::extract::{RawQuery, State};

use kite_core::response::render_outcome;
use kite_core::VerificationRequest;

use crate::response::JsonResponse;
use crate::state::AppState;

/// GET /auth?key=<value>
pub async fn verify_key(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> JsonResponse {
    let request = VerificationRequest::new(query.as_deref().and_then(key_param));
    let outcome = state.verifier.verify(&request).await;
    render_outcome(&outcome).into()
}

/// 쿼리 문자열에서 첫 번째 `key` 값 추출
///
/// 잘못된 UTF-8 시퀀스는 U+FFFD로 대체됩니다.
fn key_param(query: &str) -> Option<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(name, _)| name == "key")
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_param() {
        assert_eq!(key_param("key=keykeykey"), Some("keykeykey".to_string()));
        assert_eq!(key_param("key="), Some(String::new()));
        assert_eq!(key_param("other=1"), None);
        assert_eq!(key_param(""), None);
    }

    #[test]
    fn test_key_param_first_value_wins() {
        assert_eq!(key_param("key=first&key=second"), Some("first".to_string()));
    }

    #[test]
    fn test_key_param_is_decoded() {
        assert_eq!(key_param("key=a%2Bb+c"), Some("a+b c".to_string()));
        assert_eq!(key_param("foo=1&key=%ZZ"), Some("%ZZ".to_string()));
    }

    #[test]
    fn test_key_param_replaces_invalid_utf8() {
        assert_eq!(key_param("key=%FF"), Some("\u{FFFD}".to_string()));
        assert_eq!(key_param("key=%FF"), key_param("key=%FE"));
        assert_eq!(key_param("key=a%FFb"), Some("a\u{FFFD}b".to_string()));
    }
}
