//! Response Renderer
//!
//! [`VerificationOutcome`]을 HTTP 상태 코드와 고정된 JSON 본문으로 변환합니다.
//! 전송 계층과 무관하며, 모든 응답의 Content-Type은 [`CONTENT_TYPE`]입니다.
//!
//! | Outcome | Status | Body |
//! |---|---|---|
//! | `Found` | 200 | `{"key":"...","expired":false}` |
//! | `InvalidParameters` | 403 | `{"error":true,"message":"Invalid Parameters","code":403}` |
//! | `NotFound` | 403 | `InvalidParameters`와 동일 |
//! | `InternalError` | 500 | `{"error":true,"message":"Internal Server Error","code":500}` |

use serde::Serialize;

use crate::verify::VerificationOutcome;

/// 모든 응답의 Content-Type
pub const CONTENT_TYPE: &str = "application/json";

/// 직렬화 실패 시 사용하는 본문
const INTERNAL_ERROR_BODY: &[u8] =
    br#"{"error":true,"message":"Internal Server Error","code":500}"#;

/// 에러 응답 JSON
///
/// 필드 순서가 응답 본문의 순서입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ErrorEnvelope {
    pub error: bool,
    pub message: &'static str,
    pub code: u16,
}

impl ErrorEnvelope {
    /// 403 - 파라미터 누락, 알 수 없는 키, 만료된 키
    pub const INVALID_PARAMETERS: ErrorEnvelope = ErrorEnvelope {
        error: true,
        message: "Invalid Parameters",
        code: 403,
    };

    /// 404 - 등록되지 않은 경로
    pub const NOT_FOUND: ErrorEnvelope = ErrorEnvelope {
        error: true,
        message: "Not Found",
        code: 404,
    };

    /// 405 - 등록되지 않은 메서드
    pub const METHOD_NOT_ALLOWED: ErrorEnvelope = ErrorEnvelope {
        error: true,
        message: "Method Not Allowed",
        code: 405,
    };

    /// 500 - 저장소 조회 실패
    pub const INTERNAL_SERVER_ERROR: ErrorEnvelope = ErrorEnvelope {
        error: true,
        message: "Internal Server Error",
        code: 500,
    };

    pub fn render(&self) -> Rendered {
        Rendered::json(self.code, self)
    }
}

/// Liveness check 응답
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pong {
    pub text: &'static str,
    pub status: &'static str,
}

impl Pong {
    pub const OK: Pong = Pong {
        text: "pong",
        status: "OK",
    };
}

/// 렌더링된 응답 (상태 코드 + JSON 본문)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Rendered {
    fn json<T: Serialize>(status: u16, value: &T) -> Self {
        match serde_json::to_vec(value) {
            Ok(body) => Self { status, body },
            Err(e) => {
                tracing::error!("failed to serialize response body: {}", e);
                Self {
                    status: 500,
                    body: INTERNAL_ERROR_BODY.to_vec(),
                }
            }
        }
    }
}

/// 검증 결과 렌더링
pub fn render_outcome(outcome: &VerificationOutcome) -> Rendered {
    match outcome {
        VerificationOutcome::Found { key } => Rendered::json(200, key),
        // 호출자가 키의 존재 여부를 알 수 없도록 동일한 응답
        VerificationOutcome::InvalidParameters | VerificationOutcome::NotFound => {
            ErrorEnvelope::INVALID_PARAMETERS.render()
        }
        VerificationOutcome::InternalError => ErrorEnvelope::INTERNAL_SERVER_ERROR.render(),
    }
}

/// Liveness check 렌더링
pub fn render_pong() -> Rendered {
    Rendered::json(200, &Pong::OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AccessKey;

    const PONG_JSON: &str = r#"{"text":"pong","status":"OK"}"#;
    const PARAM_ERROR_JSON: &str = r#"{"error":true,"message":"Invalid Parameters","code":403}"#;
    const NOT_FOUND_JSON: &str = r#"{"error":true,"message":"Not Found","code":404}"#;
    const INTERNAL_ERROR_JSON: &str =
        r#"{"error":true,"message":"Internal Server Error","code":500}"#;

    fn body(rendered: &Rendered) -> &str {
        std::str::from_utf8(&rendered.body).unwrap()
    }

    #[test]
    fn test_render_found() {
        let rendered = render_outcome(&VerificationOutcome::Found {
            key: AccessKey::new("keykeykey"),
        });
        assert_eq!(rendered.status, 200);
        assert_eq!(body(&rendered), r#"{"key":"keykeykey","expired":false}"#);
    }

    #[test]
    fn test_not_found_renders_like_invalid_parameters() {
        let invalid = render_outcome(&VerificationOutcome::InvalidParameters);
        let not_found = render_outcome(&VerificationOutcome::NotFound);

        assert_eq!(invalid.status, 403);
        assert_eq!(body(&invalid), PARAM_ERROR_JSON);
        assert_eq!(invalid, not_found);
    }

    #[test]
    fn test_render_internal_error() {
        let rendered = render_outcome(&VerificationOutcome::InternalError);
        assert_eq!(rendered.status, 500);
        assert_eq!(body(&rendered), INTERNAL_ERROR_JSON);
        assert_eq!(rendered.body, INTERNAL_ERROR_BODY);
    }

    #[test]
    fn test_render_not_found_envelope() {
        let rendered = ErrorEnvelope::NOT_FOUND.render();
        assert_eq!(rendered.status, 404);
        assert_eq!(body(&rendered), NOT_FOUND_JSON);

        let rendered = ErrorEnvelope::METHOD_NOT_ALLOWED.render();
        assert_eq!(rendered.status, 405);
        assert_eq!(
            body(&rendered),
            r#"{"error":true,"message":"Method Not Allowed","code":405}"#
        );
    }

    #[test]
    fn test_render_pong_is_stable() {
        let first = render_pong();
        assert_eq!(first.status, 200);
        assert_eq!(body(&first), PONG_JSON);
        assert_eq!(first, render_pong());
    }
}
