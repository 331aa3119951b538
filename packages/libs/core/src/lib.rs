//! kite-core: Kite 키 검증 핵심 라이브러리
//!
//! 이 크레이트는 키 검증 판정과 응답 계약을 제공합니다.
//! 전송 계층(HTTP)과 영속 계층(DB 드라이버)에 의존하지 않습니다.
//!
//! # 모듈 구조
//!
//! - `auth`: Access Key 타입
//! - `store`: 키 저장소 조회 인터페이스 (Key Store Gateway)
//! - `verify`: 검증 판정 (Verification Service)
//! - `response`: 응답 상태 코드/JSON 본문 렌더링
//! - `error`: 공통 에러 타입

pub mod auth;
pub mod error;
pub mod response;
pub mod store;
pub mod verify;

pub use error::{Error, Result};
pub use store::{KeyStore, MemoryKeyStore};
pub use verify::{VerificationOutcome, VerificationRequest, Verifier};
