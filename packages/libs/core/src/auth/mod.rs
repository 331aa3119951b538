//! 인증 관련 타입
//!
//! # 개요
//!
//! Kite는 발급된 Access Key가 존재하고 만료되지 않았는지만 판정합니다.
//! 키 발급, 교체, 만료 시각 계산은 외부 시스템의 책임입니다.

mod access_key;

pub use access_key::AccessKey;
