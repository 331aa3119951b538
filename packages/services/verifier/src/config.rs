//! Verifier 설정

use std::env;

/// Verifier 설정
#[derive(Debug, Clone)]
pub struct Config {
    /// 서버 포트
    pub port: u16,

    /// 키 저장소 (Postgres) URL
    pub database_url: String,

    /// 커넥션 풀 최대 크기
    pub db_max_connections: u32,

    /// 커넥션 획득 대기 시간 (초). 초과 시 저장소 장애로 처리됩니다.
    pub db_acquire_timeout_secs: u64,
}

impl Config {
    /// 환경변수에서 설정 로드
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// 주어진 조회 함수로 설정 로드
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        Ok(Self {
            port: var("KITE_PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()?,

            database_url: var("DATABASE_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| "postgres://localhost/kite".to_string()),

            db_max_connections: var("KITE_DB_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),

            db_acquire_timeout_secs: var("KITE_DB_ACQUIRE_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
        })
    }
}
