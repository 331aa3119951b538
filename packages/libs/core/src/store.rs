//! Key Store Gateway
//!
//! 영속화된 키 테이블에 대한 읽기 전용 인터페이스입니다.
//! 운영 환경은 Postgres 구현(`kite-verifier`)을, 테스트는 [`MemoryKeyStore`]를 사용합니다.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::auth::AccessKey;
use crate::error::{Error, Result};

/// 키 저장소 조회 인터페이스
///
/// 구현체는 동시 읽기를 지원해야 합니다 (커넥션 풀 등).
#[async_trait]
pub trait KeyStore: Send + Sync {
    /// 키 값과 정확히 일치하는 레코드 조회
    ///
    /// - `Ok(Some(key))`: 일치하는 키 (만료 여부와 무관)
    /// - `Ok(None)`: 일치하는 행 없음
    /// - `Err(Error::StoreUnavailable)`: 저장소에 질의할 수 없음
    ///
    /// `value`가 비어 있지 않은지는 호출자가 확인합니다.
    async fn lookup(&self, value: &str) -> Result<Option<AccessKey>>;
}

/// 메모리 기반 키 저장소
#[derive(Debug, Default)]
pub struct MemoryKeyStore {
    keys: RwLock<HashMap<String, AccessKey>>,
}

impl MemoryKeyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 주어진 키들로 초기화. 같은 값이 여러 번 나오면 첫 번째 키를 유지합니다.
    pub fn with_keys(keys: impl IntoIterator<Item = AccessKey>) -> Self {
        let mut map = HashMap::new();
        for key in keys {
            map.entry(key.value().to_string()).or_insert(key);
        }
        Self {
            keys: RwLock::new(map),
        }
    }

    /// 키 추가. 같은 값의 키가 이미 있으면 덮어쓰지 않습니다.
    pub fn insert(&self, key: AccessKey) -> Result<bool> {
        let mut keys = self.write()?;
        if keys.contains_key(key.value()) {
            return Ok(false);
        }
        keys.insert(key.value().to_string(), key);
        Ok(true)
    }

    /// 키 만료 처리
    pub fn expire(&self, value: &str) -> Result<bool> {
        let mut keys = self.write()?;
        match keys.get_mut(value) {
            Some(key) => {
                key.expire();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<String, AccessKey>>> {
        self.keys
            .write()
            .map_err(|_| Error::store_unavailable("memory key store lock poisoned"))
    }
}

#[async_trait]
impl KeyStore for MemoryKeyStore {
    async fn lookup(&self, value: &str) -> Result<Option<AccessKey>> {
        let keys = self
            .keys
            .read()
            .map_err(|_| Error::store_unavailable("memory key store lock poisoned"))?;
        Ok(keys.get(value).cloned())
    }
}
