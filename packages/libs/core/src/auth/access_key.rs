//! Access Key
//!
//! 호출자가 제시하는 키와 그 만료 상태를 표현하는 타입입니다.

use serde::Serialize;

/// 발급된 Access Key
///
/// 발급/만료 처리는 외부 프로세스의 책임이며, Kite는 조회만 합니다.
/// `value`는 발급 후 변경되지 않고, `expired`는 false → true로만 전이합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessKey {
    /// 키 값 (저장소 내 유일)
    #[serde(rename = "key")]
    value: String,

    /// 만료 여부
    expired: bool,
}

impl AccessKey {
    /// 활성 키 생성
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            expired: false,
        }
    }

    /// 저장소에서 읽은 행으로부터 생성
    pub fn from_row(value: impl Into<String>, expired: bool) -> Self {
        Self {
            value: value.into(),
            expired,
        }
    }

    /// 키 값 참조
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    /// 만료 처리. 되돌릴 수 없습니다.
    pub fn expire(&mut self) {
        self.expired = true;
    }

    /// 만료된 사본 반환
    pub fn expired(mut self) -> Self {
        self.expire();
        self
    }
}

impl std::fmt::Display for AccessKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
