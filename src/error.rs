//! 로마자 변환 에러

use thiserror::Error;

/// 음절 생성 및 옵션 파싱 에러
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RomanizeError {
    /// 초성/중성/종성 중 하나가 빠진 채로 음절 생성 시도
    #[error("invalid syllable component: {missing} is missing")]
    InvalidComponent { missing: &'static str },

    /// 알 수 없는 단어 유형 이름
    #[error("unknown word class: {0}")]
    UnknownWordClass(String),

    /// 알 수 없는 동화 방향 이름
    #[error("unknown assimilation direction: {0}")]
    UnknownDirection(String),
}

pub type Result<T> = std::result::Result<T, RomanizeError>;
