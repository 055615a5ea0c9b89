//! 로마자 변환 옵션
//!
//! 단어 유형과 동화 방향은 호출자가 넘겨주는 힌트입니다.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RomanizeError;

/// 자음동화 방향이 모호할 때(ㄴ+ㄹ 등) 적용할 방향
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssimilationDirection {
    /// 순행 동화 (신라 -> sinna)
    #[default]
    Progressive,
    /// 역행 동화 (신라 -> silla)
    Regressive,
}

/// 단어 유형. 일부 규칙의 적용 여부를 바꿉니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordClass {
    /// 체언: 거센소리되기를 적용하지 않고 형태소 경계를 유지
    Substantive,
    /// 합성어: ㄴ 첨가 (ㅣ/y계열 모음 앞)
    Compound,
    /// 지명, 주소
    PlaceName,
    /// 인명: 음절 사이 음운 변화를 적용하지 않음
    PersonalName,
    /// 일반 단어
    #[default]
    Generic,
}

impl AssimilationDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            AssimilationDirection::Progressive => "progressive",
            AssimilationDirection::Regressive => "regressive",
        }
    }
}

impl WordClass {
    pub fn as_str(self) -> &'static str {
        match self {
            WordClass::Substantive => "substantive",
            WordClass::Compound => "compound",
            WordClass::PlaceName => "place_name",
            WordClass::PersonalName => "personal_name",
            WordClass::Generic => "generic",
        }
    }
}

impl fmt::Display for AssimilationDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for WordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssimilationDirection {
    type Err = RomanizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "progressive" | "p" => Ok(AssimilationDirection::Progressive),
            "regressive" | "r" => Ok(AssimilationDirection::Regressive),
            _ => Err(RomanizeError::UnknownDirection(s.to_string())),
        }
    }
}

impl FromStr for WordClass {
    type Err = RomanizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "substantive" => Ok(WordClass::Substantive),
            "compound" => Ok(WordClass::Compound),
            "place" | "place_name" => Ok(WordClass::PlaceName),
            "name" | "personal_name" => Ok(WordClass::PersonalName),
            "generic" => Ok(WordClass::Generic),
            _ => Err(RomanizeError::UnknownWordClass(s.to_string())),
        }
    }
}

/// 로마자 변환 옵션
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RomanizeOptions {
    #[serde(default)]
    pub direction: AssimilationDirection,
    #[serde(default)]
    pub word_class: WordClass,
}

impl RomanizeOptions {
    /// 기본 옵션 (순행 동화, 일반 단어)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_direction(mut self, direction: AssimilationDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_word_class(mut self, word_class: WordClass) -> Self {
        self.word_class = word_class;
        self
    }
}
