//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::romanize::{AssimilationDirection, RomanizeOptions, WordClass};

/// 설정 파일 에러
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("설정 파일 입출력 실패: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파일 형식 오류: {0}")]
    Json(#[from] serde_json::Error),
}

/// 변환기 설정
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RomanizerConfig {
    /// ㄴ+ㄹ 등 동화 방향이 모호할 때 적용할 방향
    #[serde(default)]
    pub direction: AssimilationDirection,
    /// 기본 단어 유형
    #[serde(default)]
    pub word_class: WordClass,
}

impl RomanizerConfig {
    /// 변환 옵션으로 변환
    pub fn options(&self) -> RomanizeOptions {
        RomanizeOptions::new()
            .with_direction(self.direction)
            .with_word_class(self.word_class)
    }
}

/// 설정 파일 경로: $XDG_CONFIG_HOME/koroman/config.json (없으면 ~/.config)
pub fn config_path() -> PathBuf {
    let absolute_dir = |var: &str| {
        std::env::var(var)
            .ok()
            .map(PathBuf::from)
            .filter(|p| p.is_absolute() && p.is_dir())
    };
    let base = absolute_dir("XDG_CONFIG_HOME")
        .or_else(|| absolute_dir("HOME").map(|home| home.join(".config")))
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    base.join("koroman").join("config.json")
}

/// 지정한 경로에서 설정 로드 (파일 없으면 기본값, 파싱 실패는 에러)
pub fn load_config_from(path: &Path) -> Result<RomanizerConfig, ConfigError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(serde_json::from_str(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(RomanizerConfig::default()),
        Err(e) => Err(e.into()),
    }
}

/// 기본 경로에서 설정 로드 (실패 시 기본값)
pub fn load_config() -> RomanizerConfig {
    let path = config_path();
    load_config_from(&path).unwrap_or_else(|e| {
        log::warn!("설정 로드 실패, 기본값 사용 ({}): {}", path.display(), e);
        RomanizerConfig::default()
    })
}

/// 지정한 경로에 설정 저장
pub fn save_config_to(path: &Path, config: &RomanizerConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}

/// 기본 경로에 설정 저장
pub fn save_config(config: &RomanizerConfig) -> Result<(), ConfigError> {
    save_config_to(&config_path(), config)
}
