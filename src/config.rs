use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::cooling::cooling_tower::DEFAULT_WATER_CP;
use crate::properties::ProviderConfig;
use crate::refrigeration::CompressionModel;
use crate::vacuum::NormalConditions;

const CONFIG_PATH: &str = "config.toml";

/// 냉동 사이클 기본값.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefrigerationConfig {
    pub compression: CompressionModel,
}

/// 냉각탑 기본값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoolingTowerConfig {
    /// 순환수 비열 [kJ/kg·K]
    pub water_cp_kj_per_kgk: f64,
}

impl Default for CoolingTowerConfig {
    fn default() -> Self {
        Self {
            water_cp_kj_per_kgk: DEFAULT_WATER_CP,
        }
    }
}

/// 배관 내경 선정 기본값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipeSizingConfig {
    /// 후보 내경 간격 [mm]
    pub step_mm: f64,
}

impl Default for PipeSizingConfig {
    fn default() -> Self {
        Self { step_mm: 5.0 }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub provider: ProviderConfig,
    pub refrigeration: RefrigerationConfig,
    pub cooling_tower: CoolingTowerConfig,
    pub vacuum: NormalConditions,
    pub pipe_sizing: PipeSizingConfig,
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new(CONFIG_PATH);
    if path.exists() {
        Config::load_from(path)
    } else {
        let cfg = Config::default();
        cfg.save()?;
        Ok(cfg)
    }
}

impl Config {
    /// 지정한 TOML 파일에서 설정을 읽는다. 빠진 항목은 기본값으로 채운다.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(CONFIG_PATH)
    }
}
