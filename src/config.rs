//! 설정 파일 (TOML)
//!
//! 위치: `$DEERFM_CONFIG` 또는 `<config_dir>/deerfm/config.toml`.
//! 파일이 없으면 기본값을 쓴다.

use crate::models::landing::DEFAULT_FAVORITES_PAGE_SIZE;
use crate::models::lazy_list::{DEFAULT_INITIAL_ITEMS, DEFAULT_LOAD_STEP, DEFAULT_SCROLL_THRESHOLD};
use crate::models::rubber_band::GridMetrics;
use crate::models::tab_store::DEFAULT_MAX_TABS;
use crate::utils::error::{DeerFmError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "DEERFM_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 시작 시 첫 탭에서 열 경로 (없으면 랜딩 화면)
    pub start_path: Option<PathBuf>,
    pub max_tabs: usize,
    pub favorites_page_size: usize,
    pub initial_items: usize,
    pub load_step: usize,
    pub scroll_threshold: u32,
    pub grid_columns: usize,
    /// env_logger 필터 (RUST_LOG가 우선)
    pub log_level: String,
    /// 즐겨찾기 저장 파일 (없으면 설정 디렉토리 아래)
    pub favorites_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_path: None,
            max_tabs: DEFAULT_MAX_TABS,
            favorites_page_size: DEFAULT_FAVORITES_PAGE_SIZE,
            initial_items: DEFAULT_INITIAL_ITEMS,
            load_step: DEFAULT_LOAD_STEP,
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            grid_columns: GridMetrics::default().columns,
            log_level: "info".to_string(),
            favorites_file: None,
        }
    }
}

impl Config {
    /// 기본 위치에서 로드. 파일이 없으면 기본값
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| DeerFmError::from_io(e, path))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| DeerFmError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.max_tabs == 0 {
            return Err(DeerFmError::Config("max_tabs must be at least 1".to_string()));
        }
        if self.favorites_page_size == 0 {
            return Err(DeerFmError::Config(
                "favorites_page_size must be at least 1".to_string(),
            ));
        }
        if self.grid_columns == 0 {
            return Err(DeerFmError::Config("grid_columns must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn default_path() -> Option<PathBuf> {
        if let Ok(custom) = env::var(CONFIG_ENV) {
            let trimmed = custom.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
        dirs::config_dir().map(|dir| dir.join("deerfm").join("config.toml"))
    }

    pub fn favorites_path(&self) -> Option<PathBuf> {
        self.favorites_file
            .clone()
            .or_else(|| dirs::config_dir().map(|dir| dir.join("deerfm").join("favorites.toml")))
    }

    pub fn grid_metrics(&self) -> GridMetrics {
        GridMetrics {
            columns: self.grid_columns,
            ..GridMetrics::default()
        }
    }
}
