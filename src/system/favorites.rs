use crate::utils::error::{DeerFmError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

const FAVORITES_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedFavorites {
    version: u32,
    paths: Vec<PathBuf>,
}

/// 즐겨찾기 경로 목록을 TOML 파일로 보관
///
/// 복제본끼리 잠금을 공유하므로 여러 작업에서 동시에 고쳐도
/// 읽기-수정-쓰기가 한 번에 하나씩 일어난다.
#[derive(Debug, Clone)]
pub struct FavoritesStore {
    path: Option<PathBuf>,
    edit_lock: Arc<Mutex<()>>,
}

impl FavoritesStore {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
            edit_lock: Arc::new(Mutex::new(())),
        }
    }

    /// 아무것도 저장하지 않는 스토어 (설정 디렉토리가 없을 때)
    pub fn disabled() -> Self {
        Self::new(None)
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        // 보호하는 값이 없으므로 poison은 무시한다
        self.edit_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// 저장된 경로 목록. 파일이 없거나 버전이 다르면 빈 목록
    pub fn load(&self) -> Vec<PathBuf> {
        let _guard = self.lock();
        self.read_paths()
    }

    fn read_paths(&self) -> Vec<PathBuf> {
        let Some(path) = &self.path else {
            return Vec::new();
        };
        let Ok(data) = fs::read_to_string(path) else {
            return Vec::new();
        };
        match toml::from_str::<PersistedFavorites>(&data) {
            Ok(parsed) if parsed.version == FAVORITES_VERSION => parsed.paths,
            Ok(_) => {
                log::warn!("favorites file {} has an unknown version", path.display());
                Vec::new()
            }
            Err(err) => {
                log::warn!("cannot parse favorites file {}: {}", path.display(), err);
                Vec::new()
            }
        }
    }

    fn save(&self, paths: &[PathBuf]) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| DeerFmError::from_io(e, parent))?;
        }
        let payload = PersistedFavorites {
            version: FAVORITES_VERSION,
            paths: paths.to_vec(),
        };
        let data =
            toml::to_string_pretty(&payload).map_err(|e| DeerFmError::Config(e.to_string()))?;
        fs::write(path, data).map_err(|e| DeerFmError::from_io(e, path))
    }

    /// 경로 추가 (이미 있으면 그대로)
    pub fn add(&self, favorite: &Path) -> Result<Vec<PathBuf>> {
        let _guard = self.lock();
        let mut paths = self.read_paths();
        if !paths.iter().any(|p| p == favorite) {
            paths.push(favorite.to_path_buf());
            self.save(&paths)?;
        }
        Ok(paths)
    }

    /// id(경로 문자열)로 제거
    pub fn remove(&self, id: &str) -> Result<Vec<PathBuf>> {
        let _guard = self.lock();
        let mut paths = self.read_paths();
        let before = paths.len();
        paths.retain(|p| p.to_string_lossy() != id);
        if paths.len() != before {
            self.save(&paths)?;
        }
        Ok(paths)
    }
}
