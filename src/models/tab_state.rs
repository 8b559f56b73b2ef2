use crate::models::dir_entry::DirEntry;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// 랜딩 탭 이름
pub const LANDING_TAB_NAME: &str = "New";

/// 탭 ID (스토어 안에서 단조 증가)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TabId(pub u64);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 탭 하나의 상태
#[derive(Debug, Clone)]
pub struct Tab {
    pub id: TabId,
    /// 탭 바에 표시되는 이름
    pub name: String,
    /// 현재 디렉토리
    pub path: PathBuf,
    /// 디렉토리 목록
    pub content: Vec<DirEntry>,
    /// 잠긴 탭은 닫을 수 없음
    pub locked: bool,
    /// 랜딩 화면(드라이브/즐겨찾기) 표시 여부
    pub create_new: bool,
}

impl Tab {
    /// 드라이브/즐겨찾기를 보여주는 랜딩 탭
    pub fn landing(id: TabId) -> Self {
        Self {
            id,
            name: LANDING_TAB_NAME.to_string(),
            path: PathBuf::from("/"),
            content: Vec::new(),
            locked: false,
            create_new: true,
        }
    }

    pub fn directory(id: TabId, path: PathBuf, content: Vec<DirEntry>) -> Self {
        Self {
            id,
            name: title_from_path(&path),
            path,
            content,
            locked: false,
            create_new: false,
        }
    }

    /// 랜딩 화면을 보여야 하는지 (새 탭이거나 루트 경로)
    pub fn shows_landing(&self) -> bool {
        self.create_new || self.path.parent().is_none()
    }

    pub fn entry(&self, name: &str) -> Option<&DirEntry> {
        self.content.iter().find(|e| e.name == name)
    }
}

pub fn title_from_path(path: &Path) -> String {
    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        if !name.is_empty() {
            return name.to_string();
        }
    }
    if path.parent().is_none() {
        "/".to_string()
    } else {
        path.to_string_lossy().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_from_path() {
        assert_eq!(title_from_path(Path::new("/home/deer")), "deer");
        assert_eq!(title_from_path(Path::new("/")), "/");
    }

    #[test]
    fn test_landing_tab_shows_landing() {
        let tab = Tab::landing(TabId(1));
        assert_eq!(tab.name, LANDING_TAB_NAME);
        assert!(tab.shows_landing());
    }

    #[test]
    fn test_root_directory_shows_landing() {
        let root = Tab::directory(TabId(1), PathBuf::from("/"), Vec::new());
        assert!(root.shows_landing());

        let home = Tab::directory(TabId(2), PathBuf::from("/home"), Vec::new());
        assert!(!home.shows_landing());
        assert_eq!(home.name, "home");
    }
}
