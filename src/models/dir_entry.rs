use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::SystemTime;

/// 엔트리 메타데이터
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryMetadata {
    /// 바이트 단위 크기 (디렉토리는 0)
    pub size: u64,
    /// 수정 시간
    pub modified: SystemTime,
    /// 숨김 파일 여부
    pub hidden: bool,
    /// 읽기 전용 여부
    pub readonly: bool,
}

impl Default for EntryMetadata {
    fn default() -> Self {
        Self {
            size: 0,
            modified: SystemTime::UNIX_EPOCH,
            hidden: false,
            readonly: false,
        }
    }
}

/// 디렉토리 엔트리
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirEntry {
    /// 파일/디렉토리 이름
    pub name: String,
    /// 전체 경로
    pub path: PathBuf,
    /// 파일 여부 (false면 디렉토리)
    pub is_file: bool,
    pub metadata: EntryMetadata,
}

impl DirEntry {
    pub fn new(name: impl Into<String>, path: PathBuf, is_file: bool, metadata: EntryMetadata) -> Self {
        Self {
            name: name.into(),
            path,
            is_file,
            metadata,
        }
    }

    /// 디렉토리 여부 확인
    pub fn is_directory(&self) -> bool {
        !self.is_file
    }
}

/// 새로 만들 항목 (일괄 생성용)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub is_file: bool,
}

impl NewItem {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_file: true,
        }
    }

    pub fn folder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_file: false,
        }
    }

    /// 셸 표기법 파싱: 끝이 `/`이면 폴더, 아니면 파일
    pub fn parse(text: &str) -> Self {
        match text.strip_suffix('/') {
            Some(name) => Self::folder(name),
            None => Self::file(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_entry_kind() {
        let file = DirEntry::new("a.txt", PathBuf::from("/tmp/a.txt"), true, EntryMetadata::default());
        let dir = DirEntry::new("docs", PathBuf::from("/tmp/docs"), false, EntryMetadata::default());

        assert!(!file.is_directory());
        assert!(dir.is_directory());
    }

    #[test]
    fn test_new_item_parse() {
        assert_eq!(NewItem::parse("notes.txt"), NewItem::file("notes.txt"));
        assert_eq!(NewItem::parse("photos/"), NewItem::folder("photos"));
    }
}
