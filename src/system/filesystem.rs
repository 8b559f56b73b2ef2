use crate::models::dir_entry::{DirEntry, EntryMetadata};
use crate::models::landing::{Drive, Favorite};
use crate::models::tab_state::title_from_path;
use crate::utils::error::{DeerFmError, Result};
use std::fs::{self, Metadata};
use std::path::{Component, Path, PathBuf};
use std::time::SystemTime;

/// 파일 시스템 기본 연산 (권한 있는 쪽에서만 사용)
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystem;

impl FileSystem {
    pub fn new() -> Self {
        Self
    }

    /// 디렉토리 안의 이름을 경로로 변환
    ///
    /// `a/b/c` 같은 상대 경로는 허용하지만 `..`, 루트, 드라이브 접두사가
    /// 들어간 이름은 `dir` 밖을 가리킬 수 있으므로 거부한다.
    pub fn join_child(&self, dir: &Path, name: &str) -> Result<PathBuf> {
        let relative = Path::new(name);
        let mut components = relative.components().peekable();
        let valid = components.peek().is_some()
            && components.all(|c| matches!(c, Component::Normal(_)));
        if !valid {
            return Err(DeerFmError::InvalidName {
                name: name.to_string(),
            });
        }
        Ok(dir.join(relative))
    }

    /// 빈 파일 쓰기. 이미 있으면 내용을 비운다
    #[allow(clippy::unused_self)]
    pub fn create_file(&self, path: &Path) -> Result<()> {
        fs::write(path, b"").map_err(|e| DeerFmError::from_io(e, path))
    }

    /// 디렉토리 생성 (중간 경로 포함)
    #[allow(clippy::unused_self)]
    pub fn create_folder(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).map_err(|e| DeerFmError::from_io(e, path))
    }

    /// 디렉토리 읽기
    ///
    /// 폴더 먼저, 그 다음 이름순. 읽을 수 없는 하위 엔트리는 건너뛴다.
    pub fn read_directory(&self, path: &Path) -> Result<Vec<DirEntry>> {
        if !path.exists() {
            return Err(DeerFmError::PathNotFound {
                path: path.to_path_buf(),
            });
        }
        if !path.is_dir() {
            return Err(DeerFmError::NotADirectory {
                path: path.to_path_buf(),
            });
        }

        let read_dir = fs::read_dir(path).map_err(|e| DeerFmError::from_io(e, path))?;

        let mut entries: Vec<DirEntry> = read_dir
            .flatten()
            .filter_map(|entry| {
                let entry_path = entry.path();
                // symlink는 대상 기준, 끊어진 링크는 링크 자체
                let metadata = fs::metadata(&entry_path)
                    .or_else(|_| fs::symlink_metadata(&entry_path))
                    .ok()?;
                let name = entry.file_name().to_string_lossy().to_string();
                Some(self.make_entry(name, entry_path, &metadata))
            })
            .collect();

        entries.sort_by(|a, b| {
            a.is_file
                .cmp(&b.is_file)
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });
        Ok(entries)
    }

    fn make_entry(&self, name: String, path: PathBuf, metadata: &Metadata) -> DirEntry {
        let is_file = !metadata.is_dir();
        let hidden = self.is_hidden(&name);
        DirEntry::new(
            name,
            path,
            is_file,
            EntryMetadata {
                size: if is_file { metadata.len() } else { 0 },
                modified: metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH),
                hidden,
                readonly: metadata.permissions().readonly(),
            },
        )
    }

    #[allow(clippy::unused_self)]
    fn is_hidden(&self, name: &str) -> bool {
        name.starts_with('.')
    }

    /// 마운트된 드라이브 목록
    #[allow(clippy::unused_self)]
    pub fn list_drives(&self) -> Vec<Drive> {
        #[cfg(target_os = "linux")]
        {
            if let Ok(mounts) = fs::read_to_string("/proc/mounts") {
                let drives = parse_mounts(&mounts);
                if !drives.is_empty() {
                    return drives;
                }
            }
        }

        fallback_drives()
    }

    /// 소스 목록을 대상 디렉토리 안으로 복사
    ///
    /// 소스마다 결과를 돌려주며, 하나가 실패해도 나머지는 계속한다.
    pub fn copy_into(&self, sources: &[PathBuf], dest_dir: &Path) -> Vec<(PathBuf, Result<u64>)> {
        sources
            .iter()
            .map(|src| {
                let result = self.copy_one(src, dest_dir);
                (src.clone(), result)
            })
            .collect()
    }

    fn copy_one(&self, src: &Path, dest_dir: &Path) -> Result<u64> {
        let Some(name) = src.file_name() else {
            return Err(DeerFmError::InvalidName {
                name: src.to_string_lossy().to_string(),
            });
        };
        let dest = dest_dir.join(name);

        if src == dest {
            return Err(DeerFmError::SameSourceAndDest {
                path: src.to_path_buf(),
            });
        }
        if dest.exists() {
            return Err(DeerFmError::FileExists { path: dest });
        }
        if !src.exists() {
            return Err(DeerFmError::PathNotFound {
                path: src.to_path_buf(),
            });
        }
        if src.is_dir() && dest.starts_with(src) {
            return Err(DeerFmError::CopyFailed {
                src: src.to_path_buf(),
                dest,
                reason: "cannot copy a directory into itself".to_string(),
            });
        }

        if src.is_dir() {
            self.copy_directory(src, &dest)
        } else {
            self.copy_file(src, &dest)
        }
    }

    #[allow(clippy::unused_self)]
    fn copy_file(&self, src: &Path, dest: &Path) -> Result<u64> {
        fs::copy(src, dest).map_err(|e| {
            if e.kind() == std::io::ErrorKind::PermissionDenied {
                DeerFmError::PermissionDenied {
                    path: dest.to_path_buf(),
                }
            } else {
                DeerFmError::CopyFailed {
                    src: src.to_path_buf(),
                    dest: dest.to_path_buf(),
                    reason: e.to_string(),
                }
            }
        })
    }

    /// 디렉토리 재귀 복사. 복사한 총 바이트 수 반환
    fn copy_directory(&self, src: &Path, dest: &Path) -> Result<u64> {
        fs::create_dir_all(dest).map_err(|e| DeerFmError::from_io(e, dest))?;

        let mut total_bytes = 0u64;
        for entry in fs::read_dir(src).map_err(|e| DeerFmError::from_io(e, src))? {
            let entry = entry?;
            let entry_path = entry.path();
            let dest_path = dest.join(entry.file_name());

            if entry_path.is_dir() {
                total_bytes += self.copy_directory(&entry_path, &dest_path)?;
            } else {
                total_bytes += self.copy_file(&entry_path, &dest_path)?;
            }
        }
        Ok(total_bytes)
    }

    /// 경로로 즐겨찾기 항목 생성. 없는 경로는 None
    #[allow(clippy::unused_self)]
    pub fn resolve_favorite(&self, path: &Path) -> Option<Favorite> {
        let metadata = fs::metadata(path).ok()?;
        Some(Favorite {
            id: path.to_string_lossy().to_string(),
            name: title_from_path(path),
            path: path.to_path_buf(),
            is_file: !metadata.is_dir(),
        })
    }
}

/// `/proc/mounts` 형식에서 실제 장치만 추출
pub fn parse_mounts(mounts: &str) -> Vec<Drive> {
    let mut drives: Vec<Drive> = Vec::new();
    for line in mounts.lines() {
        let mut fields = line.split_whitespace();
        let (Some(device), Some(mount_point)) = (fields.next(), fields.next()) else {
            continue;
        };
        if !device.starts_with("/dev/") || device.starts_with("/dev/loop") {
            continue;
        }
        // 공백은 \040으로 이스케이프되어 있다
        let mounted = PathBuf::from(mount_point.replace("\\040", " "));
        if drives.iter().any(|d| d.mounted == mounted) {
            continue;
        }
        drives.push(Drive {
            filesystem: device.to_string(),
            mounted,
        });
    }
    drives
}

fn fallback_drives() -> Vec<Drive> {
    let mut drives = Vec::new();
    if let Some(home) = dirs::home_dir() {
        if home.is_dir() {
            drives.push(Drive {
                filesystem: "home".to_string(),
                mounted: home,
            });
        }
    }
    drives.push(Drive {
        filesystem: "root".to_string(),
        mounted: PathBuf::from("/"),
    });
    drives
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_join_child_rejects_bad_names() {
        let fs = FileSystem::new();
        let dir = Path::new("/tmp");
        assert_eq!(fs.join_child(dir, "a.txt").unwrap(), PathBuf::from("/tmp/a.txt"));
        assert_eq!(
            fs.join_child(dir, "a/b/c").unwrap(),
            PathBuf::from("/tmp/a/b/c")
        );
        for bad in ["", ".", "..", "a/../../etc", "/etc/passwd", "./"] {
            match fs.join_child(dir, bad) {
                Err(DeerFmError::InvalidName { name }) => assert_eq!(name, bad),
                other => panic!("expected InvalidName, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_create_file_is_empty_and_truncates() {
        let fs_instance = FileSystem::new();
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("note.txt");

        fs_instance.create_file(&path).unwrap();
        assert_eq!(fs::read(&path).unwrap().len(), 0);

        fs::write(&path, "data").unwrap();
        fs_instance.create_file(&path).unwrap();
        assert_eq!(fs::read(&path).unwrap().len(), 0);
    }

    #[test]
    fn test_create_file_in_missing_dir_fails() {
        let fs_instance = FileSystem::new();
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("note.txt");

        match fs_instance.create_file(&path) {
            Err(DeerFmError::PathNotFound { .. }) => {}
            other => panic!("expected PathNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_create_folder_is_recursive_and_idempotent() {
        let fs_instance = FileSystem::new();
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a").join("b").join("c");

        fs_instance.create_folder(&nested).unwrap();
        assert!(nested.is_dir());
        assert!(fs_instance.create_folder(&nested).is_ok());
    }

    #[test]
    fn test_read_directory_folders_first() {
        let fs_instance = FileSystem::new();
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("b.txt"), "hello").unwrap();
        fs::write(temp.path().join(".hidden"), "").unwrap();
        fs::create_dir(temp.path().join("zeta")).unwrap();
        fs::create_dir(temp.path().join("Alpha")).unwrap();

        let entries = fs_instance.read_directory(temp.path()).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Alpha", "zeta", ".hidden", "b.txt"]);

        let hidden = entries.iter().find(|e| e.name == ".hidden").unwrap();
        assert!(hidden.metadata.hidden);
        let file = entries.iter().find(|e| e.name == "b.txt").unwrap();
        assert!(file.is_file);
        assert_eq!(file.metadata.size, 5);
        assert_eq!(file.path, temp.path().join("b.txt"));
    }

    #[test]
    fn test_read_directory_errors() {
        let fs_instance = FileSystem::new();
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("plain.txt");
        fs::write(&file, "").unwrap();

        match fs_instance.read_directory(&temp.path().join("nope")) {
            Err(DeerFmError::PathNotFound { .. }) => {}
            other => panic!("expected PathNotFound, got {:?}", other),
        }
        match fs_instance.read_directory(&file) {
            Err(DeerFmError::NotADirectory { path }) => assert_eq!(path, file),
            other => panic!("expected NotADirectory, got {:?}", other),
        }
    }

    #[test]
    fn test_copy_into_files_and_directories() {
        let fs_instance = FileSystem::new();
        let temp = TempDir::new().unwrap();
        let src_dir = temp.path().join("src");
        let dest_dir = temp.path().join("dest");
        fs::create_dir_all(src_dir.join("folder").join("inner")).unwrap();
        fs::write(src_dir.join("folder").join("inner").join("deep.txt"), "abc").unwrap();
        fs::write(src_dir.join("top.txt"), "12345").unwrap();
        fs::create_dir_all(&dest_dir).unwrap();

        let results = fs_instance.copy_into(
            &[src_dir.join("top.txt"), src_dir.join("folder")],
            &dest_dir,
        );

        assert!(results.iter().all(|(_, r)| r.is_ok()));
        assert_eq!(fs::read_to_string(dest_dir.join("top.txt")).unwrap(), "12345");
        assert_eq!(
            fs::read_to_string(dest_dir.join("folder").join("inner").join("deep.txt")).unwrap(),
            "abc"
        );
    }

    #[test]
    fn test_copy_into_continues_past_failures() {
        let fs_instance = FileSystem::new();
        let temp = TempDir::new().unwrap();
        let src_dir = temp.path().join("src");
        let dest_dir = temp.path().join("dest");
        fs::create_dir_all(&src_dir).unwrap();
        fs::create_dir_all(&dest_dir).unwrap();
        fs::write(src_dir.join("taken.txt"), "new").unwrap();
        fs::write(dest_dir.join("taken.txt"), "old").unwrap();
        fs::write(src_dir.join("free.txt"), "free").unwrap();

        let results = fs_instance.copy_into(
            &[
                src_dir.join("missing.txt"),
                src_dir.join("taken.txt"),
                src_dir.join("free.txt"),
            ],
            &dest_dir,
        );

        assert!(matches!(results[0].1, Err(DeerFmError::PathNotFound { .. })));
        assert!(matches!(results[1].1, Err(DeerFmError::FileExists { .. })));
        assert_eq!(results[2].1.as_ref().ok(), Some(&4));
        // 기존 파일은 덮어쓰지 않는다
        assert_eq!(fs::read_to_string(dest_dir.join("taken.txt")).unwrap(), "old");
    }

    #[test]
    fn test_copy_into_same_directory_is_rejected() {
        let fs_instance = FileSystem::new();
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("a.txt");
        fs::write(&file, "").unwrap();

        let results = fs_instance.copy_into(std::slice::from_ref(&file), temp.path());
        assert!(matches!(results[0].1, Err(DeerFmError::SameSourceAndDest { .. })));
    }

    #[test]
    fn test_copy_directory_into_itself_is_rejected() {
        let fs_instance = FileSystem::new();
        let temp = TempDir::new().unwrap();
        let parent = temp.path().join("parent");
        let child = parent.join("child");
        fs::create_dir_all(&child).unwrap();

        let results = fs_instance.copy_into(std::slice::from_ref(&parent), &child);
        assert!(matches!(results[0].1, Err(DeerFmError::CopyFailed { .. })));
    }

    #[test]
    fn test_parse_mounts() {
        let mounts = "\
/dev/sda2 / ext4 rw,relatime 0 0
proc /proc proc rw 0 0
/dev/loop0 /snap/core squashfs ro 0 0
/dev/sdb1 /media/deer/USB\\040Stick vfat rw 0 0
/dev/sda2 / ext4 rw,relatime 0 0
";
        let drives = parse_mounts(mounts);
        assert_eq!(drives.len(), 2);
        assert_eq!(drives[0].filesystem, "/dev/sda2");
        assert_eq!(drives[0].mounted, PathBuf::from("/"));
        assert_eq!(drives[1].mounted, PathBuf::from("/media/deer/USB Stick"));
    }

    #[test]
    fn test_list_drives_is_never_empty() {
        assert!(!FileSystem::new().list_drives().is_empty());
    }

    #[test]
    fn test_resolve_favorite() {
        let fs_instance = FileSystem::new();
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("music");
        fs::create_dir(&dir).unwrap();

        let fav = fs_instance.resolve_favorite(&dir).unwrap();
        assert_eq!(fav.name, "music");
        assert!(!fav.is_file);
        assert!(fs_instance.resolve_favorite(&temp.path().join("gone")).is_none());
    }
}
