use super::*;
use crate::models::NewItem;

impl App {
    // === 생성 ===

    /// 현재 디렉토리 (랜딩 화면이면 None)
    fn current_dir(&mut self) -> Option<PathBuf> {
        let tab = self.tabs.active();
        if tab.shows_landing() {
            self.set_toast("Open a directory first");
            return None;
        }
        Some(tab.path.clone())
    }

    pub fn create_file(&mut self, name: &str) -> bool {
        let Some(dir) = self.current_dir() else {
            return false;
        };
        self.send(Request::NewFile {
            dir,
            name: name.to_string(),
        });
        self.send(Request::CreateFileOrDir);
        true
    }

    pub fn create_folder(&mut self, name: &str) -> bool {
        let Some(dir) = self.current_dir() else {
            return false;
        };
        self.send(Request::NewFolder {
            dir,
            name: name.to_string(),
        });
        self.send(Request::CreateFileOrDir);
        true
    }

    pub fn create_many(&mut self, items: Vec<NewItem>) -> bool {
        if items.is_empty() {
            return false;
        }
        let Some(dir) = self.current_dir() else {
            return false;
        };
        self.send(Request::NewMany { dir, items });
        self.send(Request::CreateFileOrDir);
        true
    }

    // === 클립보드 ===

    /// 선택 항목을 서비스 쪽 클립보드로
    pub fn copy_selection(&mut self) {
        if self.selection.is_empty() {
            self.set_toast("Nothing selected");
            return;
        }
        let Some(dir) = self.current_dir() else {
            return;
        };
        self.send(Request::CopiedFile {
            dir,
            names: self.selection.names().to_vec(),
        });
    }

    pub fn paste(&mut self) {
        let Some(dir) = self.current_dir() else {
            return;
        };
        self.send(Request::PastedFile { dir });
    }

    // === 랜딩 화면 ===

    pub fn request_drives(&self) {
        self.send(Request::GetDrives);
    }

    pub fn request_favorites(&self) {
        self.send(Request::GetFavorites);
    }

    /// 경로를 즐겨찾기에 추가 (없으면 현재 디렉토리, 상대 경로는 활성 탭 기준)
    pub fn add_favorite(&mut self, path: Option<PathBuf>) -> bool {
        let path = match path {
            Some(path) => self.resolve_path(&path),
            None => match self.current_dir() {
                Some(dir) => dir,
                None => return false,
            },
        };
        self.send(Request::AddFavorite { path });
        true
    }

    pub fn remove_favorite(&mut self, id: &str) {
        self.send(Request::RemoveFavorite { id: id.to_string() });
    }

    pub fn set_favorites_page(&mut self, page: usize) -> bool {
        self.favorites.set_page(page)
    }
}
