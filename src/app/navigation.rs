use super::*;
use crate::models::GoUp;
use std::path::{Component, Path};

impl App {
    // === 탭 ===

    /// 랜딩 탭 추가 + 활성화
    pub fn new_tab(&mut self) -> bool {
        let before = self.tabs.active_id();
        if self.tabs.new_landing_tab().is_none() {
            self.set_toast("Tab limit reached");
            return false;
        }
        self.after_tab_change(before);
        self.request_drives();
        self.request_favorites();
        true
    }

    pub fn close_tab(&mut self, id: TabId) -> bool {
        let before = self.tabs.active_id();
        if !self.tabs.close_tab(id) {
            let reason = match self.tabs.get(id) {
                Some(tab) if tab.locked => "Tab is locked",
                Some(_) => "Cannot close the last tab",
                None => "No such tab",
            };
            self.set_toast(reason);
            return false;
        }
        self.after_tab_change(before);
        true
    }

    pub fn activate_tab(&mut self, id: TabId) -> bool {
        let before = self.tabs.active_id();
        if !self.tabs.set_active(id) {
            return false;
        }
        self.after_tab_change(before);
        true
    }

    pub fn next_tab(&mut self) {
        let before = self.tabs.active_id();
        self.tabs.next_tab();
        self.after_tab_change(before);
    }

    pub fn prev_tab(&mut self) {
        let before = self.tabs.active_id();
        self.tabs.prev_tab();
        self.after_tab_change(before);
    }

    pub fn set_locked(&mut self, locked: bool) {
        let id = self.tabs.active_id();
        self.tabs.set_locked(id, locked);
    }

    // === 디렉토리 이동 ===

    /// 활성 탭에서 경로 열기 (결과는 DirectoryOpened로 도착)
    ///
    /// 상대 경로는 활성 탭의 디렉토리 기준으로 푼다.
    pub fn open_path(&mut self, path: PathBuf) {
        self.send(Request::OpenDirectory {
            tab_id: self.tabs.active_id(),
            path: self.resolve_path(&path),
            in_new_tab: false,
        });
    }

    pub fn open_path_in_new_tab(&mut self, path: PathBuf) {
        self.send(Request::OpenDirectory {
            tab_id: self.tabs.active_id(),
            path: self.resolve_path(&path),
            in_new_tab: true,
        });
    }

    /// 활성 탭 기준 절대 경로. `.`과 `..`은 글자 그대로 정리한다
    pub(super) fn resolve_path(&self, path: &Path) -> PathBuf {
        let joined = self.tabs.active().path.join(path);
        let mut resolved = PathBuf::new();
        for component in joined.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    resolved.pop();
                }
                other => resolved.push(other),
            }
        }
        resolved
    }

    /// 활성 목록의 엔트리 열기 (디렉토리만)
    pub fn open_entry(&mut self, name: &str) -> bool {
        let Some(entry) = self.tabs.active().entry(name) else {
            self.set_toast(format!("No entry named {:?}", name));
            return false;
        };
        if entry.is_file {
            log::info!("not opening file {}", entry.path.display());
            self.set_toast(format!("{} is a file", name));
            return false;
        }
        let path = entry.path.clone();
        self.open_path(path);
        true
    }

    pub fn open_drive(&mut self, index: usize) -> bool {
        let Some(drive) = self.drives.get(index) else {
            return false;
        };
        let path = drive.mounted.clone();
        self.open_path(path);
        true
    }

    /// 현재 페이지의 즐겨찾기 열기. 파일이면 그 파일이 있는 디렉토리
    pub fn open_favorite(&mut self, index: usize) -> bool {
        let Some(favorite) = self.favorites.current().get(index) else {
            return false;
        };
        let path = if favorite.is_file {
            favorite
                .path
                .parent()
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| favorite.path.clone())
        } else {
            favorite.path.clone()
        };
        self.open_path(path);
        true
    }

    /// 상위 디렉토리. 더 올라갈 수 없으면 탭을 랜딩 탭으로 교체
    pub fn go_up(&mut self) {
        let id = self.tabs.active_id();
        match self.tabs.parent_of(id) {
            Some(GoUp::Navigate(parent)) => self.open_path(parent),
            Some(GoUp::Landing) => {
                if self.tabs.active().create_new {
                    return;
                }
                if self.tabs.replace_with_landing(id).is_none() {
                    self.set_toast("Tab is locked");
                    return;
                }
                self.after_tab_change(id);
                self.request_drives();
            }
            None => {}
        }
    }

    /// 활성 탭 목록 다시 읽기
    pub fn refresh_active(&mut self) {
        let tab = self.tabs.active();
        if tab.shows_landing() {
            return;
        }
        let path = tab.path.clone();
        self.open_path(path);
    }
}
