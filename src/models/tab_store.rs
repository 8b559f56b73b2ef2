use crate::models::dir_entry::DirEntry;
use crate::models::tab_state::{title_from_path, Tab, TabId};
use std::path::PathBuf;

/// 기본 최대 탭 수
pub const DEFAULT_MAX_TABS: usize = 32;

/// 상위 디렉토리 이동 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoUp {
    /// 부모 디렉토리 열기
    Navigate(PathBuf),
    /// 더 올라갈 곳이 없음: 랜딩 탭으로 교체
    Landing,
}

/// 탭 목록과 활성 탭
///
/// 항상 탭 1개 이상, `active`는 항상 존재하는 탭을 가리킨다.
#[derive(Debug, Clone)]
pub struct TabStore {
    tabs: Vec<Tab>,
    active: TabId,
    next_id: u64,
    max_tabs: usize,
}

impl TabStore {
    /// 랜딩 탭 1개로 생성
    pub fn new(max_tabs: usize) -> Self {
        let first = TabId(1);
        Self {
            tabs: vec![Tab::landing(first)],
            active: first,
            next_id: 2,
            max_tabs: max_tabs.max(1),
        }
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn active_id(&self) -> TabId {
        self.active
    }

    pub fn active(&self) -> &Tab {
        // 불변식: active는 항상 tabs 안에 있다
        self.get(self.active).unwrap_or(&self.tabs[0])
    }

    pub fn get(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: TabId) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|t| t.id == id)
    }

    fn position(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == id)
    }

    fn allocate_id(&mut self) -> Option<TabId> {
        if self.tabs.len() >= self.max_tabs {
            return None;
        }
        let id = TabId(self.next_id);
        self.next_id += 1;
        Some(id)
    }

    /// 랜딩 탭을 추가하고 활성화. 최대 탭 수면 None
    pub fn new_landing_tab(&mut self) -> Option<TabId> {
        let id = self.allocate_id()?;
        self.tabs.push(Tab::landing(id));
        self.active = id;
        Some(id)
    }

    /// 디렉토리 탭을 추가하고 활성화 ("새 탭에서 열기")
    pub fn add_directory_tab(&mut self, path: PathBuf, content: Vec<DirEntry>) -> Option<TabId> {
        let id = self.allocate_id()?;
        self.tabs.push(Tab::directory(id, path, content));
        self.active = id;
        Some(id)
    }

    /// 탭을 새 랜딩 탭으로 교체하고 활성화 (같은 자리, 새 ID)
    ///
    /// 교체이므로 최대 탭 수 제한을 받지 않는다.
    /// 교체는 기존 탭을 닫는 셈이므로 잠긴 탭이면 None.
    pub fn replace_with_landing(&mut self, id: TabId) -> Option<TabId> {
        let index = self.position(id)?;
        if self.tabs[index].locked {
            return None;
        }
        let new_id = TabId(self.next_id);
        self.next_id += 1;
        self.tabs[index] = Tab::landing(new_id);
        self.active = new_id;
        Some(new_id)
    }

    /// 탭 닫기
    ///
    /// 마지막 탭, 잠긴 탭, 없는 탭이면 false.
    /// 활성 탭을 닫으면 남은 탭 중 첫 번째가 활성화된다.
    pub fn close_tab(&mut self, id: TabId) -> bool {
        if self.tabs.len() <= 1 {
            return false;
        }
        let Some(index) = self.position(id) else {
            return false;
        };
        if self.tabs[index].locked {
            return false;
        }

        self.tabs.remove(index);
        if self.active == id {
            self.active = self.tabs[0].id;
        }
        true
    }

    /// 특정 탭으로 전환
    pub fn set_active(&mut self, id: TabId) -> bool {
        if self.position(id).is_some() {
            self.active = id;
            true
        } else {
            false
        }
    }

    /// 다음 탭 (순환)
    pub fn next_tab(&mut self) {
        let index = self.position(self.active).unwrap_or(0);
        self.active = self.tabs[(index + 1) % self.tabs.len()].id;
    }

    /// 이전 탭 (순환)
    pub fn prev_tab(&mut self) {
        let index = self.position(self.active).unwrap_or(0);
        let prev = if index == 0 {
            self.tabs.len() - 1
        } else {
            index - 1
        };
        self.active = self.tabs[prev].id;
    }

    /// 탭의 디렉토리 내용 교체
    pub fn open_dir(&mut self, id: TabId, path: PathBuf, content: Vec<DirEntry>) -> bool {
        let Some(tab) = self.get_mut(id) else {
            return false;
        };
        tab.name = title_from_path(&path);
        tab.path = path;
        tab.content = content;
        tab.create_new = false;
        true
    }

    /// 상위 디렉토리 계산
    pub fn parent_of(&self, id: TabId) -> Option<GoUp> {
        let tab = self.get(id)?;
        if tab.create_new {
            return Some(GoUp::Landing);
        }
        Some(match tab.path.parent() {
            Some(parent) => GoUp::Navigate(parent.to_path_buf()),
            None => GoUp::Landing,
        })
    }

    pub fn set_locked(&mut self, id: TabId, locked: bool) -> bool {
        match self.get_mut(id) {
            Some(tab) => {
                tab.locked = locked;
                true
            }
            None => false,
        }
    }

    /// 해당 경로를 보고 있는 탭 ID 목록
    pub fn tabs_showing(&self, path: &std::path::Path) -> Vec<TabId> {
        self.tabs
            .iter()
            .filter(|t| !t.create_new && t.path == path)
            .map(|t| t.id)
            .collect()
    }
}

impl Default for TabStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TABS)
    }
}
