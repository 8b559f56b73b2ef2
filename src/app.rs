use crate::config::Config;
use crate::ipc::{Event, MenuCommand, Request, RequestSender};
use crate::models::landing::sort_drives;
use crate::models::{
    DirEntry, DragSelection, Drive, FavoritesPager, GridMetrics, LoadWindow, Selection, Tab,
    TabId, TabStore,
};
use std::collections::HashMap;
use std::path::PathBuf;

mod navigation;
mod operations;
mod pointer;


/// UI 쪽 상태 저장소
///
/// 서비스에서 온 이벤트를 `handle_event`로 반영하고,
/// 파일시스템이 필요한 작업은 요청만 보내고 기다리지 않는다.
pub struct App {
    tabs: TabStore,
    selection: Selection,
    windows: HashMap<TabId, LoadWindow>,
    window_template: LoadWindow,
    drag: DragSelection,
    grid: GridMetrics,
    drives: Vec<Drive>,
    favorites: FavoritesPager,
    requests: RequestSender,
    toast_message: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(config: &Config, requests: RequestSender) -> Self {
        Self {
            tabs: TabStore::new(config.max_tabs),
            selection: Selection::new(),
            windows: HashMap::new(),
            window_template: LoadWindow::new(
                config.initial_items,
                config.load_step,
                config.scroll_threshold,
            ),
            drag: DragSelection::new(),
            grid: config.grid_metrics(),
            drives: Vec::new(),
            favorites: FavoritesPager::new(config.favorites_page_size),
            requests,
            toast_message: None,
            should_quit: false,
        }
    }

    /// 시작 시 첫 탭 채우기
    pub fn start(&mut self, start_path: Option<PathBuf>) {
        self.request_drives();
        self.request_favorites();
        if let Some(path) = start_path {
            self.open_path(path);
        }
    }

    pub fn tabs(&self) -> &[Tab] {
        self.tabs.tabs()
    }

    pub fn active_tab(&self) -> &Tab {
        self.tabs.active()
    }

    pub fn active_tab_id(&self) -> TabId {
        self.tabs.active_id()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn drives(&self) -> &[Drive] {
        &self.drives
    }

    pub fn favorites(&self) -> &FavoritesPager {
        &self.favorites
    }

    pub fn drag(&self) -> &DragSelection {
        &self.drag
    }

    /// 활성 탭에서 지금 그려야 할 엔트리
    pub fn visible_entries(&self) -> &[DirEntry] {
        let tab = self.tabs.active();
        if tab.shows_landing() {
            return &[];
        }
        match self.windows.get(&tab.id) {
            Some(window) => window.visible(&tab.content),
            None => self.window_template.visible(&tab.content),
        }
    }

    pub fn set_toast(&mut self, message: impl Into<String>) {
        self.toast_message = Some(message.into());
    }

    pub fn take_toast(&mut self) -> Option<String> {
        self.toast_message.take()
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn send(&self, request: Request) {
        self.requests.send(request);
    }

    pub fn menu(&self, command: MenuCommand) {
        self.send(Request::Menu(command));
    }

    /// 서비스 이벤트 반영
    pub fn handle_event(&mut self, event: Event) {
        log::debug!("event: {:?}", event);
        match event {
            Event::FileOrDirCreated => self.refresh_active(),
            Event::DirectoryOpened {
                tab_id,
                path,
                content,
                in_new_tab,
            } => self.apply_listing(tab_id, path, content, in_new_tab),
            Event::DrivesListed(mut drives) => {
                sort_drives(&mut drives);
                self.drives = drives;
            }
            Event::FavoritesListed(favorites) => self.favorites.set_items(favorites),
            Event::EditActionComplete { dir } => {
                for id in self.tabs.tabs_showing(&dir) {
                    self.send(Request::OpenDirectory {
                        tab_id: id,
                        path: dir.clone(),
                        in_new_tab: false,
                    });
                }
            }
            Event::SelectAll => self.select_all(),
            Event::CopyToClipboard => self.copy_selection(),
            Event::PasteFromClipboard => self.paste(),
            Event::CloseActiveTab => {
                let id = self.tabs.active_id();
                self.close_tab(id);
            }
        }
    }

    fn apply_listing(
        &mut self,
        tab_id: TabId,
        path: PathBuf,
        content: Vec<DirEntry>,
        in_new_tab: bool,
    ) {
        if in_new_tab {
            let before = self.tabs.active_id();
            match self.tabs.add_directory_tab(path, content) {
                Some(id) => {
                    self.windows.insert(id, self.window_template.clone());
                    self.after_tab_change(before);
                }
                None => self.set_toast("Tab limit reached"),
            }
            return;
        }

        if !self.tabs.open_dir(tab_id, path, content) {
            log::debug!("tab {} closed before its listing arrived", tab_id);
            return;
        }
        self.windows.insert(tab_id, self.window_template.clone());
        if tab_id == self.tabs.active_id() {
            self.selection.clear();
            self.drag = DragSelection::new();
        }
    }

    /// 활성 탭이 바뀌었으면 선택 해제
    fn after_tab_change(&mut self, before: TabId) {
        if self.tabs.active_id() != before {
            self.selection.clear();
            self.drag = DragSelection::new();
        }
        let live: Vec<TabId> = self.tabs.tabs().iter().map(|t| t.id).collect();
        self.windows.retain(|id, _| live.contains(id));
    }
}
