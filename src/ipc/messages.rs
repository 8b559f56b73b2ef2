//! UI와 파일시스템 서비스 사이에 오가는 메시지
//!
//! 모든 메시지는 단방향이며 응답(ack)이 없다.

use crate::models::{DirEntry, Drive, Favorite, NewItem, TabId};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 서비스 쪽에 있는 메뉴 단축키
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuCommand {
    SelectAll,
    Copy,
    Paste,
    CloseTab,
}

/// UI -> 서비스
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Request {
    /// 생성 다이얼로그 완료 알림
    CreateFileOrDir,
    NewFile {
        dir: PathBuf,
        name: String,
    },
    NewFolder {
        dir: PathBuf,
        name: String,
    },
    NewMany {
        dir: PathBuf,
        items: Vec<NewItem>,
    },
    OpenDirectory {
        tab_id: TabId,
        path: PathBuf,
        in_new_tab: bool,
    },
    GetDrives,
    GetFavorites,
    AddFavorite {
        path: PathBuf,
    },
    RemoveFavorite {
        id: String,
    },
    /// 클립보드에 넣을 항목 (디렉토리 + 이름)
    CopiedFile {
        dir: PathBuf,
        names: Vec<String>,
    },
    PastedFile {
        dir: PathBuf,
    },
    Menu(MenuCommand),
}

/// 서비스 -> UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    FileOrDirCreated,
    DirectoryOpened {
        tab_id: TabId,
        path: PathBuf,
        content: Vec<DirEntry>,
        in_new_tab: bool,
    },
    DrivesListed(Vec<Drive>),
    FavoritesListed(Vec<Favorite>),
    /// 붙여넣기 등 편집 작업 완료
    EditActionComplete {
        dir: PathBuf,
    },
    SelectAll,
    CopyToClipboard,
    PasteFromClipboard,
    CloseActiveTab,
}

impl From<MenuCommand> for Event {
    fn from(command: MenuCommand) -> Self {
        match command {
            MenuCommand::SelectAll => Event::SelectAll,
            MenuCommand::Copy => Event::CopyToClipboard,
            MenuCommand::Paste => Event::PasteFromClipboard,
            MenuCommand::CloseTab => Event::CloseActiveTab,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_command_maps_to_event() {
        assert_eq!(Event::from(MenuCommand::SelectAll), Event::SelectAll);
        assert_eq!(Event::from(MenuCommand::Copy), Event::CopyToClipboard);
        assert_eq!(Event::from(MenuCommand::Paste), Event::PasteFromClipboard);
        assert_eq!(Event::from(MenuCommand::CloseTab), Event::CloseActiveTab);
    }
}
