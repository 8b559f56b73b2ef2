//! 셸 명령 레지스트리
//!
//! 명령어, 사용법, 도움말이 모두 이 모듈의 테이블을 참조합니다.
//! 인자 분리는 `shlex` 규칙(따옴표, 이스케이프)을 따릅니다.

use crate::models::{Modifiers, NewItem, Point, ScrollMetrics, TabId};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::LazyLock;
use thiserror::Error;

/// 명령 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Tabs
    ListTabs,
    NewTab,
    CloseTab,
    SwitchTab,
    NextTab,
    PrevTab,
    Lock,
    Unlock,
    // Navigation
    Open,
    OpenInNewTab,
    Enter,
    GoUp,
    List,
    Refresh,
    // Selection
    Click,
    SelectAll,
    ClearSelection,
    // File operations
    Copy,
    Paste,
    Touch,
    MakeDirectory,
    Batch,
    // Landing
    Drives,
    OpenDrive,
    Favorites,
    Favorite,
    Page,
    // Pointer
    Scroll,
    MouseDown,
    MouseMove,
    MouseUp,
    // System
    Help,
    Quit,
}

/// 도움말 묶음
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandCategory {
    Tabs,
    Navigation,
    Selection,
    FileOperation,
    Landing,
    Pointer,
    System,
}

impl CommandCategory {
    pub const ALL: [CommandCategory; 7] = [
        CommandCategory::Tabs,
        CommandCategory::Navigation,
        CommandCategory::Selection,
        CommandCategory::FileOperation,
        CommandCategory::Landing,
        CommandCategory::Pointer,
        CommandCategory::System,
    ];

    pub fn title(self) -> &'static str {
        match self {
            CommandCategory::Tabs => "Tabs",
            CommandCategory::Navigation => "Navigation",
            CommandCategory::Selection => "Selection",
            CommandCategory::FileOperation => "File operations",
            CommandCategory::Landing => "Drives & favorites",
            CommandCategory::Pointer => "Pointer",
            CommandCategory::System => "System",
        }
    }
}

/// 명령 정의 (메타데이터)
pub struct CommandDef {
    pub action: Action,
    pub word: &'static str,
    pub aliases: &'static [&'static str],
    pub usage: &'static str,
    pub help: &'static str,
    pub category: CommandCategory,
}

/// 모든 명령 메타데이터
pub static COMMAND_DEFS: &[CommandDef] = &[
    // Tabs
    CommandDef {
        action: Action::ListTabs,
        word: "tabs",
        aliases: &[],
        usage: "tabs",
        help: "List open tabs",
        category: CommandCategory::Tabs,
    },
    CommandDef {
        action: Action::NewTab,
        word: "new",
        aliases: &["t"],
        usage: "new",
        help: "Open a new landing tab",
        category: CommandCategory::Tabs,
    },
    CommandDef {
        action: Action::CloseTab,
        word: "close",
        aliases: &["w"],
        usage: "close [tab-id]",
        help: "Close a tab (the active one by default)",
        category: CommandCategory::Tabs,
    },
    CommandDef {
        action: Action::SwitchTab,
        word: "switch",
        aliases: &["sw"],
        usage: "switch <tab-id>",
        help: "Activate a tab",
        category: CommandCategory::Tabs,
    },
    CommandDef {
        action: Action::NextTab,
        word: "next",
        aliases: &[],
        usage: "next",
        help: "Activate the next tab",
        category: CommandCategory::Tabs,
    },
    CommandDef {
        action: Action::PrevTab,
        word: "prev",
        aliases: &[],
        usage: "prev",
        help: "Activate the previous tab",
        category: CommandCategory::Tabs,
    },
    CommandDef {
        action: Action::Lock,
        word: "lock",
        aliases: &[],
        usage: "lock",
        help: "Lock the active tab against closing",
        category: CommandCategory::Tabs,
    },
    CommandDef {
        action: Action::Unlock,
        word: "unlock",
        aliases: &[],
        usage: "unlock",
        help: "Unlock the active tab",
        category: CommandCategory::Tabs,
    },
    // Navigation
    CommandDef {
        action: Action::Open,
        word: "open",
        aliases: &["cd"],
        usage: "open <path>",
        help: "Open a directory in the active tab",
        category: CommandCategory::Navigation,
    },
    CommandDef {
        action: Action::OpenInNewTab,
        word: "opentab",
        aliases: &[],
        usage: "opentab <path>",
        help: "Open a directory in a new tab",
        category: CommandCategory::Navigation,
    },
    CommandDef {
        action: Action::Enter,
        word: "enter",
        aliases: &["e"],
        usage: "enter <name>",
        help: "Open a folder from the listing",
        category: CommandCategory::Navigation,
    },
    CommandDef {
        action: Action::GoUp,
        word: "up",
        aliases: &[".."],
        usage: "up",
        help: "Go to the parent directory",
        category: CommandCategory::Navigation,
    },
    CommandDef {
        action: Action::List,
        word: "ls",
        aliases: &["l"],
        usage: "ls",
        help: "Show the active tab",
        category: CommandCategory::Navigation,
    },
    CommandDef {
        action: Action::Refresh,
        word: "refresh",
        aliases: &["r"],
        usage: "refresh",
        help: "Re-read the active directory",
        category: CommandCategory::Navigation,
    },
    // Selection
    CommandDef {
        action: Action::Click,
        word: "click",
        aliases: &["c"],
        usage: "click <name> [--ctrl|--shift]",
        help: "Click an entry, optionally with a modifier",
        category: CommandCategory::Selection,
    },
    CommandDef {
        action: Action::SelectAll,
        word: "selectall",
        aliases: &["all"],
        usage: "selectall",
        help: "Select every entry",
        category: CommandCategory::Selection,
    },
    CommandDef {
        action: Action::ClearSelection,
        word: "clear",
        aliases: &[],
        usage: "clear",
        help: "Clear the selection",
        category: CommandCategory::Selection,
    },
    // File operations
    CommandDef {
        action: Action::Copy,
        word: "copy",
        aliases: &["y"],
        usage: "copy",
        help: "Copy the selection to the clipboard",
        category: CommandCategory::FileOperation,
    },
    CommandDef {
        action: Action::Paste,
        word: "paste",
        aliases: &["p"],
        usage: "paste",
        help: "Paste the clipboard into the active directory",
        category: CommandCategory::FileOperation,
    },
    CommandDef {
        action: Action::Touch,
        word: "touch",
        aliases: &[],
        usage: "touch <name>...",
        help: "Create empty files",
        category: CommandCategory::FileOperation,
    },
    CommandDef {
        action: Action::MakeDirectory,
        word: "mkdir",
        aliases: &[],
        usage: "mkdir <name>...",
        help: "Create folders",
        category: CommandCategory::FileOperation,
    },
    CommandDef {
        action: Action::Batch,
        word: "batch",
        aliases: &[],
        usage: "batch <name|name/>...",
        help: "Create files and folders (trailing / = folder)",
        category: CommandCategory::FileOperation,
    },
    // Landing
    CommandDef {
        action: Action::Drives,
        word: "drives",
        aliases: &[],
        usage: "drives",
        help: "List mounted drives",
        category: CommandCategory::Landing,
    },
    CommandDef {
        action: Action::OpenDrive,
        word: "drive",
        aliases: &[],
        usage: "drive <n>",
        help: "Open the n-th drive",
        category: CommandCategory::Landing,
    },
    CommandDef {
        action: Action::Favorites,
        word: "favs",
        aliases: &[],
        usage: "favs",
        help: "Show the current favorites page",
        category: CommandCategory::Landing,
    },
    CommandDef {
        action: Action::Favorite,
        word: "fav",
        aliases: &[],
        usage: "fav add [path] | fav rm <id> | fav open <n>",
        help: "Edit or open favorites",
        category: CommandCategory::Landing,
    },
    CommandDef {
        action: Action::Page,
        word: "page",
        aliases: &[],
        usage: "page <n>",
        help: "Switch the favorites page",
        category: CommandCategory::Landing,
    },
    // Pointer
    CommandDef {
        action: Action::Scroll,
        word: "scroll",
        aliases: &[],
        usage: "scroll <scroll-height> <scroll-top> <client-height>",
        help: "Report a scroll position",
        category: CommandCategory::Pointer,
    },
    CommandDef {
        action: Action::MouseDown,
        word: "press",
        aliases: &[],
        usage: "press <x> <y>",
        help: "Mouse button down",
        category: CommandCategory::Pointer,
    },
    CommandDef {
        action: Action::MouseMove,
        word: "drag",
        aliases: &[],
        usage: "drag <x> <y>",
        help: "Mouse move",
        category: CommandCategory::Pointer,
    },
    CommandDef {
        action: Action::MouseUp,
        word: "release",
        aliases: &[],
        usage: "release <x> <y>",
        help: "Mouse button up",
        category: CommandCategory::Pointer,
    },
    // System
    CommandDef {
        action: Action::Help,
        word: "help",
        aliases: &["?"],
        usage: "help",
        help: "Show this help",
        category: CommandCategory::System,
    },
    CommandDef {
        action: Action::Quit,
        word: "quit",
        aliases: &["q", "exit"],
        usage: "quit",
        help: "Exit",
        category: CommandCategory::System,
    },
];

static COMMAND_WORDS: LazyLock<HashMap<&'static str, Action>> = LazyLock::new(|| {
    let mut words = HashMap::new();
    for def in COMMAND_DEFS {
        words.insert(def.word, def.action);
        for alias in def.aliases {
            words.insert(*alias, def.action);
        }
    }
    words
});

/// 명령어(또는 별칭)로 액션 조회
pub fn find_command(word: &str) -> Option<Action> {
    COMMAND_WORDS.get(word).copied()
}

pub fn command_def(action: Action) -> Option<&'static CommandDef> {
    COMMAND_DEFS.iter().find(|d| d.action == action)
}

/// 도움말 엔트리 생성
///
/// 반환: (카테고리명, Vec<(사용법, 설명)>) 목록
pub fn generate_help_entries() -> Vec<(&'static str, Vec<(&'static str, &'static str)>)> {
    CommandCategory::ALL
        .iter()
        .map(|cat| {
            let items = COMMAND_DEFS
                .iter()
                .filter(|d| d.category == *cat)
                .map(|d| (d.usage, d.help))
                .collect();
            (cat.title(), items)
        })
        .collect()
}

/// 파싱된 셸 명령
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ListTabs,
    NewTab,
    CloseTab(Option<TabId>),
    SwitchTab(TabId),
    NextTab,
    PrevTab,
    Lock,
    Unlock,
    Open(PathBuf),
    OpenInNewTab(PathBuf),
    Enter(String),
    GoUp,
    List,
    Refresh,
    Click { name: String, modifiers: Modifiers },
    SelectAll,
    ClearSelection,
    Copy,
    Paste,
    Create(Vec<NewItem>),
    Drives,
    OpenDrive(usize),
    Favorites,
    AddFavorite(Option<PathBuf>),
    RemoveFavorite(String),
    OpenFavorite(usize),
    Page(usize),
    Scroll(ScrollMetrics),
    MouseDown(Point),
    MouseMove(Point),
    MouseUp(Point),
    Help,
    Quit,
}

/// 명령 파싱 에러
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unbalanced quotes")]
    Unbalanced,

    #[error("Unknown command: {0} (try 'help')")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),
}

/// 한 줄 파싱. 빈 줄이면 None
pub fn parse_line(line: &str) -> Result<Option<Command>, ParseError> {
    let words = shlex::split(line).ok_or(ParseError::Unbalanced)?;
    let Some((word, args)) = words.split_first() else {
        return Ok(None);
    };
    let action = find_command(word).ok_or_else(|| ParseError::Unknown(word.clone()))?;
    build_command(action, args).map(Some)
}

fn build_command(action: Action, args: &[String]) -> Result<Command, ParseError> {
    let usage = || ParseError::Usage(command_def(action).map_or("", |d| d.usage));

    let command = match (action, args) {
        (Action::ListTabs, []) => Command::ListTabs,
        (Action::NewTab, []) => Command::NewTab,
        (Action::CloseTab, []) => Command::CloseTab(None),
        (Action::CloseTab, [id]) => Command::CloseTab(Some(parse_tab_id(id).ok_or_else(usage)?)),
        (Action::SwitchTab, [id]) => Command::SwitchTab(parse_tab_id(id).ok_or_else(usage)?),
        (Action::NextTab, []) => Command::NextTab,
        (Action::PrevTab, []) => Command::PrevTab,
        (Action::Lock, []) => Command::Lock,
        (Action::Unlock, []) => Command::Unlock,
        (Action::Open, [path]) => Command::Open(PathBuf::from(path)),
        (Action::OpenInNewTab, [path]) => Command::OpenInNewTab(PathBuf::from(path)),
        (Action::Enter, [name]) => Command::Enter(name.clone()),
        (Action::GoUp, []) => Command::GoUp,
        (Action::List, []) => Command::List,
        (Action::Refresh, []) => Command::Refresh,
        (Action::Click, [name]) => Command::Click {
            name: name.clone(),
            modifiers: Modifiers::NONE,
        },
        (Action::Click, [name, flag]) | (Action::Click, [flag, name]) if flag.starts_with("--") => {
            let modifiers = match flag.as_str() {
                "--ctrl" => Modifiers::CTRL,
                "--shift" => Modifiers::SHIFT,
                _ => return Err(usage()),
            };
            Command::Click {
                name: name.clone(),
                modifiers,
            }
        }
        (Action::SelectAll, []) => Command::SelectAll,
        (Action::ClearSelection, []) => Command::ClearSelection,
        (Action::Copy, []) => Command::Copy,
        (Action::Paste, []) => Command::Paste,
        (Action::Touch, names) if !names.is_empty() => {
            Command::Create(names.iter().map(NewItem::file).collect())
        }
        (Action::MakeDirectory, names) if !names.is_empty() => {
            Command::Create(names.iter().map(NewItem::folder).collect())
        }
        (Action::Batch, items) if !items.is_empty() => {
            Command::Create(items.iter().map(|s| NewItem::parse(s)).collect())
        }
        (Action::Drives, []) => Command::Drives,
        (Action::OpenDrive, [n]) => Command::OpenDrive(parse_index(n).ok_or_else(usage)?),
        (Action::Favorites, []) => Command::Favorites,
        (Action::Favorite, [sub, rest @ ..]) => match (sub.as_str(), rest) {
            ("add", []) => Command::AddFavorite(None),
            ("add", [path]) => Command::AddFavorite(Some(PathBuf::from(path))),
            ("rm", [id]) => Command::RemoveFavorite(id.clone()),
            ("open", [n]) => Command::OpenFavorite(parse_index(n).ok_or_else(usage)?),
            _ => return Err(usage()),
        },
        (Action::Page, [n]) => Command::Page(parse_index(n).ok_or_else(usage)?),
        (Action::Scroll, [height, top, client]) => Command::Scroll(ScrollMetrics {
            scroll_height: height.parse().map_err(|_| usage())?,
            scroll_top: top.parse().map_err(|_| usage())?,
            client_height: client.parse().map_err(|_| usage())?,
        }),
        (Action::MouseDown, [x, y]) => Command::MouseDown(parse_point(x, y).ok_or_else(usage)?),
        (Action::MouseMove, [x, y]) => Command::MouseMove(parse_point(x, y).ok_or_else(usage)?),
        (Action::MouseUp, [x, y]) => Command::MouseUp(parse_point(x, y).ok_or_else(usage)?),
        (Action::Help, []) => Command::Help,
        (Action::Quit, []) => Command::Quit,
        _ => return Err(usage()),
    };
    Ok(command)
}

fn parse_tab_id(text: &str) -> Option<TabId> {
    text.parse().ok().map(TabId)
}

/// 1부터 세는 번호를 0부터 세는 인덱스로
fn parse_index(text: &str) -> Option<usize> {
    text.parse::<usize>().ok()?.checked_sub(1)
}

fn parse_point(x: &str, y: &str) -> Option<Point> {
    Some(Point::new(x.parse().ok()?, y.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for def in COMMAND_DEFS {
            assert!(seen.insert(def.word), "duplicate word {}", def.word);
            for alias in def.aliases {
                assert!(seen.insert(*alias), "duplicate alias {}", alias);
            }
        }
    }

    #[test]
    fn test_every_action_has_def() {
        for def in COMMAND_DEFS {
            assert_eq!(find_command(def.word), Some(def.action));
        }
        assert_eq!(find_command("exit"), Some(Action::Quit));
        assert_eq!(find_command("nope"), None);
    }

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(parse_line("   "), Ok(None));
    }

    #[test]
    fn test_parse_quoted_path() {
        assert_eq!(
            parse_line("open '/tmp/my docs'"),
            Ok(Some(Command::Open(PathBuf::from("/tmp/my docs"))))
        );
        assert_eq!(parse_line("open 'broken"), Err(ParseError::Unbalanced));
    }

    #[test]
    fn test_parse_click_modifiers() {
        assert_eq!(
            parse_line("click a.txt --shift"),
            Ok(Some(Command::Click {
                name: "a.txt".to_string(),
                modifiers: Modifiers::SHIFT,
            }))
        );
        assert_eq!(
            parse_line("click --ctrl b"),
            Ok(Some(Command::Click {
                name: "b".to_string(),
                modifiers: Modifiers::CTRL,
            }))
        );
        assert!(matches!(
            parse_line("click a --alt"),
            Err(ParseError::Usage(_))
        ));
    }

    #[test]
    fn test_parse_batch() {
        assert_eq!(
            parse_line("batch a.txt docs/"),
            Ok(Some(Command::Create(vec![
                NewItem::file("a.txt"),
                NewItem::folder("docs"),
            ])))
        );
        assert!(matches!(parse_line("mkdir"), Err(ParseError::Usage(_))));
    }

    #[test]
    fn test_parse_indices_are_one_based() {
        assert_eq!(parse_line("drive 1"), Ok(Some(Command::OpenDrive(0))));
        assert_eq!(parse_line("fav open 3"), Ok(Some(Command::OpenFavorite(2))));
        assert!(matches!(parse_line("page 0"), Err(ParseError::Usage(_))));
    }

    #[test]
    fn test_parse_tab_and_pointer() {
        assert_eq!(parse_line("close"), Ok(Some(Command::CloseTab(None))));
        assert_eq!(
            parse_line("close 4"),
            Ok(Some(Command::CloseTab(Some(TabId(4)))))
        );
        assert_eq!(
            parse_line("press 10 -5"),
            Ok(Some(Command::MouseDown(Point::new(10, -5))))
        );
        assert_eq!(
            parse_line("scroll 2000 1400.5 500"),
            Ok(Some(Command::Scroll(ScrollMetrics {
                scroll_height: 2000.0,
                scroll_top: 1400.5,
                client_height: 500.0,
            })))
        );
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse_line("frobnicate"),
            Err(ParseError::Unknown("frobnicate".to_string()))
        );
    }

    #[test]
    fn test_help_covers_all_commands() {
        let total: usize = generate_help_entries().iter().map(|(_, v)| v.len()).sum();
        assert_eq!(total, COMMAND_DEFS.len());
    }
}
