//! 텍스트 셸: 명령 실행과 화면 출력
//!
//! 모든 출력은 문자열 줄 목록으로 만들어 호출자가 찍는다.

use crate::app::App;
use crate::core::commands::{generate_help_entries, Command};
use crate::ipc::MenuCommand;
use crate::models::DirEntry;
use crate::utils::formatter::{fit_width, format_date, format_file_size, pluralize};

const NAME_WIDTH: usize = 32;
const SIZE_WIDTH: usize = 10;

/// 명령 실행. 돌려준 줄은 바로 출력한다
///
/// 파일시스템을 건드리는 명령은 요청만 보내므로, 결과 화면은
/// 이벤트가 도착한 뒤 `render_active`로 다시 그린다.
pub fn execute(app: &mut App, command: Command) -> Vec<String> {
    let mut out = Vec::new();
    match command {
        Command::ListTabs => out.extend(render_tabs(app)),
        Command::NewTab => {
            if app.new_tab() {
                out.extend(render_tabs(app));
            }
        }
        Command::CloseTab(None) => app.menu(MenuCommand::CloseTab),
        Command::CloseTab(Some(id)) => {
            if app.close_tab(id) {
                out.extend(render_tabs(app));
            }
        }
        Command::SwitchTab(id) => {
            if app.activate_tab(id) {
                out.extend(render_active(app));
            } else {
                out.push(format!("No tab {}", id));
            }
        }
        Command::NextTab => {
            app.next_tab();
            out.extend(render_active(app));
        }
        Command::PrevTab => {
            app.prev_tab();
            out.extend(render_active(app));
        }
        Command::Lock => app.set_locked(true),
        Command::Unlock => app.set_locked(false),
        Command::Open(path) => app.open_path(path),
        Command::OpenInNewTab(path) => app.open_path_in_new_tab(path),
        Command::Enter(name) => {
            app.open_entry(&name);
        }
        Command::GoUp => {
            app.go_up();
            out.extend(render_active(app));
        }
        Command::List => out.extend(render_active(app)),
        Command::Refresh => app.refresh_active(),
        Command::Click { name, modifiers } => {
            if app.click_entry(&name, modifiers) {
                out.push(render_selection(app));
            } else {
                out.push(format!("No entry named {:?}", name));
            }
        }
        Command::SelectAll => app.menu(MenuCommand::SelectAll),
        Command::ClearSelection => {
            app.clear_selection();
            out.push(render_selection(app));
        }
        Command::Copy => app.menu(MenuCommand::Copy),
        Command::Paste => app.menu(MenuCommand::Paste),
        Command::Create(mut items) => {
            // 하나면 단건 요청, 여러 개면 일괄 요청
            if items.len() == 1 {
                let item = items.remove(0);
                if item.is_file {
                    app.create_file(&item.name);
                } else {
                    app.create_folder(&item.name);
                }
            } else {
                app.create_many(items);
            }
        }
        Command::Drives => out.extend(render_drives(app)),
        Command::OpenDrive(index) => {
            if !app.open_drive(index) {
                out.push(format!("No drive {}", index + 1));
            }
        }
        Command::Favorites => out.extend(render_favorites(app)),
        Command::AddFavorite(path) => {
            app.add_favorite(path);
        }
        Command::RemoveFavorite(id) => app.remove_favorite(&id),
        Command::OpenFavorite(index) => {
            if !app.open_favorite(index) {
                out.push(format!("No favorite {} on this page", index + 1));
            }
        }
        Command::Page(page) => {
            if app.set_favorites_page(page) {
                out.extend(render_favorites(app));
            } else {
                out.push(format!("No page {}", page + 1));
            }
        }
        Command::Scroll(metrics) => {
            if app.scroll(metrics) {
                out.extend(render_active(app));
            }
        }
        Command::MouseDown(point) => app.mouse_down(point),
        Command::MouseMove(point) => app.mouse_move(point),
        Command::MouseUp(point) => {
            if let Some(count) = app.mouse_up(point) {
                out.push(format!("{} under the frame", pluralize(count, "entry", "entries")));
                out.push(render_selection(app));
            }
        }
        Command::Help => out.extend(render_help()),
        Command::Quit => app.quit(),
    }

    if let Some(toast) = app.take_toast() {
        out.push(format!("! {}", toast));
    }
    out
}

/// 탭 바: 활성 탭은 `*`, 잠긴 탭은 `#`
pub fn render_tabs(app: &App) -> Vec<String> {
    let active = app.active_tab_id();
    app.tabs()
        .iter()
        .map(|tab| {
            let marker = if tab.id == active { '*' } else { ' ' };
            let lock = if tab.locked { "#" } else { "" };
            format!("{}[{}] {}{}", marker, tab.id, tab.name, lock)
        })
        .collect()
}

/// 활성 탭 화면 (목록 또는 랜딩)
pub fn render_active(app: &App) -> Vec<String> {
    let tab = app.active_tab();
    if tab.shows_landing() {
        let mut out = vec![format!("[{}] {}", tab.id, tab.name)];
        out.extend(render_drives(app));
        out.extend(render_favorites(app));
        return out;
    }

    let visible = app.visible_entries();
    let mut out = vec![format!(
        "[{}] {} ({}, showing {})",
        tab.id,
        tab.path.display(),
        pluralize(tab.content.len(), "entry", "entries"),
        visible.len()
    )];
    out.extend(visible.iter().map(|entry| {
        let mark = if app.selection().contains(&entry.name) {
            '>'
        } else {
            ' '
        };
        format!("{} {}", mark, render_entry(entry))
    }));
    out
}

fn render_entry(entry: &DirEntry) -> String {
    let (name, size) = if entry.is_file {
        (entry.name.clone(), format_file_size(entry.metadata.size))
    } else {
        (format!("{}/", entry.name), "<DIR>".to_string())
    };
    format!(
        "{} {:>width$} {}",
        fit_width(&name, NAME_WIDTH),
        size,
        format_date(entry.metadata.modified),
        width = SIZE_WIDTH
    )
}

pub fn render_selection(app: &App) -> String {
    let selection = app.selection();
    if selection.is_empty() {
        return "Selection: (none)".to_string();
    }
    format!("Selection: {}", selection.names().join(", "))
}

pub fn render_drives(app: &App) -> Vec<String> {
    let mut out = vec!["Drives:".to_string()];
    out.extend(app.drives().iter().enumerate().map(|(i, drive)| {
        format!(
            "  {}. {} {}",
            i + 1,
            fit_width(&drive.filesystem, 20),
            drive.mounted.display()
        )
    }));
    out
}

pub fn render_favorites(app: &App) -> Vec<String> {
    let pager = app.favorites();
    let mut out = vec!["Favorites:".to_string()];
    out.extend(pager.current().iter().enumerate().map(|(i, fav)| {
        let kind = if fav.is_file { "file" } else { "dir " };
        format!("  {}. {} {} ({})", i + 1, kind, fav.name, fav.id)
    }));
    if pager.shows_pagination() {
        out.push(format!(
            "  page {}/{}",
            pager.current_page() + 1,
            pager.page_count()
        ));
    }
    out
}

pub fn render_help() -> Vec<String> {
    let mut out = Vec::new();
    for (category, items) in generate_help_entries() {
        out.push(format!("{}:", category));
        for (usage, help) in items {
            out.push(format!("  {} {}", fit_width(usage, 48), help));
        }
    }
    out
}
