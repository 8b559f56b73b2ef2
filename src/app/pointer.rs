use super::*;
use crate::models::rubber_band::{grid_layout, hit_test};
use crate::models::{Modifiers, Point, ScrollMetrics};

impl App {
    // === 선택 ===

    /// 엔트리 클릭. 목록에 없는 이름이면 false
    pub fn click_entry(&mut self, name: &str, modifiers: Modifiers) -> bool {
        let tab = self.tabs.active();
        if tab.entry(name).is_none() {
            return false;
        }
        self.selection.click(name, modifiers, &tab.content);
        true
    }

    pub fn select_all(&mut self) {
        let tab = self.tabs.active();
        if tab.shows_landing() {
            return;
        }
        self.selection.select_all(&tab.content);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // === 스크롤 ===

    /// 스크롤 이벤트. 더 많은 항목을 그리게 되면 true
    pub fn scroll(&mut self, metrics: ScrollMetrics) -> bool {
        let tab = self.tabs.active();
        if tab.shows_landing() {
            return false;
        }
        let total = tab.content.len();
        self.windows
            .entry(tab.id)
            .or_insert_with(|| self.window_template.clone())
            .on_scroll(metrics, total)
    }

    // === 드래그 선택 ===

    pub fn mouse_down(&mut self, point: Point) {
        if self.tabs.active().shows_landing() {
            return;
        }
        let cells = grid_layout(self.visible_entries().len(), self.grid);
        let on_background = !cells.iter().any(|cell| cell.contains(point));
        self.drag.mouse_down(point, on_background);
    }

    pub fn mouse_move(&mut self, point: Point) {
        self.drag.mouse_move(point);
    }

    /// 버튼 뗌. 사각형과 겹치는 엔트리로 선택을 교체하고 그 개수를 반환
    pub fn mouse_up(&mut self, point: Point) -> Option<usize> {
        let frame = self.drag.mouse_up(point)?;
        let visible = self.visible_entries();
        let cells = grid_layout(visible.len(), self.grid);
        let names = hit_test(&frame, &cells, visible);
        let count = names.len();
        self.selection.replace(names);
        Some(count)
    }
}
