//! 마우스 드래그 선택 사각형
//!
//! 목록 배경에서 눌렀을 때만 시작하고, 움직임이 있었을 때만 사각형을 만든다.

use crate::models::dir_entry::DirEntry;

/// 화면 좌표 (px)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// 정규화된 사각형
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// 두 꼭짓점으로 사각형 생성 (드래그 방향 무관)
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            width: span(a.x, b.x),
            height: span(a.y, b.y),
        }
    }

    pub fn right(&self) -> i32 {
        self.left.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.top.saturating_add(self.height)
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x < self.right()
            && point.y >= self.top
            && point.y < self.bottom()
    }

    /// 경계만 닿는 경우는 겹치지 않는 것으로 본다
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }
}

/// 드래그 선택 상태
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragSelection {
    start: Option<Point>,
    current: Point,
    drawing: bool,
}

impl DragSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// 버튼 누름. 항목 위에서 누른 경우(`on_background == false`)는 무시
    pub fn mouse_down(&mut self, point: Point, on_background: bool) {
        if !on_background {
            return;
        }
        self.start = Some(point);
        self.current = point;
        self.drawing = false;
    }

    pub fn mouse_move(&mut self, point: Point) {
        if self.start.is_some() {
            self.drawing = true;
            self.current = point;
        }
    }

    /// 버튼 뗌. 실제로 그린 경우에만 최종 사각형 반환
    pub fn mouse_up(&mut self, point: Point) -> Option<Rect> {
        let start = self.start.take()?;
        let drew = std::mem::take(&mut self.drawing);
        self.current = point;
        drew.then(|| Rect::from_corners(start, point))
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// 그리는 중인 사각형 (표시용)
    pub fn frame(&self) -> Option<Rect> {
        match (self.start, self.drawing) {
            (Some(start), true) => Some(Rect::from_corners(start, self.current)),
            _ => None,
        }
    }
}

/// 목록 그리드 치수 (px)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridMetrics {
    pub columns: usize,
    pub cell_width: i32,
    pub cell_height: i32,
    pub gap: i32,
    /// 상단 내비게이션 바 영역
    pub top_offset: i32,
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self {
            columns: 6,
            cell_width: 100,
            cell_height: 100,
            gap: 20,
            top_offset: 60,
        }
    }
}

/// 두 좌표 사이 거리. i32 범위를 넘으면 i32::MAX
fn span(a: i32, b: i32) -> i32 {
    i32::try_from(a.abs_diff(b)).unwrap_or(i32::MAX)
}

/// 항목별 셀 사각형 계산
pub fn grid_layout(count: usize, metrics: GridMetrics) -> Vec<Rect> {
    let columns = metrics.columns.max(1);
    (0..count)
        .map(|i| {
            let col = i32::try_from(i % columns).unwrap_or(i32::MAX);
            let row = i32::try_from(i / columns).unwrap_or(i32::MAX);
            Rect::new(
                col.saturating_mul(metrics.cell_width + metrics.gap),
                metrics
                    .top_offset
                    .saturating_add(row.saturating_mul(metrics.cell_height + metrics.gap)),
                metrics.cell_width,
                metrics.cell_height,
            )
        })
        .collect()
}

/// 사각형과 겹치는 엔트리 이름
pub fn hit_test(frame: &Rect, cells: &[Rect], content: &[DirEntry]) -> Vec<String> {
    cells
        .iter()
        .zip(content)
        .filter(|(cell, _)| frame.intersects(cell))
        .map(|(_, entry)| entry.name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::dir_entry::EntryMetadata;
    use std::path::PathBuf;

    #[test]
    fn test_rect_from_corners_normalizes() {
        let rect = Rect::from_corners(Point::new(50, 80), Point::new(10, 20));
        assert_eq!(rect, Rect::new(10, 20, 40, 60));
    }

    #[test]
    fn test_extreme_corners_saturate() {
        let rect = Rect::from_corners(Point::new(i32::MIN + 1, 5000), Point::new(i32::MAX, 0));
        assert_eq!(rect.left, i32::MIN + 1);
        assert_eq!(rect.width, i32::MAX);
        assert_eq!(rect.right(), 0);
        assert_eq!(rect.height, 5000);

        let far = Rect::from_corners(Point::new(0, 0), Point::new(i32::MAX, i32::MAX));
        assert_eq!(far.right(), i32::MAX);
        assert!(far.contains(Point::new(10, 10)));
        assert!(far.intersects(&Rect::new(100, 100, 50, 50)));
    }

    #[test]
    fn test_intersects() {
        let a = Rect::new(0, 0, 100, 100);
        assert!(a.intersects(&Rect::new(50, 50, 100, 100)));
        assert!(!a.intersects(&Rect::new(100, 0, 10, 10)));
        assert!(!a.intersects(&Rect::new(200, 200, 10, 10)));
    }

    #[test]
    fn test_contains() {
        let a = Rect::new(10, 10, 20, 20);
        assert!(a.contains(Point::new(10, 10)));
        assert!(!a.contains(Point::new(30, 15)));
    }

    #[test]
    fn test_drag_on_item_is_ignored() {
        let mut drag = DragSelection::new();
        drag.mouse_down(Point::new(0, 0), false);
        drag.mouse_move(Point::new(50, 50));
        assert!(!drag.is_drawing());
        assert_eq!(drag.mouse_up(Point::new(50, 50)), None);
    }

    #[test]
    fn test_click_without_move_draws_nothing() {
        let mut drag = DragSelection::new();
        drag.mouse_down(Point::new(5, 5), true);
        assert_eq!(drag.mouse_up(Point::new(5, 5)), None);
    }

    #[test]
    fn test_full_drag() {
        let mut drag = DragSelection::new();
        drag.mouse_down(Point::new(100, 100), true);
        drag.mouse_move(Point::new(40, 150));
        assert!(drag.is_drawing());
        assert_eq!(drag.frame(), Some(Rect::new(40, 100, 60, 50)));

        let rect = drag.mouse_up(Point::new(30, 160));
        assert_eq!(rect, Some(Rect::new(30, 100, 70, 60)));
        assert!(!drag.is_drawing());
        assert_eq!(drag.frame(), None);
    }

    #[test]
    fn test_grid_layout_wraps_rows() {
        let metrics = GridMetrics {
            columns: 2,
            ..GridMetrics::default()
        };
        let cells = grid_layout(3, metrics);
        assert_eq!(cells[0], Rect::new(0, 60, 100, 100));
        assert_eq!(cells[1], Rect::new(120, 60, 100, 100));
        assert_eq!(cells[2], Rect::new(0, 180, 100, 100));
    }

    #[test]
    fn test_hit_test_returns_intersecting_names() {
        let content: Vec<DirEntry> = ["a", "b", "c", "d"]
            .iter()
            .map(|n| DirEntry::new(*n, PathBuf::from(n), true, EntryMetadata::default()))
            .collect();
        let metrics = GridMetrics {
            columns: 2,
            ..GridMetrics::default()
        };
        let cells = grid_layout(content.len(), metrics);

        // 오른쪽 열만 덮는 사각형
        let frame = Rect::from_corners(Point::new(150, 0), Point::new(200, 400));
        assert_eq!(hit_test(&frame, &cells, &content), vec!["b", "d"]);
    }
}
