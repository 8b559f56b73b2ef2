/// 처음에 그리는 항목 수
pub const DEFAULT_INITIAL_ITEMS: usize = 100;
/// 스크롤 끝에 닿을 때마다 늘리는 항목 수
pub const DEFAULT_LOAD_STEP: usize = 50;
/// 바닥으로 간주하는 여유 높이 (px)
pub const DEFAULT_SCROLL_THRESHOLD: u32 = 150;

/// 스크롤 컨테이너의 측정값 (px)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_height: f64,
    pub scroll_top: f64,
    pub client_height: f64,
}

/// 스크롤 기반 지연 로딩 창
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWindow {
    loaded: usize,
    initial: usize,
    step: usize,
    threshold: u32,
}

impl LoadWindow {
    pub fn new(initial: usize, step: usize, threshold: u32) -> Self {
        Self {
            loaded: initial,
            initial,
            step,
            threshold,
        }
    }

    pub fn loaded(&self) -> usize {
        self.loaded
    }

    /// 스크롤 이벤트 처리. 창이 늘어났으면 true
    pub fn on_scroll(&mut self, metrics: ScrollMetrics, total: usize) -> bool {
        if self.loaded >= total {
            return false;
        }

        let bottom = (metrics.scroll_top + metrics.client_height).ceil();
        if metrics.scroll_height - f64::from(self.threshold) <= bottom {
            log::debug!("scrolled to bottom, loading {} more", self.step);
            self.loaded += self.step;
            return true;
        }
        false
    }

    /// 현재 그려야 할 항목
    pub fn visible<'a, T>(&self, content: &'a [T]) -> &'a [T] {
        &content[..self.loaded.min(content.len())]
    }

    pub fn reset(&mut self) {
        self.loaded = self.initial;
    }
}

impl Default for LoadWindow {
    fn default() -> Self {
        Self::new(DEFAULT_INITIAL_ITEMS, DEFAULT_LOAD_STEP, DEFAULT_SCROLL_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(scroll_top: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_height: 2000.0,
            scroll_top,
            client_height: 500.0,
        }
    }

    #[test]
    fn test_grows_near_bottom() {
        let mut window = LoadWindow::default();
        // 2000 - 150 = 1850 <= 1350 + 500
        assert!(window.on_scroll(at(1350.0), 400));
        assert_eq!(window.loaded(), 150);
    }

    #[test]
    fn test_does_not_grow_far_from_bottom() {
        let mut window = LoadWindow::default();
        assert!(!window.on_scroll(at(1000.0), 400));
        assert_eq!(window.loaded(), 100);
    }

    #[test]
    fn test_fractional_scroll_top_is_rounded_up() {
        let mut window = LoadWindow::default();
        assert!(window.on_scroll(at(1349.2), 400));
    }

    #[test]
    fn test_stops_when_everything_loaded() {
        let mut window = LoadWindow::default();
        assert!(!window.on_scroll(at(1500.0), 80));
        assert_eq!(window.loaded(), 100);
    }

    #[test]
    fn test_visible_and_reset() {
        let items: Vec<u32> = (0..30).collect();
        let mut window = LoadWindow::new(10, 5, 150);
        assert_eq!(window.visible(&items).len(), 10);
        window.on_scroll(at(1500.0), items.len());
        assert_eq!(window.visible(&items).len(), 15);
        window.reset();
        assert_eq!(window.loaded(), 10);
        assert_eq!(window.visible(&items[..3]).len(), 3);
    }
}
