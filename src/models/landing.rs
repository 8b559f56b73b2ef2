use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 즐겨찾기 한 페이지당 기본 항목 수
pub const DEFAULT_FAVORITES_PAGE_SIZE: usize = 10;

/// 마운트된 드라이브
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drive {
    /// 장치 이름 (예: /dev/sda1)
    pub filesystem: String,
    /// 마운트 위치
    pub mounted: PathBuf,
}

/// 즐겨찾기 항목
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: String,
    pub name: String,
    pub path: PathBuf,
    pub is_file: bool,
}

/// 드라이브를 장치 이름순으로 정렬
pub fn sort_drives(drives: &mut [Drive]) {
    drives.sort_by(|a, b| a.filesystem.cmp(&b.filesystem));
}

/// 즐겨찾기 페이지네이션 (폴더 먼저)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoritesPager {
    items: Vec<Favorite>,
    page_size: usize,
    page: usize,
}

impl FavoritesPager {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            page_size: page_size.max(1),
            page: 0,
        }
    }

    /// 목록 교체. 폴더를 앞으로 보내되 같은 종류끼리는 순서 유지
    pub fn set_items(&mut self, mut items: Vec<Favorite>) {
        items.sort_by_key(|f| f.is_file);
        self.items = items;
        if self.page >= self.page_count() {
            self.page = 0;
        }
    }

    pub fn items(&self) -> &[Favorite] {
        &self.items
    }

    pub fn page_count(&self) -> usize {
        self.items.len().div_ceil(self.page_size)
    }

    /// 페이지 버튼을 보여야 하는지
    pub fn shows_pagination(&self) -> bool {
        self.items.len() > self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.page
    }

    pub fn set_page(&mut self, page: usize) -> bool {
        if page < self.page_count() {
            self.page = page;
            true
        } else {
            false
        }
    }

    /// n번째 페이지 (0-based). 범위를 벗어나면 빈 슬라이스
    pub fn page(&self, page: usize) -> &[Favorite] {
        let start = page.saturating_mul(self.page_size);
        if start >= self.items.len() {
            return &[];
        }
        let end = (start + self.page_size).min(self.items.len());
        &self.items[start..end]
    }

    pub fn current(&self) -> &[Favorite] {
        self.page(self.page)
    }
}

impl Default for FavoritesPager {
    fn default() -> Self {
        Self::new(DEFAULT_FAVORITES_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fav(name: &str, is_file: bool) -> Favorite {
        Favorite {
            id: name.to_string(),
            name: name.to_string(),
            path: PathBuf::from("/fav").join(name),
            is_file,
        }
    }

    #[test]
    fn test_sort_drives_by_filesystem() {
        let mut drives = vec![
            Drive {
                filesystem: "/dev/sdb1".into(),
                mounted: PathBuf::from("/mnt/b"),
            },
            Drive {
                filesystem: "/dev/sda1".into(),
                mounted: PathBuf::from("/"),
            },
        ];
        sort_drives(&mut drives);
        assert_eq!(drives[0].filesystem, "/dev/sda1");
    }

    #[test]
    fn test_folders_first_stable() {
        let mut pager = FavoritesPager::default();
        pager.set_items(vec![
            fav("a.txt", true),
            fav("music", false),
            fav("b.txt", true),
            fav("docs", false),
        ]);
        let names: Vec<&str> = pager.items().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["music", "docs", "a.txt", "b.txt"]);
    }

    #[test]
    fn test_pagination() {
        let mut pager = FavoritesPager::new(10);
        pager.set_items((0..23).map(|i| fav(&format!("d{}", i), false)).collect());

        assert_eq!(pager.page_count(), 3);
        assert!(pager.shows_pagination());
        assert_eq!(pager.page(0).len(), 10);
        assert_eq!(pager.page(2).len(), 3);
        assert!(pager.page(3).is_empty());

        assert!(pager.set_page(2));
        assert_eq!(pager.current()[0].name, "d20");
        assert!(!pager.set_page(3));
    }

    #[test]
    fn test_no_pagination_when_fits() {
        let mut pager = FavoritesPager::new(10);
        pager.set_items((0..10).map(|i| fav(&format!("d{}", i), false)).collect());
        assert_eq!(pager.page_count(), 1);
        assert!(!pager.shows_pagination());
    }

    #[test]
    fn test_page_resets_when_items_shrink() {
        let mut pager = FavoritesPager::new(2);
        pager.set_items((0..6).map(|i| fav(&format!("d{}", i), false)).collect());
        pager.set_page(2);
        pager.set_items(vec![fav("only", false)]);
        assert_eq!(pager.current_page(), 0);
    }
}
