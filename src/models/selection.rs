//! 선택 집합 (ctrl/shift 다중 선택)
//!
//! 선택 순서를 유지하며, 마지막 항목이 shift 범위 선택의 기준점이 된다.

use crate::models::dir_entry::DirEntry;

/// 클릭 시 눌린 수식 키
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        shift: false,
    };
    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        shift: false,
    };
    pub const SHIFT: Modifiers = Modifiers {
        ctrl: false,
        shift: true,
    };
}

/// 선택된 엔트리 이름 목록 (중복 없음)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    names: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    /// 선택을 통째로 교체 (중복은 첫 번째만 유지)
    pub fn replace<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.clear();
        self.extend_unique(names.into_iter().map(Into::into));
    }

    pub fn select_all(&mut self, content: &[DirEntry]) {
        self.replace(content.iter().map(|e| e.name.clone()));
    }

    /// 엔트리 클릭 처리
    pub fn click(&mut self, name: &str, modifiers: Modifiers, content: &[DirEntry]) {
        let selected = self.contains(name);

        if modifiers.ctrl && selected {
            self.names.retain(|n| n != name);
        } else if modifiers.ctrl {
            self.names.push(name.to_string());
        } else if modifiers.shift && !self.names.is_empty() {
            let range = self.shift_range(name, content);
            self.extend_unique(range.into_iter().chain(std::iter::once(name.to_string())));
        } else if !selected {
            self.names = vec![name.to_string()];
        } else {
            self.names.clear();
        }
    }

    /// 기준점부터 대상 직전까지의 이름 (목록 순서)
    fn shift_range(&self, name: &str, content: &[DirEntry]) -> Vec<String> {
        let Some(anchor) = self.names.last() else {
            return Vec::new();
        };
        let from = content.iter().position(|e| &e.name == anchor);
        let to = content.iter().position(|e| e.name == name);

        match (from, to) {
            (Some(from), Some(to)) => content[from.min(to)..from.max(to)]
                .iter()
                .map(|e| e.name.clone())
                .collect(),
            _ => Vec::new(),
        }
    }

    fn extend_unique(&mut self, names: impl Iterator<Item = String>) {
        for name in names {
            if !self.contains(&name) {
                self.names.push(name);
            }
        }
    }
}
