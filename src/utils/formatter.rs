// Formatters - 셸 목록 출력용 크기, 날짜, 컬럼 포맷팅

use chrono::{DateTime, Local};
use std::time::SystemTime;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// 파일 크기를 읽기 쉬운 형식으로 포맷팅
///
/// # Examples
/// ```
/// use deerfm::utils::formatter::format_file_size;
///
/// assert_eq!(format_file_size(0), "0 B");
/// assert_eq!(format_file_size(1536), "1.5 KB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

/// "YYYY-MM-DD HH:MM" 형식 (16자 고정)
pub fn format_date(time: SystemTime) -> String {
    let datetime: DateTime<Local> = time.into();
    datetime.format("%Y-%m-%d %H:%M").to_string()
}

/// 개수에 따라 단수/복수형 반환
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// 표시 너비 기준으로 잘라내거나 공백으로 채워 정확히 `width` 칸을 만든다.
///
/// 넘치는 경우 마지막 칸을 `…`로 바꾼다. 전각 문자가 경계에 걸리면 공백으로 채운다.
pub fn fit_width(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let text_width = text.width();
    if text_width <= width {
        let mut out = text.to_string();
        out.push_str(&" ".repeat(width - text_width));
        return out;
    }

    let budget = width - 1;
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(&" ".repeat(budget - used));
    out.push(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(1023), "1023 B");
        assert_eq!(format_file_size(1024), "1.0 KB");
        assert_eq!(format_file_size(1_048_576), "1.0 MB");
        assert_eq!(format_file_size(2_147_483_648), "2.0 GB");
    }

    #[test]
    fn test_format_date_fixed_length() {
        assert_eq!(format_date(SystemTime::now()).len(), 16);
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(1, "tab", "tabs"), "1 tab");
        assert_eq!(pluralize(0, "tab", "tabs"), "0 tabs");
    }

    #[test]
    fn test_fit_width_pads_short_text() {
        assert_eq!(fit_width("abc", 5), "abc  ");
    }

    #[test]
    fn test_fit_width_truncates_with_ellipsis() {
        let fitted = fit_width("abcdefgh", 5);
        assert_eq!(fitted, "abcd…");
        assert_eq!(fitted.width(), 5);
    }

    #[test]
    fn test_fit_width_wide_chars() {
        // "한글" = 4칸
        let fitted = fit_width("한글파일", 6);
        assert_eq!(fitted.width(), 6);
        assert!(fitted.ends_with('…'));
    }
}
