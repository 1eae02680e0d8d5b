//! 日历日期模块
//!
//! 打卡门控以「本地时区的日历日」为单位工作。持久化的值沿用浏览器
//! `Date.toDateString()` 的格式 (例如 `"Mon Nov 10 2025"`)，读取时同时兼容 ISO `YYYY-MM-DD`。

use chrono::NaiveDate;

/// `Date.toDateString()` 对应的 chrono 格式
pub const DATE_STRING_FORMAT: &str = "%a %b %d %Y";
/// 示例数据中日期使用的 ISO 格式
pub const ISO_FORMAT: &str = "%Y-%m-%d";

/// 获取「今天」的能力，由调用方注入 (浏览器本地时钟或测试中的固定日期)
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// 固定日期时钟
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// 将日期格式化为持久化字符串
pub fn format_date_string(date: NaiveDate) -> String {
    date.format(DATE_STRING_FORMAT).to_string()
}

/// 解析持久化字符串
///
/// 返回 None 如果两种格式都解析失败
pub fn parse_date_string(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, DATE_STRING_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(s, ISO_FORMAT))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_matches_browser_date_string() {
        assert_eq!(format_date_string(date(2025, 11, 10)), "Mon Nov 10 2025");
        // 日期补零，与 toDateString 一致
        assert_eq!(format_date_string(date(2025, 11, 3)), "Mon Nov 03 2025");
    }

    #[test]
    fn test_parse_both_formats() {
        assert_eq!(parse_date_string("Mon Nov 10 2025"), Some(date(2025, 11, 10)));
        assert_eq!(parse_date_string("2025-11-10"), Some(date(2025, 11, 10)));
        assert_eq!(parse_date_string(" 2025-11-10 "), Some(date(2025, 11, 10)));
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(parse_date_string(""), None);
        assert_eq!(parse_date_string("yesterday"), None);
        assert_eq!(parse_date_string("2025-13-40"), None);
    }
}
