//! 本地时区日历日

use zpire_shared::Clock;
use zpire_shared::chrono::NaiveDate;

/// 通过 `js_sys::Date` 读取浏览器本地时区的当天日期
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn today(&self) -> NaiveDate {
        let now = js_sys::Date::new_0();
        // getMonth 从 0 开始
        NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
            .unwrap_or_default()
    }
}
