//! 日期文本

use core::fmt::Write;

use jiff::civil::{DateTime, Weekday};
use sundrive_common::DateDisplayConfig;

pub const DATE_TEXT_CAPACITY: usize = 16;

fn weekday_abbrev(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Monday => "Mo",
        Weekday::Tuesday => "Tu",
        Weekday::Wednesday => "We",
        Weekday::Thursday => "Th",
        Weekday::Friday => "Fr",
        Weekday::Saturday => "Sa",
        Weekday::Sunday => "Su",
    }
}

/// 生成表盘中央的日期文本，例如 "Mo 12/01"
pub fn format_date(now: DateTime, config: &DateDisplayConfig) -> heapless::String<DATE_TEXT_CAPACITY> {
    let mut text = heapless::String::new();
    let (first, second) = if config.us_date_format {
        (now.month(), now.day())
    } else {
        (now.day(), now.month())
    };

    // 最长 8 个字符，不会超出容量
    if config.show_weekday {
        let _ = write!(text, "{} ", weekday_abbrev(now.weekday()));
    }
    let _ = write!(text, "{:02}/{:02}", first, second);
    text
}
