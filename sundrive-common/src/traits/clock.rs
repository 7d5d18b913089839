use jiff::civil::DateTime;

use crate::types::TIMEZONE_NAME_LENGTH;

/// 本地时钟
pub trait WallClock {
    /// 当前本地时间
    fn now(&self) -> DateTime;

    /// 本地时区标识，例如 "Europe/Madrid"
    fn timezone_name(&self) -> heapless::String<TIMEZONE_NAME_LENGTH>;
}

/// 停在固定时刻的时钟
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: DateTime,
    timezone: heapless::String<TIMEZONE_NAME_LENGTH>,
}

impl FixedClock {
    pub fn new(now: DateTime, timezone: &str) -> Self {
        let mut name = heapless::String::new();
        // 超长的时区名按容量截断
        for ch in timezone.chars() {
            if name.push(ch).is_err() {
                break;
            }
        }
        Self {
            now,
            timezone: name,
        }
    }

    pub fn set(&mut self, now: DateTime) {
        self.now = now;
    }
}

impl WallClock for FixedClock {
    fn now(&self) -> DateTime {
        self.now
    }

    fn timezone_name(&self) -> heapless::String<TIMEZONE_NAME_LENGTH> {
        self.timezone.clone()
    }
}
