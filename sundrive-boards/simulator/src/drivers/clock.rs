use jiff::{Zoned, civil::DateTime, tz::TimeZone};
use sundrive_common::*;

/// 读取宿主机的本地时间与时区
pub struct SystemClock {
    timezone: heapless::String<TIMEZONE_NAME_LENGTH>,
}

impl SystemClock {
    pub fn new() -> Self {
        let tz = TimeZone::system();
        let name = tz.iana_name().unwrap_or("UTC");
        let mut timezone = heapless::String::new();
        if timezone.push_str(name).is_err() {
            warn!("Timezone name too long: {}", name);
            let _ = timezone.push_str("UTC");
        }
        info!("System timezone: {}", timezone.as_str());
        Self { timezone }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl WallClock for SystemClock {
    fn now(&self) -> DateTime {
        Zoned::now().datetime()
    }

    fn timezone_name(&self) -> heapless::String<TIMEZONE_NAME_LENGTH> {
        self.timezone.clone()
    }
}
