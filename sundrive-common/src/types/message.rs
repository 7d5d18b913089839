use serde::{Deserialize, Serialize};

use crate::types::{DateConfigUpdate, TwilightBoundaries};

/// 时区名称的最大长度
pub const TIMEZONE_NAME_LENGTH: usize = 64;

/// 来自伴侣应用的消息，所有字段均可缺省
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InboundMessage {
    pub js_ready: Option<i32>,
    pub date_format_us: Option<i32>,
    pub show_day_of_week: Option<i32>,
    pub step_goal: Option<i32>,
    pub show_hour_numbers: Option<i32>,
    pub sunrise: Option<i32>,
    pub sunset: Option<i32>,
    pub civil_twilight_begin: Option<i32>,
    pub civil_twilight_end: Option<i32>,
    pub nautical_twilight_begin: Option<i32>,
    pub nautical_twilight_end: Option<i32>,
    pub astronomical_twilight_begin: Option<i32>,
    pub astronomical_twilight_end: Option<i32>,
}

impl InboundMessage {
    pub fn is_handshake(&self) -> bool {
        self.js_ready.is_some()
    }

    pub fn date_config_update(&self) -> DateConfigUpdate {
        DateConfigUpdate {
            us_date_format: self.date_format_us.map(|v| v == 1),
            show_weekday: self.show_day_of_week.map(|v| v == 1),
        }
    }

    pub fn hour_numbers(&self) -> Option<bool> {
        self.show_hour_numbers.map(|v| v == 1)
    }

    /// 是否携带了日出日落
    pub fn has_sun_times(&self) -> bool {
        self.sunrise.is_some() && self.sunset.is_some()
    }

    /// 八个边界全部到齐时才组成一组有效数据
    pub fn twilight(&self) -> Option<TwilightBoundaries> {
        Some(TwilightBoundaries::new(
            self.astronomical_twilight_begin? as i16,
            self.nautical_twilight_begin? as i16,
            self.civil_twilight_begin? as i16,
            self.sunrise? as i16,
            self.sunset? as i16,
            self.civil_twilight_end? as i16,
            self.nautical_twilight_end? as i16,
            self.astronomical_twilight_end? as i16,
        ))
    }
}

/// 发往伴侣应用的消息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    pub timezone_string: heapless::String<TIMEZONE_NAME_LENGTH>,
}

impl OutboundMessage {
    pub fn timezone(timezone_string: heapless::String<TIMEZONE_NAME_LENGTH>) -> Self {
        Self { timezone_string }
    }
}
