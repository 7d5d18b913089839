use serde::{Deserialize, Serialize};

/// 一天中的分钟数
pub const MINUTES_PER_DAY: i32 = 1440;

/// 正午对应的分钟数
pub const NOON_MINUTES: i32 = 720;

/// 当天的晨昏边界（自本地午夜起的分钟数）
///
/// 八个边界总是整体更新，持久化时作为一个数据块写入。
/// 字段顺序即为一天中预期的先后顺序，但不做强制校验。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TwilightBoundaries {
    pub astronomical_begin: i16,
    pub nautical_begin: i16,
    pub civil_begin: i16,
    pub sunrise: i16,
    pub sunset: i16,
    pub civil_end: i16,
    pub nautical_end: i16,
    pub astronomical_end: i16,
    pub valid: bool,
}

impl TwilightBoundaries {
    /// 启动时的初始状态，首次同步之前一直无效
    pub const INVALID: Self = Self {
        astronomical_begin: 0,
        nautical_begin: 0,
        civil_begin: 0,
        sunrise: 0,
        sunset: 0,
        civil_end: 0,
        nautical_end: 0,
        astronomical_end: 0,
        valid: false,
    };

    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        astronomical_begin: i16,
        nautical_begin: i16,
        civil_begin: i16,
        sunrise: i16,
        sunset: i16,
        civil_end: i16,
        nautical_end: i16,
        astronomical_end: i16,
    ) -> Self {
        Self {
            astronomical_begin,
            nautical_begin,
            civil_begin,
            sunrise,
            sunset,
            civil_end,
            nautical_end,
            astronomical_end,
            valid: true,
        }
    }

    /// 按天文、航海、民用、白昼的顺序返回 (开始, 结束) 区间
    pub fn bands(&self) -> [(i16, i16); 4] {
        [
            (self.astronomical_begin, self.astronomical_end),
            (self.nautical_begin, self.nautical_end),
            (self.civil_begin, self.civil_end),
            (self.sunrise, self.sunset),
        ]
    }

    /// 边界是否单调不减
    pub fn is_ordered(&self) -> bool {
        let values = [
            self.astronomical_begin,
            self.nautical_begin,
            self.civil_begin,
            self.sunrise,
            self.sunset,
            self.civil_end,
            self.nautical_end,
            self.astronomical_end,
        ];
        values.windows(2).all(|pair| pair[0] <= pair[1])
    }
}
