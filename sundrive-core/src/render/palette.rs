//! 配色表

use embedded_graphics::pixelcolor::Rgb888;
use sundrive_common::{DisplayCapabilities, PeriodType};

/// 表盘使用的全部颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb888,
    pub night: Rgb888,
    pub astronomical: Rgb888,
    pub nautical: Rgb888,
    pub civil: Rgb888,
    pub day: Rgb888,
    pub separator: Rgb888,
    pub marks: Rgb888,
    pub label_outline: Rgb888,
    pub date_text: Rgb888,
    pub battery_high: Rgb888,
    pub battery_medium: Rgb888,
    pub battery_low: Rgb888,
    pub battery_backdrop: Rgb888,
    pub charging: Rgb888,
    pub step_tracker: Rgb888,
    pub hour_hand: Rgb888,
    pub minute_hand: Rgb888,
    /// 指针压在白昼或晨昏带上时的颜色
    pub hand_over_day: Rgb888,
    /// 指针压在夜晚带上时的颜色
    pub hand_over_night: Rgb888,
    /// 为 true 时指针颜色随下方的时段变化
    pub contrast_hands: bool,
}

const BLACK: Rgb888 = Rgb888::new(0x00, 0x00, 0x00);
const WHITE: Rgb888 = Rgb888::new(0xFF, 0xFF, 0xFF);
const LIGHT_GRAY: Rgb888 = Rgb888::new(0xAA, 0xAA, 0xAA);
const DARK_GRAY: Rgb888 = Rgb888::new(0x55, 0x55, 0x55);
const RED: Rgb888 = Rgb888::new(0xFF, 0x00, 0x00);

impl Palette {
    pub const COLOR: Palette = Palette {
        background: BLACK,
        night: BLACK,
        astronomical: Rgb888::new(0x00, 0x00, 0x55),
        nautical: Rgb888::new(0x00, 0x55, 0xAA),
        civil: Rgb888::new(0xFF, 0xAA, 0x55),
        day: Rgb888::new(0x00, 0xFF, 0xFF),
        separator: WHITE,
        marks: WHITE,
        label_outline: BLACK,
        date_text: WHITE,
        battery_high: Rgb888::new(0x00, 0xFF, 0x00),
        battery_medium: Rgb888::new(0xFF, 0xFF, 0x00),
        battery_low: RED,
        battery_backdrop: BLACK,
        charging: WHITE,
        step_tracker: Rgb888::new(0xAA, 0x00, 0x55),
        hour_hand: RED,
        minute_hand: RED,
        hand_over_day: RED,
        hand_over_night: RED,
        contrast_hands: false,
    };

    pub const MONOCHROME: Palette = Palette {
        background: BLACK,
        night: BLACK,
        astronomical: DARK_GRAY,
        nautical: DARK_GRAY,
        civil: LIGHT_GRAY,
        day: WHITE,
        separator: WHITE,
        marks: WHITE,
        label_outline: BLACK,
        date_text: WHITE,
        battery_high: LIGHT_GRAY,
        battery_medium: LIGHT_GRAY,
        battery_low: LIGHT_GRAY,
        battery_backdrop: BLACK,
        charging: DARK_GRAY,
        step_tracker: DARK_GRAY,
        hour_hand: WHITE,
        minute_hand: WHITE,
        hand_over_day: BLACK,
        hand_over_night: WHITE,
        contrast_hands: true,
    };

    pub fn for_capabilities(capabilities: &DisplayCapabilities) -> Self {
        if capabilities.full_color {
            Self::COLOR
        } else {
            Self::MONOCHROME
        }
    }

    /// 压在给定时段上的指针颜色
    pub fn contrast_for(&self, period: PeriodType) -> Rgb888 {
        if period.is_night() {
            self.hand_over_night
        } else {
            self.hand_over_day
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_selection() {
        let color = DisplayCapabilities {
            full_color: true,
            round: true,
        };
        let mono = DisplayCapabilities {
            full_color: false,
            round: false,
        };
        assert_eq!(Palette::for_capabilities(&color), Palette::COLOR);
        assert_eq!(Palette::for_capabilities(&mono), Palette::MONOCHROME);
    }

    #[test]
    fn test_contrast_colors() {
        let mono = Palette::MONOCHROME;
        assert_eq!(mono.contrast_for(PeriodType::Night), WHITE);
        assert_eq!(mono.contrast_for(PeriodType::Day), BLACK);
        assert_eq!(mono.contrast_for(PeriodType::AstronomicalDusk), BLACK);
    }
}
