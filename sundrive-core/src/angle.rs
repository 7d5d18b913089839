//! 角度映射
//!
//! 24 小时表盘：正午在 12 点方向（顶部），午夜在 6 点方向（底部），顺时针递增。
//! 角度使用定点整圈单位，`FULL_TURN` 对应 360°。

use embedded_graphics::geometry::Point;
use sundrive_common::{MINUTES_PER_DAY, NOON_MINUTES};

/// 定点角度，0 为顶部，顺时针增加
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Angle(i32);

impl Angle {
    pub const FULL_TURN: i32 = 0x1_0000;
    pub const HALF_TURN: i32 = Self::FULL_TURN / 2;

    pub const ZERO: Angle = Angle(0);
    pub const FULL: Angle = Angle(Self::FULL_TURN);
    pub const HALF: Angle = Angle(Self::HALF_TURN);

    pub const fn from_raw(raw: i32) -> Self {
        Angle(raw)
    }

    pub const fn from_degrees(degrees: i32) -> Self {
        Angle(degrees * Self::FULL_TURN / 360)
    }

    pub const fn raw(self) -> i32 {
        self.0
    }

    /// 归一化到 [0, FULL_TURN)
    pub const fn normalized(self) -> Self {
        Angle(self.0.rem_euclid(Self::FULL_TURN))
    }

    pub fn degrees(self) -> f32 {
        self.0 as f32 * 360.0 / Self::FULL_TURN as f32
    }

    pub fn radians(self) -> f32 {
        self.0 as f32 * 2.0 * core::f32::consts::PI / Self::FULL_TURN as f32
    }

    /// 从圆心出发、沿该角度距离为 radius 的点
    pub fn point_at(self, center: Point, radius: i32) -> Point {
        let rad = self.radians();
        let r = radius as f32;
        Point::new(
            center.x + libm::roundf(libm::sinf(rad) * r) as i32,
            center.y - libm::roundf(libm::cosf(rad) * r) as i32,
        )
    }
}

impl core::ops::Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle(self.0 - rhs.0)
    }
}

/// 当天分钟数映射到 24 小时表盘角度，任意整数输入都按一天取模
pub fn minutes_to_angle(minutes: i32) -> Angle {
    let wrapped = (minutes as i64 - NOON_MINUTES as i64).rem_euclid(MINUTES_PER_DAY as i64);
    Angle((wrapped * Angle::FULL_TURN as i64 / MINUTES_PER_DAY as i64) as i32)
}

/// 分针角度：标准 60 分钟一圈
pub fn minute_hand_angle(minute: i32) -> Angle {
    Angle(minute.rem_euclid(60) * Angle::FULL_TURN / 60)
}

/// 把角度反算为 24 小时表盘上对应的分钟数
pub fn angle_to_ring_minutes(angle: Angle) -> i32 {
    let raw = angle.normalized().raw() as i64;
    let full = Angle::FULL_TURN as i64;
    // 四舍五入，保证与 minutes_to_angle 互逆
    let minutes = ((raw * MINUTES_PER_DAY as i64 + full / 2) / full) as i32 + NOON_MINUTES;
    minutes.rem_euclid(MINUTES_PER_DAY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noon_is_top() {
        assert_eq!(minutes_to_angle(720), Angle::ZERO);
    }

    #[test]
    fn test_midnight_is_bottom() {
        assert_eq!(minutes_to_angle(0), Angle::HALF);
        assert_eq!(minutes_to_angle(1440), Angle::HALF);
    }

    #[test]
    fn test_quarter_positions() {
        // 18:00 在右侧，06:00 在左侧
        assert_eq!(minutes_to_angle(18 * 60), Angle::from_degrees(90));
        assert_eq!(minutes_to_angle(6 * 60), Angle::from_degrees(270));
    }

    #[test]
    fn test_periodic_over_a_day() {
        for m in (-3000..3000).step_by(7) {
            assert_eq!(minutes_to_angle(m), minutes_to_angle(m + 1440));
            assert_eq!(minutes_to_angle(m), minutes_to_angle(m - 1440));
        }
    }

    #[test]
    fn test_always_in_range() {
        for m in [i32::MIN, -100_000, -1, 0, 719, 720, 1439, 1440, 99_999, i32::MAX] {
            let a = minutes_to_angle(m);
            assert!(a.raw() >= 0 && a.raw() < Angle::FULL_TURN);
        }
    }

    #[test]
    fn test_minute_hand_angle() {
        assert_eq!(minute_hand_angle(0), Angle::ZERO);
        assert_eq!(minute_hand_angle(15), Angle::from_degrees(90));
        assert_eq!(minute_hand_angle(30), Angle::HALF);
    }

    #[test]
    fn test_ring_minutes_inverse() {
        assert_eq!(angle_to_ring_minutes(Angle::ZERO), 720);
        assert_eq!(angle_to_ring_minutes(Angle::HALF), 0);
        assert_eq!(angle_to_ring_minutes(Angle::from_degrees(90)), 1080);
        for m in 0..1440 {
            assert_eq!(angle_to_ring_minutes(minutes_to_angle(m)), m);
        }
    }

    #[test]
    fn test_point_at() {
        let center = Point::new(90, 90);
        assert_eq!(Angle::ZERO.point_at(center, 10), Point::new(90, 80));
        assert_eq!(Angle::from_degrees(90).point_at(center, 10), Point::new(100, 90));
        assert_eq!(Angle::HALF.point_at(center, 10), Point::new(90, 100));
        assert_eq!(Angle::from_degrees(270).point_at(center, 10), Point::new(80, 90));
    }
}
