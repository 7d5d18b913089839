//! 表盘布局常量

/// 晨昏环宽度
pub const TWILIGHT_RING_WIDTH: i32 = 20;

/// 电量环与步数环共用的进度带宽度
pub const PROGRESS_RING_WIDTH: i32 = 10;

/// 分隔线宽度
pub const SEPARATOR_WIDTH: i32 = 1;

/// 图标中心到表盘中心的距离 = radius - ICON_INSET
pub const ICON_INSET: i32 = 42;

/// 小时数字到外圈的距离
pub const LABEL_INSET: i32 = 12;

/// 整点刻度
pub const MAJOR_TICK_LENGTH: i32 = 15;
pub const MINOR_TICK_LENGTH: i32 = 7;
pub const TICK_WIDTH: u32 = 2;
pub const TICK_COUNT: i32 = 24;

/// 指针从 radius - HAND_INSET 处开始
pub const HAND_INSET: i32 = 20;
pub const HOUR_HAND_WIDTH: u32 = 5;
pub const MINUTE_HAND_WIDTH: u32 = 3;
pub const MINUTE_HAND_LENGTH: i32 = 10;

/// 以外半径和宽度描述的环带，外边缘为 outer_radius
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ring {
    pub outer_radius: i32,
    pub width: i32,
}

impl Ring {
    pub const fn new(outer_radius: i32, width: i32) -> Self {
        Self {
            outer_radius,
            width,
        }
    }

    pub fn inner_radius(&self) -> i32 {
        self.outer_radius - self.width
    }

    /// 环带中线半径
    pub fn mid_radius(&self) -> i32 {
        self.outer_radius - self.width / 2
    }
}

/// 由表盘半径推出的各个环带
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingLayout {
    pub twilight: Ring,
    pub outer_separator: Ring,
    pub progress_backdrop: Ring,
    pub battery: Ring,
    pub inner_separator: Ring,
    pub steps: Ring,
}

impl RingLayout {
    pub fn for_radius(radius: i32) -> Self {
        let progress_outer = radius - TWILIGHT_RING_WIDTH;
        Self {
            twilight: Ring::new(radius, TWILIGHT_RING_WIDTH),
            outer_separator: Ring::new(radius, SEPARATOR_WIDTH),
            progress_backdrop: Ring::new(progress_outer, PROGRESS_RING_WIDTH + 2 * SEPARATOR_WIDTH),
            battery: Ring::new(progress_outer - SEPARATOR_WIDTH, PROGRESS_RING_WIDTH),
            inner_separator: Ring::new(
                progress_outer - PROGRESS_RING_WIDTH - 2 * SEPARATOR_WIDTH,
                SEPARATOR_WIDTH,
            ),
            steps: Ring::new(progress_outer - SEPARATOR_WIDTH, PROGRESS_RING_WIDTH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_layout_for_round_display() {
        // 180x180 的圆屏，radius = 85
        let layout = RingLayout::for_radius(85);
        assert_eq!(layout.twilight, Ring::new(85, 20));
        assert_eq!(layout.progress_backdrop, Ring::new(65, 12));
        assert_eq!(layout.battery, Ring::new(64, 10));
        assert_eq!(layout.steps, layout.battery);
        assert_eq!(layout.inner_separator, Ring::new(53, 1));
        assert_eq!(layout.battery.inner_radius(), 54);
    }
}
