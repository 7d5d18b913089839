use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::Rectangle;

/// 表盘外圈到屏幕边缘的留白
pub const BEZEL_INSET: i32 = 5;

/// 启动时确定的显示能力
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayCapabilities {
    pub full_color: bool,
    pub round: bool,
}

/// 表盘几何参数，启动后不再变化
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayGeometry {
    pub bounds: Rectangle,
    pub center: Point,
    pub radius: i32,
    pub round: bool,
}

impl DisplayGeometry {
    pub fn from_size(size: Size, round: bool) -> Self {
        let bounds = Rectangle::new(Point::zero(), size);
        let min_dim = size.width.min(size.height) as i32;
        Self {
            bounds,
            center: Point::new(size.width as i32 / 2, size.height as i32 / 2),
            radius: min_dim / 2 - BEZEL_INSET,
            round,
        }
    }
}
