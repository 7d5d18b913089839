//! 晨昏环

use embedded_graphics::{geometry::Point, pixelcolor::Rgb888};
use sundrive_common::*;

use crate::angle::{Angle, minutes_to_angle};
use crate::render::canvas::RadialCanvas;
use crate::render::layout::Ring;
use crate::render::palette::Palette;

/// 绘制最外圈的晨昏环
///
/// 先铺满夜色，再由宽到窄依次绘制天文、航海、民用、白昼四个区间。
/// 每个区间在表盘上是跨过 0° 的一段，拆成 [begin, FULL) 与 [0, end) 两次填充。
pub fn draw_twilight_ring<C: RadialCanvas>(
    canvas: &mut C,
    center: Point,
    ring: Ring,
    boundaries: &TwilightBoundaries,
    palette: &Palette,
) -> SystemResult<()> {
    if !boundaries.valid {
        return Ok(());
    }

    canvas.fill_radial(center, ring, Angle::ZERO, Angle::FULL, palette.night)?;

    let colors: [Rgb888; 4] = [
        palette.astronomical,
        palette.nautical,
        palette.civil,
        palette.day,
    ];
    for ((begin, end), color) in boundaries.bands().into_iter().zip(colors) {
        let begin = minutes_to_angle(begin as i32);
        let end = minutes_to_angle(end as i32);
        canvas.fill_radial(center, ring, begin, Angle::FULL, color)?;
        canvas.fill_radial(center, ring, Angle::ZERO, end, color)?;
    }

    Ok(())
}
