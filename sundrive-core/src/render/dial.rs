//! 刻度与指针

use embedded_graphics::{geometry::Point, pixelcolor::Rgb888};
use sundrive_common::*;

use crate::angle::{Angle, angle_to_ring_minutes, minute_hand_angle, minutes_to_angle};
use crate::period::classify;
use crate::render::canvas::{RadialCanvas, TextKind};
use crate::render::layout::*;
use crate::render::palette::Palette;

/// 主刻度上的小时数字，按刻度序号索引
fn hour_label(index: i32) -> Option<&'static str> {
    match index {
        0 => Some("12"),
        6 => Some("18"),
        12 => Some("0"),
        18 => Some("6"),
        _ => None,
    }
}

/// 描边偏移，黑色描边后再绘制白色正文
const OUTLINE_OFFSETS: [Point; 4] = [
    Point::new(1, 1),
    Point::new(-1, -1),
    Point::new(1, -1),
    Point::new(-1, 1),
];

/// 24 个刻度，每 6 个为主刻度
pub fn draw_hour_marks<C: RadialCanvas>(
    canvas: &mut C,
    center: Point,
    radius: i32,
    show_numbers: bool,
    palette: &Palette,
) -> SystemResult<()> {
    for i in 0..TICK_COUNT {
        let angle = Angle::from_raw(i * Angle::FULL_TURN / TICK_COUNT);
        let major = i % 6 == 0;

        let label = if show_numbers { hour_label(i) } else { None };

        if let Some(label) = label {
            let pos = angle.point_at(center, radius - LABEL_INSET);
            for offset in OUTLINE_OFFSETS {
                canvas.draw_text(label, pos + offset, TextKind::HourLabel, palette.label_outline)?;
            }
            canvas.draw_text(label, pos, TextKind::HourLabel, palette.marks)?;
        } else {
            let inner = if major {
                radius - MAJOR_TICK_LENGTH
            } else {
                radius - MINOR_TICK_LENGTH
            };
            canvas.draw_line(
                angle.point_at(center, radius),
                angle.point_at(center, inner),
                TICK_WIDTH,
                palette.marks,
            )?;
        }
    }
    Ok(())
}

/// 指针颜色
///
/// 全彩屏使用固定颜色；单色屏按指针所压的晨昏带选择对比色。
pub fn hand_colors(
    minute_of_day: i32,
    minute: i32,
    boundaries: &TwilightBoundaries,
    palette: &Palette,
) -> (Rgb888, Rgb888) {
    if !palette.contrast_hands {
        return (palette.hour_hand, palette.minute_hand);
    }

    let hour_period = classify(minute_of_day, boundaries);
    // 分针指向 60 分钟刻度，但颜色取决于它在 24 小时环上压住的位置
    let under_minute_hand = angle_to_ring_minutes(minute_hand_angle(minute));
    let minute_period = classify(under_minute_hand, boundaries);

    (
        palette.contrast_for(hour_period),
        palette.contrast_for(minute_period),
    )
}

fn draw_hand<C: RadialCanvas>(
    canvas: &mut C,
    center: Point,
    angle: Angle,
    inner_radius: i32,
    outer_radius: i32,
    width: u32,
    color: Rgb888,
) -> SystemResult<()> {
    canvas.draw_line(
        angle.point_at(center, inner_radius),
        angle.point_at(center, outer_radius),
        width,
        color,
    )
}

/// 先画分针，时针压在上面。两根指针都只覆盖晨昏环
pub fn draw_hands<C: RadialCanvas>(
    canvas: &mut C,
    center: Point,
    radius: i32,
    hour: i32,
    minute: i32,
    boundaries: &TwilightBoundaries,
    palette: &Palette,
) -> SystemResult<()> {
    let minute_of_day = hour * 60 + minute;
    let (hour_color, minute_color) = hand_colors(minute_of_day, minute, boundaries, palette);

    draw_hand(
        canvas,
        center,
        minute_hand_angle(minute),
        radius - HAND_INSET,
        radius - MINUTE_HAND_LENGTH,
        MINUTE_HAND_WIDTH,
        minute_color,
    )?;
    draw_hand(
        canvas,
        center,
        minutes_to_angle(minute_of_day),
        radius - HAND_INSET,
        radius,
        HOUR_HAND_WIDTH,
        hour_color,
    )
}
