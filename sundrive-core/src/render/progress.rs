//! 电量环与步数环
//!
//! 两者共用晨昏环内侧的同一条进度带：电量占上半圈（左 → 顶 → 右），
//! 步数占下半圈（顺时针填充，终点固定在左侧 270°）。

use embedded_graphics::{geometry::Point, pixelcolor::Rgb888};
use heapless::Vec;
use sundrive_common::*;

use crate::angle::Angle;
use crate::render::canvas::RadialCanvas;
use crate::render::layout::Ring;
use crate::render::palette::Palette;

/// 进度带的起点，9 点方向
pub const PROGRESS_ORIGIN: Angle = Angle::from_degrees(270);

const CHARGING_END: Angle = Angle::from_degrees(90);

/// 电量指示弧，超过 50% 时跨越接缝，拆成两段
pub fn battery_arc_spans(percent: u8) -> Vec<(Angle, Angle), 2> {
    let percent = percent.min(100) as i32;
    let end_degrees = 270 + percent * 180 / 100;

    let mut spans = Vec::new();
    if percent > 50 {
        let _ = spans.push((PROGRESS_ORIGIN, Angle::FULL));
        let _ = spans.push((Angle::ZERO, Angle::from_degrees(end_degrees - 360)));
    } else {
        let _ = spans.push((PROGRESS_ORIGIN, Angle::from_degrees(end_degrees)));
    }
    spans
}

pub fn battery_color(percent: u8, palette: &Palette) -> Rgb888 {
    match percent {
        50.. => palette.battery_high,
        21..=49 => palette.battery_medium,
        _ => palette.battery_low,
    }
}

pub fn draw_battery_ring<C: RadialCanvas>(
    canvas: &mut C,
    center: Point,
    ring: Ring,
    state: BatteryChargeState,
    palette: &Palette,
) -> SystemResult<()> {
    canvas.fill_radial(center, ring, Angle::ZERO, Angle::FULL, palette.battery_backdrop)?;

    if state.is_charging {
        canvas.fill_radial(center, ring, PROGRESS_ORIGIN, Angle::FULL, palette.charging)?;
        canvas.fill_radial(center, ring, Angle::ZERO, CHARGING_END, palette.charging)?;
    }

    let percent = state.clamped_percent();
    let color = battery_color(percent, palette);
    for (start, end) in battery_arc_spans(percent) {
        canvas.fill_radial(center, ring, start, end, color)?;
    }
    Ok(())
}

/// 步数弧 [270° - span, 270°]，目标为 0 或负数时不显示
pub fn step_arc_span(steps: u32, goal: i32) -> Option<(Angle, Angle)> {
    if goal <= 0 {
        return None;
    }
    let shown = steps.min(goal as u32) as i64;
    let span = (shown * Angle::HALF_TURN as i64 / goal as i64).min(Angle::HALF_TURN as i64) as i32;
    Some((Angle::from_raw(PROGRESS_ORIGIN.raw() - span), PROGRESS_ORIGIN))
}

pub fn draw_step_ring<C: RadialCanvas>(
    canvas: &mut C,
    center: Point,
    ring: Ring,
    steps: &StepTrackerState,
    palette: &Palette,
) -> SystemResult<()> {
    match step_arc_span(steps.current_steps, steps.goal) {
        Some((start, end)) => canvas.fill_radial(center, ring, start, end, palette.step_tracker),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::recording::RecordingCanvas;

    const RING: Ring = Ring::new(64, 10);
    const CENTER: Point = Point::new(90, 90);

    #[test]
    fn test_battery_above_half_is_split_at_seam() {
        let spans = battery_arc_spans(75);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0], (Angle::from_degrees(270), Angle::FULL));
        assert_eq!(spans[1], (Angle::ZERO, Angle::from_degrees(45)));
    }

    #[test]
    fn test_battery_at_half_ends_on_seam() {
        let spans = battery_arc_spans(50);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0], (Angle::from_degrees(270), Angle::FULL));
    }

    #[test]
    fn test_battery_just_over_half_splits() {
        let spans = battery_arc_spans(51);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0], (Angle::from_degrees(270), Angle::FULL));
        assert_eq!(spans[1], (Angle::ZERO, Angle::from_degrees(1)));
    }

    #[test]
    fn test_battery_below_half_is_single_arc() {
        let spans = battery_arc_spans(30);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0], (Angle::from_degrees(270), Angle::from_degrees(324)));
        assert_eq!(battery_arc_spans(0)[0].0, battery_arc_spans(0)[0].1);
    }

    #[test]
    fn test_battery_over_full_is_clamped() {
        assert_eq!(battery_arc_spans(130), battery_arc_spans(100));
        assert_eq!(battery_arc_spans(100)[1].1, Angle::from_degrees(90));
    }

    #[test]
    fn test_battery_color_tiers() {
        let p = Palette::COLOR;
        assert_eq!(battery_color(100, &p), p.battery_high);
        assert_eq!(battery_color(50, &p), p.battery_high);
        assert_eq!(battery_color(49, &p), p.battery_medium);
        assert_eq!(battery_color(21, &p), p.battery_medium);
        assert_eq!(battery_color(20, &p), p.battery_low);
        assert_eq!(battery_color(0, &p), p.battery_low);
    }

    #[test]
    fn test_battery_ring_draw_order() {
        let p = Palette::COLOR;
        let mut canvas = RecordingCanvas::new();
        draw_battery_ring(
            &mut canvas,
            CENTER,
            RING,
            BatteryChargeState::new(75, true),
            &p,
        )
        .unwrap();

        let fills = canvas.radials_on(RING);
        assert_eq!(
            fills,
            [
                (Angle::ZERO, Angle::FULL, p.battery_backdrop),
                (Angle::from_degrees(270), Angle::FULL, p.charging),
                (Angle::ZERO, Angle::from_degrees(90), p.charging),
                (Angle::from_degrees(270), Angle::FULL, p.battery_high),
                (Angle::ZERO, Angle::from_degrees(45), p.battery_high),
            ]
        );
    }

    #[test]
    fn test_not_charging_has_no_backdrop_tint() {
        let p = Palette::COLOR;
        let mut canvas = RecordingCanvas::new();
        draw_battery_ring(
            &mut canvas,
            CENTER,
            RING,
            BatteryChargeState::new(10, false),
            &p,
        )
        .unwrap();
        let fills = canvas.radials_on(RING);
        assert_eq!(fills.len(), 2);
        assert_eq!(fills[1].2, p.battery_low);
    }

    #[test]
    fn test_step_span_half_goal_is_quarter_turn() {
        let (start, end) = step_arc_span(4000, 8000).unwrap();
        assert_eq!(end, Angle::from_degrees(270));
        assert_eq!(start, Angle::from_degrees(180));
    }

    #[test]
    fn test_step_span_clamped_to_half_turn() {
        let (start, end) = step_arc_span(20_000, 8000).unwrap();
        assert_eq!(start, Angle::from_degrees(90));
        assert_eq!(end, Angle::from_degrees(270));
        assert_eq!(step_arc_span(0, 8000).map(|(s, e)| e - s), Some(Angle::ZERO));
    }

    #[test]
    fn test_step_ring_disabled_without_goal() {
        assert_eq!(step_arc_span(5000, 0), None);
        assert_eq!(step_arc_span(5000, -10), None);

        let mut canvas = RecordingCanvas::new();
        let steps = StepTrackerState {
            goal: 0,
            current_steps: 5000,
        };
        draw_step_ring(&mut canvas, CENTER, RING, &steps, &Palette::COLOR).unwrap();
        assert!(canvas.ops.is_empty());
    }
}
