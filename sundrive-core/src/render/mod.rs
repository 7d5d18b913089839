//! 渲染引擎模块
//! 每帧根据当前时间与设置完整重绘表盘，不保留增量状态

pub mod canvas;
pub mod date;
pub mod dial;
pub mod framebuffer;
pub mod icon;
pub mod layout;
pub mod palette;
pub mod progress;
pub mod twilight;

#[cfg(test)]
pub(crate) mod recording;

pub use canvas::{GraphicsCanvas, RadialCanvas, TextKind};
pub use framebuffer::Framebuffer;
pub use icon::{IconBitmap, IconSet};
pub use layout::{Ring, RingLayout};
pub use palette::Palette;

use embedded_graphics::{geometry::Point, pixelcolor::Rgb888};
use jiff::civil::DateTime;
use sundrive_common::*;

use crate::angle::Angle;
use layout::ICON_INSET;

/// 渲染一帧所需的全部输入
#[derive(Debug, Clone, Copy)]
pub struct FrameInput<'a> {
    pub settings: &'a FaceSettings,
    pub battery: BatteryChargeState,
    pub now: DateTime,
}

/// 表盘渲染器
pub struct FaceRenderer {
    geometry: DisplayGeometry,
    palette: Palette,
    rings: RingLayout,
    icons: IconSet,
}

impl FaceRenderer {
    pub fn new(geometry: DisplayGeometry, palette: Palette, icons: IconSet) -> Self {
        debug!(
            "Face geometry: center=({},{}), radius={}, round={}",
            geometry.center.x, geometry.center.y, geometry.radius, geometry.round
        );
        Self {
            geometry,
            palette,
            rings: RingLayout::for_radius(geometry.radius),
            icons,
        }
    }

    pub fn geometry(&self) -> &DisplayGeometry {
        &self.geometry
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// 由后向前绘制整帧，窄环压在宽环之上
    pub fn render<C: RadialCanvas>(&self, canvas: &mut C, frame: &FrameInput<'_>) -> SystemResult<()> {
        let center = self.geometry.center;
        let radius = self.geometry.radius;
        let palette = &self.palette;
        let rings = &self.rings;
        let settings = frame.settings;

        canvas.fill_background(palette.background)?;

        twilight::draw_twilight_ring(canvas, center, rings.twilight, &settings.twilight, palette)?;
        self.fill_full(canvas, rings.outer_separator, palette.separator)?;
        self.fill_full(canvas, rings.progress_backdrop, palette.separator)?;

        progress::draw_battery_ring(canvas, center, rings.battery, frame.battery, palette)?;
        self.fill_full(canvas, rings.inner_separator, palette.separator)?;
        progress::draw_step_ring(canvas, center, rings.steps, &settings.steps, palette)?;

        self.draw_icons(canvas, settings)?;

        dial::draw_hour_marks(canvas, center, radius, settings.show_hour_numbers, palette)?;
        dial::draw_hands(
            canvas,
            center,
            radius,
            frame.now.hour() as i32,
            frame.now.minute() as i32,
            &settings.twilight,
            palette,
        )?;

        let text = date::format_date(frame.now, &settings.date_config);
        canvas.draw_text(&text, center, TextKind::Date, palette.date_text)
    }

    fn fill_full<C: RadialCanvas>(&self, canvas: &mut C, ring: Ring, color: Rgb888) -> SystemResult<()> {
        canvas.fill_radial(self.geometry.center, ring, Angle::ZERO, Angle::FULL, color)
    }

    /// 电量图标在中心上方，步数图标在下方；缺失的图标直接跳过
    fn draw_icons<C: RadialCanvas>(&self, canvas: &mut C, settings: &FaceSettings) -> SystemResult<()> {
        let center = self.geometry.center;
        let offset = self.geometry.radius - ICON_INSET;

        if let Some(icon) = &self.icons.battery {
            canvas.draw_icon(icon, center - Point::new(0, offset), self.palette.marks)?;
        }
        if settings.steps.is_enabled() {
            if let Some(icon) = &self.icons.steps {
                canvas.draw_icon(icon, center + Point::new(0, offset), self.palette.marks)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::geometry::Size;
    use embedded_graphics::prelude::RgbColor;
    use jiff::civil::date;
    use recording::{DrawOp, RecordingCanvas};

    static DOT: [u8; 2] = [0xC0, 0xC0];

    fn icons() -> IconSet {
        IconSet {
            battery: Some(IconBitmap::new(Size::new(2, 2), &DOT)),
            steps: Some(IconBitmap::new(Size::new(2, 2), &DOT)),
        }
    }

    fn renderer(palette: Palette, icons: IconSet) -> FaceRenderer {
        FaceRenderer::new(DisplayGeometry::from_size(Size::new(180, 180), true), palette, icons)
    }

    fn settings() -> FaceSettings {
        FaceSettings {
            twilight: TwilightBoundaries::new(280, 313, 345, 371, 1092, 1118, 1151, 1183),
            steps: StepTrackerState {
                goal: 8000,
                current_steps: 4000,
            },
            ..FaceSettings::default()
        }
    }

    fn frame(settings: &FaceSettings) -> FrameInput<'_> {
        FrameInput {
            settings,
            battery: BatteryChargeState::new(75, false),
            now: date(2025, 3, 17).at(15, 40, 0, 0),
        }
    }

    #[test]
    fn test_draw_order() {
        let renderer = renderer(Palette::COLOR, icons());
        let settings = settings();
        let mut canvas = RecordingCanvas::new();
        renderer.render(&mut canvas, &frame(&settings)).unwrap();

        let rings = RingLayout::for_radius(85);
        let ring_sequence: alloc::vec::Vec<Ring> = canvas
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Radial { ring, .. } => Some(*ring),
                _ => None,
            })
            .collect();

        // 背景 → 晨昏环(9) → 外分隔线 → 进度带底色 → 电量(3) → 内分隔线 → 步数(1)
        assert!(matches!(canvas.ops[0], DrawOp::Background(_)));
        assert_eq!(ring_sequence.len(), 9 + 1 + 1 + 3 + 1 + 1);
        assert!(ring_sequence[..9].iter().all(|r| *r == rings.twilight));
        assert_eq!(ring_sequence[9], rings.outer_separator);
        assert_eq!(ring_sequence[10], rings.progress_backdrop);
        assert!(ring_sequence[11..14].iter().all(|r| *r == rings.battery));
        assert_eq!(ring_sequence[14], rings.inner_separator);
        assert_eq!(ring_sequence[15], rings.steps);

        // 日期文本最后绘制
        match canvas.ops.last() {
            Some(DrawOp::Text { text, center, .. }) => {
                assert_eq!(text, "Mo 17/03");
                assert_eq!(*center, Point::new(90, 90));
            }
            other => panic!("unexpected last op: {:?}", other),
        }

        // 图标在刻度与指针之前
        let first_icon = canvas.ops.iter().position(|op| matches!(op, DrawOp::Icon { .. }));
        let first_line = canvas.ops.iter().position(|op| matches!(op, DrawOp::Line { .. }));
        assert!(first_icon < first_line);
    }

    #[test]
    fn test_icons_positions() {
        let renderer = renderer(Palette::COLOR, icons());
        let settings = settings();
        let mut canvas = RecordingCanvas::new();
        renderer.render(&mut canvas, &frame(&settings)).unwrap();

        assert_eq!(canvas.icons(), [Point::new(90, 47), Point::new(90, 133)]);
    }

    #[test]
    fn test_step_icon_and_ring_hidden_without_goal() {
        let renderer = renderer(Palette::COLOR, icons());
        let mut settings = settings();
        settings.steps.goal = 0;
        let mut canvas = RecordingCanvas::new();
        renderer.render(&mut canvas, &frame(&settings)).unwrap();

        assert_eq!(canvas.icons(), [Point::new(90, 47)]);
        // 步数环与电量环共用同一环带，这里只剩电量的三次填充
        assert_eq!(canvas.radials_on(RingLayout::for_radius(85).steps).len(), 3);
    }

    #[test]
    fn test_missing_icons_are_skipped() {
        let renderer = renderer(Palette::COLOR, IconSet::default());
        let settings = settings();
        let mut canvas = RecordingCanvas::new();
        renderer.render(&mut canvas, &frame(&settings)).unwrap();
        assert!(canvas.icons().is_empty());
    }

    #[test]
    fn test_invalid_twilight_skips_ring() {
        let renderer = renderer(Palette::COLOR, icons());
        let settings = FaceSettings::default();
        let mut canvas = RecordingCanvas::new();
        renderer.render(&mut canvas, &frame(&settings)).unwrap();

        let twilight = RingLayout::for_radius(85).twilight;
        assert!(canvas.radials_on(twilight).is_empty());
    }

    #[test]
    fn test_renders_into_framebuffer() {
        let renderer = FaceRenderer::new(
            DisplayGeometry::from_size(Size::new(144, 168), false),
            Palette::MONOCHROME,
            icons(),
        );
        let settings = settings();
        let mut fb = Framebuffer::new(144, 168);
        let mut canvas = GraphicsCanvas::new(&mut fb);
        renderer.render(&mut canvas, &frame(&settings)).unwrap();

        // radius = 67，中心 (72, 84)；顶部是白昼，底部是夜晚
        assert_eq!(fb.pixel(78, 84 - 60), Some(Rgb888::WHITE));
        assert_eq!(fb.pixel(66, 84 + 60), Some(Rgb888::BLACK));
        // 中心有日期文字
        let lit = (60..85)
            .flat_map(|x| (78..91).map(move |y| (x, y)))
            .filter(|&(x, y)| fb.pixel(x, y) == Some(Rgb888::WHITE))
            .count();
        assert!(lit > 0);
    }
}
