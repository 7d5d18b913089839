//! 绘图上下文

use embedded_graphics::{
    geometry::{Angle as GfxAngle, Point, Size},
    mono_font::{
        MonoTextStyle,
        ascii::{FONT_7X14, FONT_7X14_BOLD},
    },
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{Arc, Circle, Line, PrimitiveStyle},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};
use sundrive_common::*;

use crate::angle::Angle;
use crate::render::icon::IconBitmap;
use crate::render::layout::Ring;

/// 文本用途，决定字体
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    HourLabel,
    Date,
}

/// 表盘渲染所需的最小绘图接口
///
/// 角度均以 12 点方向为 0，顺时针增大。
pub trait RadialCanvas {
    fn fill_background(&mut self, color: Rgb888) -> SystemResult<()>;

    /// 填充环带上 [start, end) 的扇区
    ///
    /// 不能跨越 0° 接缝：调用方需保证 0 <= start <= end <= FULL，
    /// 跨越接缝的弧段必须拆成两次调用。start >= end 时不绘制。
    fn fill_radial(
        &mut self,
        center: Point,
        ring: Ring,
        start: Angle,
        end: Angle,
        color: Rgb888,
    ) -> SystemResult<()>;

    fn draw_line(&mut self, from: Point, to: Point, width: u32, color: Rgb888) -> SystemResult<()>;

    /// 以 center 为中心绘制单行文本
    fn draw_text(
        &mut self,
        text: &str,
        center: Point,
        kind: TextKind,
        color: Rgb888,
    ) -> SystemResult<()>;

    /// 以 center 为中心绘制图标，只绘制前景像素
    fn draw_icon(&mut self, icon: &IconBitmap, center: Point, color: Rgb888) -> SystemResult<()>;
}

/// 基于 embedded-graphics 的绘图上下文
pub struct GraphicsCanvas<'a, D> {
    target: &'a mut D,
}

impl<'a, D> GraphicsCanvas<'a, D>
where
    D: DrawTarget<Color = Rgb888>,
{
    pub fn new(target: &'a mut D) -> Self {
        Self { target }
    }
}

fn render_failed<E>(_: E) -> SystemError {
    SystemError::ServiceError(ServiceError::RenderFailed)
}

/// 表盘角度转换为 embedded-graphics 角度（0 = 3 点方向）
fn to_gfx_angle(angle: Angle) -> GfxAngle {
    GfxAngle::from_degrees(angle.degrees() - 90.0)
}

impl<D> RadialCanvas for GraphicsCanvas<'_, D>
where
    D: DrawTarget<Color = Rgb888>,
{
    fn fill_background(&mut self, color: Rgb888) -> SystemResult<()> {
        self.target.clear(color).map_err(render_failed)
    }

    fn fill_radial(
        &mut self,
        center: Point,
        ring: Ring,
        start: Angle,
        end: Angle,
        color: Rgb888,
    ) -> SystemResult<()> {
        if end.raw() <= start.raw() || ring.width <= 0 {
            return Ok(());
        }

        // 描边以中线为准，直径取外径减去宽度
        let diameter = (2 * ring.outer_radius - ring.width).max(1) as u32;
        let style = PrimitiveStyle::with_stroke(color, ring.width as u32);

        if end.raw() - start.raw() >= Angle::FULL_TURN {
            Circle::with_center(center, diameter)
                .into_styled(style)
                .draw(self.target)
                .map_err(render_failed)
        } else {
            let sweep = GfxAngle::from_degrees((end - start).degrees());
            Arc::with_center(center, diameter, to_gfx_angle(start), sweep)
                .into_styled(style)
                .draw(self.target)
                .map_err(render_failed)
        }
    }

    fn draw_line(&mut self, from: Point, to: Point, width: u32, color: Rgb888) -> SystemResult<()> {
        Line::new(from, to)
            .into_styled(PrimitiveStyle::with_stroke(color, width))
            .draw(self.target)
            .map_err(render_failed)
    }

    fn draw_text(
        &mut self,
        text: &str,
        center: Point,
        kind: TextKind,
        color: Rgb888,
    ) -> SystemResult<()> {
        let font = match kind {
            TextKind::HourLabel => &FONT_7X14_BOLD,
            TextKind::Date => &FONT_7X14,
        };
        let text_style = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Middle)
            .build();

        Text::with_text_style(text, center, MonoTextStyle::new(font, color), text_style)
            .draw(self.target)
            .map(|_| ())
            .map_err(render_failed)
    }

    fn draw_icon(&mut self, icon: &IconBitmap, center: Point, color: Rgb888) -> SystemResult<()> {
        if !icon.is_well_formed() {
            warn!(
                "Skipping malformed icon {}x{}",
                icon.size.width, icon.size.height
            );
            return Ok(());
        }

        let Size { width, height } = icon.size;
        let top_left = center - Point::new(width as i32 / 2, height as i32 / 2);
        let pixels = (0..height)
            .flat_map(move |y| (0..width).map(move |x| (x, y)))
            .filter(|&(x, y)| icon.is_set(x, y))
            .map(|(x, y)| Pixel(top_left + Point::new(x as i32, y as i32), color));

        self.target.draw_iter(pixels).map_err(render_failed)
    }
}
