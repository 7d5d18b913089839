//! 记录绘图调用的测试画布

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use embedded_graphics::{geometry::Point, pixelcolor::Rgb888};
use sundrive_common::SystemResult;

use crate::angle::Angle;
use crate::render::canvas::{RadialCanvas, TextKind};
use crate::render::icon::IconBitmap;
use crate::render::layout::Ring;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    Background(Rgb888),
    Radial {
        ring: Ring,
        start: Angle,
        end: Angle,
        color: Rgb888,
    },
    Line {
        from: Point,
        to: Point,
        width: u32,
        color: Rgb888,
    },
    Text {
        text: String,
        center: Point,
        kind: TextKind,
        color: Rgb888,
    },
    Icon {
        center: Point,
        color: Rgb888,
    },
}

#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn radials_on(&self, ring: Ring) -> Vec<(Angle, Angle, Rgb888)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Radial {
                    ring: r,
                    start,
                    end,
                    color,
                } if *r == ring => Some((*start, *end, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> Vec<(Point, Point, u32, Rgb888)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Line {
                    from,
                    to,
                    width,
                    color,
                } => Some((*from, *to, *width, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<(String, Point, Rgb888)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text {
                    text,
                    center,
                    color,
                    ..
                } => Some((text.clone(), *center, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn icons(&self) -> Vec<Point> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Icon { center, .. } => Some(*center),
                _ => None,
            })
            .collect()
    }
}

impl RadialCanvas for RecordingCanvas {
    fn fill_background(&mut self, color: Rgb888) -> SystemResult<()> {
        self.ops.push(DrawOp::Background(color));
        Ok(())
    }

    fn fill_radial(
        &mut self,
        _center: Point,
        ring: Ring,
        start: Angle,
        end: Angle,
        color: Rgb888,
    ) -> SystemResult<()> {
        assert!(
            start.raw() >= 0 && end.raw() <= Angle::FULL_TURN,
            "radial fill crosses the seam: {:?}..{:?}",
            start,
            end
        );
        self.ops.push(DrawOp::Radial {
            ring,
            start,
            end,
            color,
        });
        Ok(())
    }

    fn draw_line(&mut self, from: Point, to: Point, width: u32, color: Rgb888) -> SystemResult<()> {
        self.ops.push(DrawOp::Line {
            from,
            to,
            width,
            color,
        });
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        center: Point,
        kind: TextKind,
        color: Rgb888,
    ) -> SystemResult<()> {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            center,
            kind,
            color,
        });
        Ok(())
    }

    fn draw_icon(&mut self, _icon: &IconBitmap, center: Point, color: Rgb888) -> SystemResult<()> {
        self.ops.push(DrawOp::Icon { center, color });
        Ok(())
    }
}
