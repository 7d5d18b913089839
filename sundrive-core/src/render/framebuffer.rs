//! 渲染缓冲区模块
//! 提供内存中的 RGB 帧缓冲区，供模拟器和测试使用

use alloc::vec;
use alloc::vec::Vec;
use core::convert::Infallible;

use embedded_graphics::{pixelcolor::Rgb888, prelude::*};

/// 渲染缓冲区
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    buffer: Vec<Rgb888>,
}

impl Framebuffer {
    /// 创建新的渲染缓冲区，默认黑色
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            buffer: vec![Rgb888::BLACK; size],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// 读取像素，越界返回 None
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb888> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.buffer
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// 清屏
    pub fn fill(&mut self, color: Rgb888) {
        self.buffer.fill(color);
    }

    /// 导出为二进制 PPM (P6)
    pub fn to_ppm(&self) -> Vec<u8> {
        let header = alloc::format!("P6\n{} {}\n255\n", self.width, self.height);
        let mut out = Vec::with_capacity(header.len() + self.buffer.len() * 3);
        out.extend_from_slice(header.as_bytes());
        for color in &self.buffer {
            out.extend_from_slice(&[color.r(), color.g(), color.b()]);
        }
        out
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for Framebuffer {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            // 越界像素直接丢弃
            if point.x < 0 || point.y < 0 {
                continue;
            }
            let (x, y) = (point.x as u32, point.y as u32);
            if x < self.width && y < self.height {
                self.buffer[y as usize * self.width as usize + x as usize] = color;
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

    #[test]
    fn test_draw_and_read_back() {
        let mut fb = Framebuffer::new(8, 4);
        Rectangle::new(Point::new(1, 1), Size::new(2, 2))
            .into_styled(PrimitiveStyle::with_fill(Rgb888::WHITE))
            .draw(&mut fb)
            .unwrap();

        assert_eq!(fb.pixel(0, 0), Some(Rgb888::BLACK));
        assert_eq!(fb.pixel(1, 1), Some(Rgb888::WHITE));
        assert_eq!(fb.pixel(2, 2), Some(Rgb888::WHITE));
        assert_eq!(fb.pixel(8, 0), None);
    }

    #[test]
    fn test_out_of_bounds_pixels_are_ignored() {
        let mut fb = Framebuffer::new(2, 2);
        fb.draw_iter([
            Pixel(Point::new(-1, 0), Rgb888::WHITE),
            Pixel(Point::new(5, 5), Rgb888::WHITE),
        ])
        .unwrap();
        assert!((0..2).all(|y| (0..2).all(|x| fb.pixel(x, y) == Some(Rgb888::BLACK))));
    }

    #[test]
    fn test_ppm_header() {
        let fb = Framebuffer::new(3, 2);
        let ppm = fb.to_ppm();
        assert!(ppm.starts_with(b"P6\n3 2\n255\n"));
        assert_eq!(ppm.len(), b"P6\n3 2\n255\n".len() + 3 * 2 * 3);
    }
}
