//! 单色图标

use embedded_graphics::geometry::Size;

/// 1bpp 图标位图，每行按字节对齐，高位在左
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconBitmap {
    pub size: Size,
    pub data: &'static [u8],
}

impl IconBitmap {
    pub const fn new(size: Size, data: &'static [u8]) -> Self {
        Self { size, data }
    }

    fn row_bytes(&self) -> usize {
        (self.size.width as usize).div_ceil(8)
    }

    /// 位图数据长度与尺寸是否匹配
    pub fn is_well_formed(&self) -> bool {
        self.data.len() >= self.row_bytes() * self.size.height as usize
    }

    /// (x, y) 处是否为前景像素，越界时返回 false
    pub fn is_set(&self, x: u32, y: u32) -> bool {
        if x >= self.size.width || y >= self.size.height {
            return false;
        }
        let index = y as usize * self.row_bytes() + (x / 8) as usize;
        match self.data.get(index) {
            Some(byte) => byte & (0x80 >> (x % 8)) != 0,
            None => false,
        }
    }
}

/// 表盘用到的图标，资源缺失时为 None
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IconSet {
    pub battery: Option<IconBitmap>,
    pub steps: Option<IconBitmap>,
}
