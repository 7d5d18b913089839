//! 内置的 1bpp 图标

use embedded_graphics::geometry::Size;
use sundrive_core::render::{IconBitmap, IconSet};

#[rustfmt::skip]
static BATTERY: [u8; 16] = [
    0x7F, 0xF8,
    0x40, 0x08,
    0xC0, 0x08,
    0xC0, 0x08,
    0xC0, 0x08,
    0xC0, 0x08,
    0x40, 0x08,
    0x7F, 0xF8,
];

#[rustfmt::skip]
static STEPS: [u8; 20] = [
    0x30, 0x00,
    0x78, 0x00,
    0x79, 0x80,
    0x7B, 0xC0,
    0x33, 0xC0,
    0x03, 0xC0,
    0x61, 0x80,
    0x60, 0x00,
    0x01, 0x80,
    0x00, 0x00,
];

pub fn icons() -> IconSet {
    IconSet {
        battery: Some(IconBitmap::new(Size::new(14, 8), &BATTERY)),
        steps: Some(IconBitmap::new(Size::new(10, 10), &STEPS)),
    }
}
