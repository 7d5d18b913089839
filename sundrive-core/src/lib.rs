#![no_std]

extern crate alloc;

pub mod angle;
pub mod app;
pub mod period;
pub mod protocol;
pub mod render;
pub mod runtime;
pub mod store;

pub use app::WatchFace;
pub use runtime::face_main;
