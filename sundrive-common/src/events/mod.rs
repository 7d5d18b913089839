//! 表盘事件定义模块
//!
//! 本模块定义了驱动重绘的三类外部事件：
//! - 时间事件 (TimeUnit)
//! - 消息事件 (MessageEvent)
//! - 健康数据事件 (HealthEvent)

pub mod face;
pub use face::{FaceEvent, HealthEvent, MessageEvent, TimeUnit};
