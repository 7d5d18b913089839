use crate::types::{OutboundMessage, SystemResult};

/// 出站消息通道
pub trait Outbox {
    /// 发送一条消息，失败不重试
    fn send(&mut self, message: &OutboundMessage) -> SystemResult<()>;
}
