use enumset::{EnumSet, EnumSetType};

use crate::types::{InboundMessage, TransportError};

#[derive(Debug, EnumSetType)]
pub enum TimeUnit {
    Minute,
    Day,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageEvent {
    Received(InboundMessage),
    Dropped(TransportError),
    OutboxSent,
    OutboxFailed(TransportError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthEvent {
    MovementUpdate,
    SleepUpdate,
    SignificantUpdate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceEvent {
    Tick(EnumSet<TimeUnit>),
    Message(MessageEvent),
    Health(HealthEvent),
    /// 窗口退出，事件循环结束
    Exit,
}
