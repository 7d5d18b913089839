use embassy_sync::channel::{Channel, Receiver, Sender};

use crate::events::FaceEvent;

/// 事件队列深度
pub const EVENT_QUEUE_DEPTH: usize = 16;

/// 表盘事件通道
pub type FaceChannel<M> = Channel<M, FaceEvent, EVENT_QUEUE_DEPTH>;

/// 表盘事件接收者
pub type FaceEventReceiver<'a, M> = Receiver<'a, M, FaceEvent, EVENT_QUEUE_DEPTH>;

/// 表盘事件发送者
pub type FaceEventSender<'a, M> = Sender<'a, M, FaceEvent, EVENT_QUEUE_DEPTH>;
