use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use sundrive_common::*;
use sundrive_core::protocol::encode_outbound;

/// 出站消息写到标准输出，发送结果作为事件回送给表盘
pub struct StdoutOutbox {
    events: FaceEventSender<'static, CriticalSectionRawMutex>,
}

impl StdoutOutbox {
    pub fn new(events: FaceEventSender<'static, CriticalSectionRawMutex>) -> Self {
        Self { events }
    }

    fn notify(&self, event: MessageEvent) {
        if self.events.try_send(FaceEvent::Message(event)).is_err() {
            warn!("Event queue full, outbox result lost");
        }
    }
}

impl Outbox for StdoutOutbox {
    fn send(&mut self, message: &OutboundMessage) -> SystemResult<()> {
        match encode_outbound(message) {
            Ok(bytes) => {
                println!("{}", String::from_utf8_lossy(&bytes));
                self.notify(MessageEvent::OutboxSent);
                Ok(())
            }
            Err(e) => {
                self.notify(MessageEvent::OutboxFailed(TransportError::SendFailed));
                Err(e)
            }
        }
    }
}
