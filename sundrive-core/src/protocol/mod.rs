//! 与伴侣应用之间的消息处理

pub mod codec;

pub use codec::{decode_inbound, encode_outbound};

use sundrive_common::*;

use crate::store::SettingsStore;

/// 伴侣应用的连接状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    AwaitingReady,
    Ready,
}

pub struct ProtocolHandler {
    link: LinkState,
}

impl Default for ProtocolHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ProtocolHandler {
    pub fn new() -> Self {
        Self {
            link: LinkState::AwaitingReady,
        }
    }

    pub fn link_state(&self) -> LinkState {
        self.link
    }

    /// 处理一条消息事件，返回是否需要重绘
    pub fn handle_event<S, C, O, W>(
        &mut self,
        event: MessageEvent,
        store: &mut SettingsStore<S>,
        steps: &mut C,
        outbox: &mut O,
        clock: &W,
    ) -> bool
    where
        S: BlobStorage,
        C: StepCounter,
        O: Outbox,
        W: WallClock,
    {
        match event {
            MessageEvent::Received(message) => {
                self.handle_inbound(&message, store, steps, outbox, clock)
            }
            MessageEvent::Dropped(reason) => {
                error!("Message dropped: {:?}", reason);
                false
            }
            MessageEvent::OutboxFailed(reason) => {
                error!("Outbox send failed: {:?}", reason);
                false
            }
            MessageEvent::OutboxSent => {
                debug!("Outbox send success");
                false
            }
        }
    }

    /// 应用一条入站消息
    ///
    /// 握手消息只回复时区，不处理其他字段。
    pub fn handle_inbound<S, C, O, W>(
        &mut self,
        message: &InboundMessage,
        store: &mut SettingsStore<S>,
        steps: &mut C,
        outbox: &mut O,
        clock: &W,
    ) -> bool
    where
        S: BlobStorage,
        C: StepCounter,
        O: Outbox,
        W: WallClock,
    {
        debug!("Message received from phone");

        if message.is_handshake() {
            self.link = LinkState::Ready;
            self.send_timezone(outbox, clock);
            return false;
        }

        let mut dirty = store.apply_date_config(message.date_config_update());

        if let Some(goal) = message.step_goal {
            dirty |= store.apply_step_goal(goal, steps);
        }

        if let Some(show) = message.hour_numbers() {
            dirty |= store.apply_hour_numbers(show);
        }

        match message.twilight() {
            Some(boundaries) => dirty |= store.apply_twilight(boundaries),
            None if message.has_sun_times() => {
                warn!("Incomplete twilight update ignored");
            }
            None => {}
        }

        dirty
    }

    fn send_timezone<O: Outbox, W: WallClock>(&mut self, outbox: &mut O, clock: &W) {
        let timezone = clock.timezone_name();
        debug!("Sending timezone: {}", timezone.as_str());

        if let Err(e) = outbox.send(&OutboundMessage::timezone(timezone)) {
            error!("Error sending timezone: {:?}", e);
        }
    }
}
