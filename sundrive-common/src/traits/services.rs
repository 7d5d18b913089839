use enumset::EnumSet;

use crate::events::TimeUnit;
use crate::types::SystemResult;

/// 可订阅的系统服务
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    TickTimer(EnumSet<TimeUnit>),
    Health,
    AppMessage,
}

/// 订阅句柄，由表盘生命周期对象持有
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionHandle {
    pub service: Service,
    pub id: u16,
}

/// 事件服务注册接口
pub trait EventServices {
    fn subscribe(&mut self, service: Service) -> SystemResult<SubscriptionHandle>;

    fn unsubscribe(&mut self, handle: SubscriptionHandle);
}
