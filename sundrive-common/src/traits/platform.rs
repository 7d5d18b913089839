use embedded_graphics::geometry::Size;

use crate::traits::{BatteryMonitor, BlobStorage, EventServices, Outbox, StepCounter, WallClock};
use crate::types::DisplayCapabilities;

/// 平台提供的外部协作者
pub trait Platform: Sized {
    type Storage: BlobStorage;
    type Battery: BatteryMonitor;
    type Steps: StepCounter;
    type Clock: WallClock;
    type Outbox: Outbox;
    type Services: EventServices;
}

/// 平台初始化后交给表盘的上下文
pub struct PlatformContext<P: Platform> {
    pub storage: P::Storage,
    pub battery: P::Battery,
    pub steps: P::Steps,
    pub clock: P::Clock,
    pub outbox: P::Outbox,
    pub services: P::Services,
    pub capabilities: DisplayCapabilities,
    pub display_size: Size,
}
