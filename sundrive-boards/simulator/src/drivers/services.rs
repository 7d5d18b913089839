use core::sync::atomic::{AtomicBool, Ordering};

use sundrive_common::*;

/// 后台事件源的开关，订阅时打开，退订时关闭
#[derive(Debug, Default)]
pub struct ServiceGates {
    tick: AtomicBool,
    health: AtomicBool,
    app_message: AtomicBool,
}

impl ServiceGates {
    pub const fn new() -> Self {
        Self {
            tick: AtomicBool::new(false),
            health: AtomicBool::new(false),
            app_message: AtomicBool::new(false),
        }
    }

    fn gate(&self, service: Service) -> &AtomicBool {
        match service {
            Service::TickTimer(_) => &self.tick,
            Service::Health => &self.health,
            Service::AppMessage => &self.app_message,
        }
    }

    pub fn is_open(&self, service: Service) -> bool {
        self.gate(service).load(Ordering::Acquire)
    }

    fn set(&self, service: Service, open: bool) {
        self.gate(service).store(open, Ordering::Release);
    }
}

/// 模拟器的服务注册表，事件源由后台任务产生，任务只在对应开关打开时投递事件
pub struct SimulatorServices {
    next_id: u16,
    active: Vec<SubscriptionHandle>,
    health_available: bool,
    gates: &'static ServiceGates,
}

impl SimulatorServices {
    pub fn new(health_available: bool, gates: &'static ServiceGates) -> Self {
        Self {
            next_id: 0,
            active: Vec::new(),
            health_available,
            gates,
        }
    }

    pub fn active(&self) -> &[SubscriptionHandle] {
        &self.active
    }
}

impl EventServices for SimulatorServices {
    fn subscribe(&mut self, service: Service) -> SystemResult<SubscriptionHandle> {
        if service == Service::Health && !self.health_available {
            return Err(SystemError::ServiceError(ServiceError::Unavailable));
        }
        self.next_id = self.next_id.wrapping_add(1);
        let handle = SubscriptionHandle {
            service,
            id: self.next_id,
        };
        self.active.push(handle);
        self.gates.set(service, true);
        info!("Subscribed to {:?} (id {})", service, handle.id);
        Ok(handle)
    }

    fn unsubscribe(&mut self, handle: SubscriptionHandle) {
        self.active.retain(|h| h.id != handle.id);
        // 同类服务全部退订后才关闭事件源
        let still_used = self
            .active
            .iter()
            .any(|h| core::mem::discriminant(&h.service) == core::mem::discriminant(&handle.service));
        if !still_used {
            self.gates.set(handle.service, false);
        }
        info!("Unsubscribed from {:?} (id {})", handle.service, handle.id);
    }
}
