//! 表盘生命周期
//!
//! WatchFace 持有全部状态与平台协作者，事件处理只标记脏区，重绘由事件循环合并执行。

use enumset::EnumSet;
use sundrive_common::*;

use crate::protocol::ProtocolHandler;
use crate::render::{FaceRenderer, FrameInput, IconSet, Palette, RadialCanvas};
use crate::store::SettingsStore;

const MAX_SUBSCRIPTIONS: usize = 3;

pub struct WatchFace<P: Platform> {
    store: SettingsStore<P::Storage>,
    protocol: ProtocolHandler,
    renderer: FaceRenderer,
    battery: P::Battery,
    steps: P::Steps,
    clock: P::Clock,
    outbox: P::Outbox,
    services: P::Services,
    subscriptions: heapless::Vec<SubscriptionHandle, MAX_SUBSCRIPTIONS>,
    dirty: bool,
    running: bool,
}

impl<P: Platform> WatchFace<P> {
    pub fn new(ctx: PlatformContext<P>, icons: IconSet) -> Self {
        let geometry = DisplayGeometry::from_size(ctx.display_size, ctx.capabilities.round);
        let palette = Palette::for_capabilities(&ctx.capabilities);

        Self {
            store: SettingsStore::new(ctx.storage),
            protocol: ProtocolHandler::new(),
            renderer: FaceRenderer::new(geometry, palette, icons),
            battery: ctx.battery,
            steps: ctx.steps,
            clock: ctx.clock,
            outbox: ctx.outbox,
            services: ctx.services,
            subscriptions: heapless::Vec::new(),
            dirty: false,
            running: false,
        }
    }

    /// 加载设置并订阅系统服务
    pub fn start(&mut self) {
        if self.running {
            warn!("Watch face already started");
            return;
        }
        info!("Starting watch face");

        self.store.load();

        match self.services.subscribe(Service::Health) {
            Ok(handle) => {
                self.keep(handle);
                self.store.refresh_steps(&mut self.steps);
            }
            Err(e) => error!("Health not available: {:?}", e),
        }

        match self.services.subscribe(Service::AppMessage) {
            Ok(handle) => self.keep(handle),
            Err(e) => error!("App messaging not available: {:?}", e),
        }

        let units = TimeUnit::Minute | TimeUnit::Day;
        match self.services.subscribe(Service::TickTimer(units)) {
            Ok(handle) => self.keep(handle),
            Err(e) => error!("Tick timer not available: {:?}", e),
        }

        self.running = true;
        self.dirty = true;
        info!("Watch face started");
    }

    fn keep(&mut self, handle: SubscriptionHandle) {
        if self.subscriptions.push(handle).is_err() {
            warn!("Subscription table full, dropping handle {}", handle.id);
            self.services.unsubscribe(handle);
        }
    }

    /// 按订阅的逆序退订
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        while let Some(handle) = self.subscriptions.pop() {
            self.services.unsubscribe(handle);
        }
        self.running = false;
        info!("Watch face stopped");
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn settings(&self) -> &FaceSettings {
        self.store.settings()
    }

    pub fn subscriptions(&self) -> &[SubscriptionHandle] {
        &self.subscriptions
    }

    /// 处理一个事件，返回 false 表示事件循环应当结束
    pub fn handle_event(&mut self, event: FaceEvent) -> bool {
        match event {
            FaceEvent::Tick(units) => self.handle_tick(units),
            FaceEvent::Message(event) => {
                let changed = self.protocol.handle_event(
                    event,
                    &mut self.store,
                    &mut self.steps,
                    &mut self.outbox,
                    &self.clock,
                );
                self.dirty |= changed;
            }
            FaceEvent::Health(HealthEvent::MovementUpdate) => {
                self.store.refresh_steps(&mut self.steps);
                self.dirty = true;
            }
            FaceEvent::Health(_) => {
                trace!("Ignoring non-movement health event");
            }
            FaceEvent::Exit => return false,
        }
        true
    }

    fn handle_tick(&mut self, units: EnumSet<TimeUnit>) {
        if units.contains(TimeUnit::Day) {
            let now = self.clock.now();
            info!("Date changed to {}-{}-{}", now.year(), now.month(), now.day());
        }
        if !units.is_empty() {
            self.dirty = true;
        }
    }

    /// 重绘整帧并清除脏标记
    pub fn render<C: RadialCanvas>(&mut self, canvas: &mut C) -> SystemResult<()> {
        let frame = FrameInput {
            settings: self.store.settings(),
            battery: self.battery.charge_state(),
            now: self.clock.now(),
        };
        self.dirty = false;
        self.renderer.render(canvas, &frame)
    }
}
