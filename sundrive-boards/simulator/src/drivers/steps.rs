use embassy_time::Instant;
use sundrive_common::*;

/// 按固定步频累计的计步器
pub struct SimulatedSteps {
    started: Instant,
    base: u32,
    steps_per_minute: u32,
    available: bool,
}

impl SimulatedSteps {
    pub fn new(base: u32, steps_per_minute: u32) -> Self {
        Self {
            started: Instant::now(),
            base,
            steps_per_minute,
            available: true,
        }
    }

    /// 模拟没有健康数据的设备
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new(0, 0)
        }
    }
}

impl StepCounter for SimulatedSteps {
    fn steps_today(&mut self) -> Option<u32> {
        if !self.available {
            return None;
        }
        let minutes = self.started.elapsed().as_secs() / 60;
        let walked = (minutes * self.steps_per_minute as u64).min(u32::MAX as u64) as u32;
        Some(self.base.saturating_add(walked))
    }
}
