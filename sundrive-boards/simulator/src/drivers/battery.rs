use embassy_time::Instant;
use sundrive_common::*;

/// 放电到 LOW_WATERMARK 后开始充电，每分钟变化 1%
const LOW_WATERMARK: u8 = 10;

pub struct SimulatedBattery {
    started: Instant,
    initial_percent: u8,
}

impl SimulatedBattery {
    pub fn new(initial_percent: u8) -> Self {
        let initial_percent = initial_percent.clamp(LOW_WATERMARK + 1, 100);
        info!("Simulated battery starting at {}%", initial_percent);
        Self {
            started: Instant::now(),
            initial_percent,
        }
    }

    fn state_after(&self, minutes: u64) -> BatteryChargeState {
        let swing = (self.initial_percent - LOW_WATERMARK) as u64;
        let position = minutes % (2 * swing);
        if position < swing {
            BatteryChargeState::new(self.initial_percent - position as u8, false)
        } else {
            BatteryChargeState::new(LOW_WATERMARK + (position - swing) as u8, true)
        }
    }
}

impl BatteryMonitor for SimulatedBattery {
    fn charge_state(&mut self) -> BatteryChargeState {
        self.state_after(self.started.elapsed().as_secs() / 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discharge_then_charge_cycle() {
        let battery = SimulatedBattery::new(60);
        assert_eq!(battery.state_after(0), BatteryChargeState::new(60, false));
        assert_eq!(battery.state_after(49), BatteryChargeState::new(11, false));
        assert_eq!(battery.state_after(50), BatteryChargeState::new(10, true));
        assert_eq!(battery.state_after(99), BatteryChargeState::new(59, true));
        assert_eq!(battery.state_after(100), BatteryChargeState::new(60, false));
    }
}
