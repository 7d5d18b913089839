use crate::*;

/// 电池状态来源
pub trait BatteryMonitor {
    /// 读取当前电量与充电状态，不阻塞
    fn charge_state(&mut self) -> BatteryChargeState;
}

/// 固定读数的电池，用于没有电量计的平台
pub struct FixedBattery {
    state: BatteryChargeState,
}

impl FixedBattery {
    pub fn new(charge_percent: u8, is_charging: bool) -> Self {
        info!(
            "[FixedBattery] initialized: percent={}, charging={}",
            charge_percent, is_charging
        );
        Self {
            state: BatteryChargeState::new(charge_percent, is_charging),
        }
    }

    pub fn set_state(&mut self, state: BatteryChargeState) {
        self.state = state;
    }
}

impl BatteryMonitor for FixedBattery {
    fn charge_state(&mut self) -> BatteryChargeState {
        self.state
    }
}
