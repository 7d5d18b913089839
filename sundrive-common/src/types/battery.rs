/// 电池状态快照
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryChargeState {
    /// 电量百分比 (0-100)
    pub charge_percent: u8,
    pub is_charging: bool,
}

impl BatteryChargeState {
    pub const fn new(charge_percent: u8, is_charging: bool) -> Self {
        Self {
            charge_percent,
            is_charging,
        }
    }

    /// 超过 100 的读数按 100 处理
    pub fn clamped_percent(&self) -> u8 {
        self.charge_percent.min(100)
    }
}
