use serde::{Deserialize, Serialize};

use crate::types::TwilightBoundaries;

/// 默认每日步数目标
pub const DEFAULT_STEP_GOAL: i32 = 8000;

/// 日期显示配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateDisplayConfig {
    /// true = 月/日，false = 日/月
    pub us_date_format: bool,
    pub show_weekday: bool,
}

impl Default for DateDisplayConfig {
    fn default() -> Self {
        Self {
            us_date_format: false,
            show_weekday: true,
        }
    }
}

/// 日期配置的部分更新，未携带的字段保持不变
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateConfigUpdate {
    pub us_date_format: Option<bool>,
    pub show_weekday: Option<bool>,
}

impl DateConfigUpdate {
    pub fn is_empty(&self) -> bool {
        self.us_date_format.is_none() && self.show_weekday.is_none()
    }
}

/// 步数追踪状态，只有 goal 会被持久化
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepTrackerState {
    /// 0 表示关闭步数环
    pub goal: i32,
    pub current_steps: u32,
}

impl StepTrackerState {
    pub fn is_enabled(&self) -> bool {
        self.goal > 0
    }
}

impl Default for StepTrackerState {
    fn default() -> Self {
        Self {
            goal: DEFAULT_STEP_GOAL,
            current_steps: 0,
        }
    }
}

/// 表盘的全部可变设置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceSettings {
    pub date_config: DateDisplayConfig,
    pub steps: StepTrackerState,
    pub show_hour_numbers: bool,
    pub twilight: TwilightBoundaries,
}

impl Default for FaceSettings {
    fn default() -> Self {
        Self {
            date_config: DateDisplayConfig::default(),
            steps: StepTrackerState::default(),
            show_hour_numbers: false,
            twilight: TwilightBoundaries::INVALID,
        }
    }
}
