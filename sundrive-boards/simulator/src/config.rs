use std::path::PathBuf;

use embedded_graphics::geometry::Size;
use sundrive_common::DisplayCapabilities;

const DEFAULT_STORAGE_DIR: &str = "target/sundrive-storage";
const DEFAULT_FRAME_PATH: &str = "target/sundrive-frame.ppm";

/// 模拟器运行参数，来自环境变量
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatorConfig {
    pub storage_dir: PathBuf,
    pub frame_path: PathBuf,
    pub monochrome: bool,
    pub health_available: bool,
}

impl SimulatorConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let flag = |key: &str| {
            lookup(key).is_some_and(|v| matches!(v.trim(), "1" | "true" | "yes"))
        };
        Self {
            storage_dir: lookup("SUNDRIVE_STORAGE_DIR")
                .unwrap_or_else(|| DEFAULT_STORAGE_DIR.into())
                .into(),
            frame_path: lookup("SUNDRIVE_FRAME_PATH")
                .unwrap_or_else(|| DEFAULT_FRAME_PATH.into())
                .into(),
            monochrome: flag("SUNDRIVE_MONOCHROME"),
            health_available: !flag("SUNDRIVE_NO_HEALTH"),
        }
    }

    /// 单色模拟矩形屏，彩色模拟圆屏
    pub fn display(&self) -> (DisplayCapabilities, Size) {
        if self.monochrome {
            (
                DisplayCapabilities {
                    full_color: false,
                    round: false,
                },
                Size::new(144, 168),
            )
        } else {
            (
                DisplayCapabilities {
                    full_color: true,
                    round: true,
                },
                Size::new(180, 180),
            )
        }
    }
}
