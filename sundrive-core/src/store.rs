//! 设置存储
//!
//! 内存中的 FaceSettings 是唯一的真值来源，每次修改后立即写回对应的持久化数据块。

use serde::{Serialize, de::DeserializeOwned};
use sundrive_common::*;

pub const STORAGE_KEY_TWILIGHT: u32 = 1;
pub const STORAGE_KEY_DATE_CONFIG: u32 = 2;
pub const STORAGE_KEY_STEP_GOAL: u32 = 3;
pub const STORAGE_KEY_SHOW_HOUR_NUMBERS: u32 = 4;

pub struct SettingsStore<S: BlobStorage> {
    storage: S,
    settings: FaceSettings,
}

impl<S: BlobStorage> SettingsStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            settings: FaceSettings::default(),
        }
    }

    pub fn settings(&self) -> &FaceSettings {
        &self.settings
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// 读取已持久化的设置，缺失或损坏的记录保留默认值
    pub fn load(&mut self) {
        if let Some(config) = self.read::<DateDisplayConfig>(STORAGE_KEY_DATE_CONFIG) {
            debug!(
                "Loaded date config: us={}, weekday={}",
                config.us_date_format, config.show_weekday
            );
            self.settings.date_config = config;
        }

        if let Some(twilight) = self.read::<TwilightBoundaries>(STORAGE_KEY_TWILIGHT) {
            debug!("Loaded twilight data from storage");
            self.settings.twilight = twilight;
        }

        if let Some(goal) = self.read::<i32>(STORAGE_KEY_STEP_GOAL) {
            debug!("Loaded step goal: {}", goal);
            self.settings.steps.goal = goal;
        }

        if let Some(show) = self.read::<bool>(STORAGE_KEY_SHOW_HOUR_NUMBERS) {
            debug!("Loaded show_hour_numbers: {}", show);
            self.settings.show_hour_numbers = show;
        }
    }

    fn read<T: DeserializeOwned>(&mut self, key: u32) -> Option<T> {
        if !self.storage.exists(key) {
            return None;
        }
        let bytes = match self.storage.read_blob(key) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return None,
            Err(e) => {
                warn!("Failed to read key {}: {:?}", key, e);
                return None;
            }
        };
        match postcard::from_bytes(&bytes) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Corrupted record for key {}, using default", key);
                None
            }
        }
    }

    /// 写回失败只记录日志，内存中的设置照常生效
    fn persist<T: Serialize>(&mut self, key: u32, value: &T) {
        let result = postcard::to_allocvec(value)
            .map_err(|_| SystemError::CodecError(CodecError::Encode))
            .and_then(|bytes| self.storage.write_blob(key, &bytes));
        if let Err(e) = result {
            error!("Failed to persist key {}: {:?}", key, e);
        }
    }

    /// 按字段合并日期配置，任一字段变化时整体写回
    pub fn apply_date_config(&mut self, update: DateConfigUpdate) -> bool {
        if update.is_empty() {
            return false;
        }
        let config = &mut self.settings.date_config;
        if let Some(us) = update.us_date_format {
            config.us_date_format = us;
            debug!("Date format US: {}", us);
        }
        if let Some(show) = update.show_weekday {
            config.show_weekday = show;
            debug!("Show day of week: {}", show);
        }
        let config = *config;
        self.persist(STORAGE_KEY_DATE_CONFIG, &config);
        true
    }

    /// 更新步数目标并立即刷新当前步数，返回是否需要重绘
    pub fn apply_step_goal<C: StepCounter>(&mut self, goal: i32, counter: &mut C) -> bool {
        self.settings.steps.goal = goal;
        self.persist(STORAGE_KEY_STEP_GOAL, &goal);
        self.refresh_steps(counter);
        debug!("Step goal updated: {}", goal);
        true
    }

    pub fn apply_hour_numbers(&mut self, show: bool) -> bool {
        self.settings.show_hour_numbers = show;
        self.persist(STORAGE_KEY_SHOW_HOUR_NUMBERS, &show);
        debug!("Show hour numbers: {}", show);
        true
    }

    /// 八个边界整体替换
    pub fn apply_twilight(&mut self, boundaries: TwilightBoundaries) -> bool {
        self.settings.twilight = boundaries;
        self.persist(STORAGE_KEY_TWILIGHT, &boundaries);
        debug!(
            "Twilight data updated: sunrise={}, sunset={}",
            boundaries.sunrise, boundaries.sunset
        );
        true
    }

    /// 重新读取今日步数；步数环关闭时不读取，数据不可用时记为 0
    pub fn refresh_steps<C: StepCounter>(&mut self, counter: &mut C) {
        if !self.settings.steps.is_enabled() {
            return;
        }
        self.settings.steps.current_steps = counter.steps_today().unwrap_or(0);
    }
}
