/// 步数数据来源
pub trait StepCounter {
    /// 今日累计步数，数据不可用时返回 None
    fn steps_today(&mut self) -> Option<u32>;
}

/// 没有计步器的平台
impl StepCounter for () {
    fn steps_today(&mut self) -> Option<u32> {
        None
    }
}
