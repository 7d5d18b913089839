//! 时段分类

use sundrive_common::{PeriodType, TwilightBoundaries};

/// 判断 now_minutes 所处的时段
///
/// 边界无效时恒为白昼。区间均为左闭右开，按固定优先级依次匹配，
/// 顺序不可调整：边界数据异常时各区间可能重叠，先匹配者胜出。
pub fn classify(now_minutes: i32, boundaries: &TwilightBoundaries) -> PeriodType {
    if !boundaries.valid {
        return PeriodType::Day;
    }

    let b = boundaries;
    let within = |begin: i16, end: i16| now_minutes >= begin as i32 && now_minutes < end as i32;

    if within(b.sunrise, b.sunset) {
        PeriodType::Day
    } else if within(b.civil_begin, b.sunrise) {
        PeriodType::CivilDawn
    } else if within(b.sunset, b.civil_end) {
        PeriodType::CivilDusk
    } else if within(b.nautical_begin, b.civil_begin) {
        PeriodType::NauticalDawn
    } else if within(b.civil_end, b.nautical_end) {
        PeriodType::NauticalDusk
    } else if within(b.astronomical_begin, b.nautical_begin) {
        PeriodType::AstronomicalDawn
    } else if within(b.nautical_end, b.astronomical_end) {
        PeriodType::AstronomicalDusk
    } else {
        PeriodType::Night
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sundrive_common::TwilightBoundaries;

    // 萨拉戈萨，春分前后
    const ZARAGOZA: TwilightBoundaries =
        TwilightBoundaries::new(280, 313, 345, 371, 1092, 1118, 1151, 1183);

    #[test]
    fn test_invalid_is_always_day() {
        for m in -10..1450 {
            assert_eq!(classify(m, &TwilightBoundaries::INVALID), PeriodType::Day);
        }
    }

    #[test]
    fn test_sunrise_edges() {
        assert_eq!(classify(371, &ZARAGOZA), PeriodType::Day);
        assert_eq!(classify(370, &ZARAGOZA), PeriodType::CivilDawn);
        assert_eq!(classify(1091, &ZARAGOZA), PeriodType::Day);
        assert_eq!(classify(1092, &ZARAGOZA), PeriodType::CivilDusk);
    }

    #[test]
    fn test_each_period() {
        assert_eq!(classify(0, &ZARAGOZA), PeriodType::Night);
        assert_eq!(classify(280, &ZARAGOZA), PeriodType::AstronomicalDawn);
        assert_eq!(classify(313, &ZARAGOZA), PeriodType::NauticalDawn);
        assert_eq!(classify(345, &ZARAGOZA), PeriodType::CivilDawn);
        assert_eq!(classify(720, &ZARAGOZA), PeriodType::Day);
        assert_eq!(classify(1118, &ZARAGOZA), PeriodType::NauticalDusk);
        assert_eq!(classify(1151, &ZARAGOZA), PeriodType::AstronomicalDusk);
        assert_eq!(classify(1183, &ZARAGOZA), PeriodType::Night);
        assert_eq!(classify(1439, &ZARAGOZA), PeriodType::Night);
    }

    #[test]
    fn test_partitions_day_into_eight_intervals() {
        // 有序边界下，[0,1440) 恰好被分成八段连续区间
        let mut transitions = 0;
        let mut seen = [false; 8];
        let mut previous = classify(0, &ZARAGOZA);
        for m in 0..1440 {
            let period = classify(m, &ZARAGOZA);
            if period != previous {
                transitions += 1;
                previous = period;
            }
            let idx = PeriodType::ALL.iter().position(|p| *p == period).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s));
        // 夜晚在午夜两侧各出现一次，中间共 8 次切换
        assert_eq!(transitions, 8);
    }

    #[test]
    fn test_priority_order_on_malformed_boundaries() {
        // 民用晨昏与白昼重叠时白昼优先
        let overlapping = TwilightBoundaries::new(300, 300, 500, 400, 1000, 1100, 1100, 1100);
        assert_eq!(classify(450, &overlapping), PeriodType::Day);
        // 400 之前命中航海晨光区间 [300, 500)
        assert_eq!(classify(350, &overlapping), PeriodType::NauticalDawn);
    }
}
