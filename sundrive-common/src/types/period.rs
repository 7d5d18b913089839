/// 当前所处的光照时段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PeriodType {
    Night,
    AstronomicalDawn,
    NauticalDawn,
    CivilDawn,
    Day,
    CivilDusk,
    NauticalDusk,
    AstronomicalDusk,
}

impl PeriodType {
    pub const ALL: [PeriodType; 8] = [
        PeriodType::Night,
        PeriodType::AstronomicalDawn,
        PeriodType::NauticalDawn,
        PeriodType::CivilDawn,
        PeriodType::Day,
        PeriodType::CivilDusk,
        PeriodType::NauticalDusk,
        PeriodType::AstronomicalDusk,
    ];

    pub fn is_night(self) -> bool {
        self == PeriodType::Night
    }
}
