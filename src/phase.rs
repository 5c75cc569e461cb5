use {
    std::{
        fmt,
        str::FromStr,
    },
    enum_iterator::IntoEnumIterator,
    smart_default::SmartDefault,
    crate::error::Error,
};

/// Phases of a day/night cycle, in the order they follow each other
#[derive(Debug, SmartDefault, Clone, Copy, IntoEnumIterator, PartialEq, Eq, Hash)]
pub enum Phase {
    /// first phase of the day
    #[default]
    Dawn,
    Morning,
    Noon,
    Evening,
    Dusk,
    /// wraps around to `Dawn`
    Night,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Dawn => "dawn",
            Phase::Morning => "morning",
            Phase::Noon => "noon",
            Phase::Evening => "evening",
            Phase::Dusk => "dusk",
            Phase::Night => "night",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.name(), f)
    }
}

impl FromStr for Phase {
    type Err = Error;

    fn from_str(s: &str) -> Result<Phase, Error> {
        let wanted = s.trim();
        Phase::into_enum_iter()
            .find(|phase| phase.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownPhase(s.to_owned()))
    }
}
