/// Time primitives.
///
/// The session core measures wall time in milliseconds since the Unix
/// epoch, matching the upstream dataset's timestamp fields. Callers inject
/// `now` explicitly so everything stays replayable.
pub type EpochMs = i64;

pub const MS_PER_SECOND: i64 = 1_000;
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// A days/hours/minutes/seconds breakdown of a positive time delta.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CountdownParts {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

/// Countdown toward a close timestamp.
///
/// A target at or before `now` is `Expired` rather than a zero breakdown;
/// consumers decide whether to keep showing the last running value.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Countdown {
    Running(CountdownParts),
    Expired,
}

impl Countdown {
    /// Breaks `target - now` down by integer division: days, then the
    /// remainder's hours, minutes, and seconds.
    pub fn at(target_ms: EpochMs, now_ms: EpochMs) -> Self {
        let diff = target_ms - now_ms;
        if diff <= 0 {
            return Countdown::Expired;
        }
        Countdown::Running(CountdownParts {
            days: diff / MS_PER_DAY,
            hours: (diff % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (diff % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (diff % MS_PER_MINUTE) / MS_PER_SECOND,
        })
    }

    pub fn parts(self) -> Option<CountdownParts> {
        match self {
            Countdown::Running(parts) => Some(parts),
            Countdown::Expired => None,
        }
    }

    pub fn is_expired(self) -> bool {
        matches!(self, Countdown::Expired)
    }
}

#[cfg(test)]
mod tests {
    use super::{Countdown, CountdownParts, MS_PER_DAY};

    #[test]
    fn breaks_delta_into_units() {
        // 1d 1h 1m 1.001s floors to one of each unit.
        let c = Countdown::at(90_061_001, 0);
        assert_eq!(
            c.parts(),
            Some(CountdownParts {
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 1,
            })
        );
    }

    #[test]
    fn sub_second_remainder_floors_to_zero() {
        let c = Countdown::at(999, 0);
        assert_eq!(
            c.parts(),
            Some(CountdownParts {
                days: 0,
                hours: 0,
                minutes: 0,
                seconds: 0,
            })
        );
    }

    #[test]
    fn past_and_exact_targets_are_expired() {
        assert!(Countdown::at(0, 0).is_expired());
        assert!(Countdown::at(5_000, 10_000).is_expired());
    }

    #[test]
    fn whole_days_carry_no_remainder() {
        let c = Countdown::at(3 * MS_PER_DAY, 0);
        assert_eq!(
            c.parts(),
            Some(CountdownParts {
                days: 3,
                hours: 0,
                minutes: 0,
                seconds: 0,
            })
        );
    }
}
