use chrono::{DateTime, Duration, Utc};

/// Remaining time broken into display units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    /// All zeros once `target` is reached.
    pub fn until(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let remaining = target - now;
        if remaining <= Duration::zero() {
            return Self::default();
        }
        let total = remaining.num_seconds();
        Self {
            days: total / 86_400,
            hours: (total % 86_400) / 3_600,
            minutes: (total % 3_600) / 60,
            seconds: total % 60,
        }
    }
}

pub fn pad2(value: i64) -> String {
    format!("{:02}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn splits_into_units() {
        let left = TimeLeft::until(at(2 * 86_400 + 3 * 3_600 + 4 * 60 + 5), at(0));
        assert_eq!(
            left,
            TimeLeft {
                days: 2,
                hours: 3,
                minutes: 4,
                seconds: 5
            }
        );
    }

    #[test]
    fn past_deadline_is_zero() {
        assert_eq!(TimeLeft::until(at(0), at(10)), TimeLeft::default());
        assert_eq!(TimeLeft::until(at(0), at(0)), TimeLeft::default());
    }

    #[test]
    fn sub_second_remainder_rounds_down() {
        let target = at(61) + Duration::milliseconds(900);
        let left = TimeLeft::until(target, at(0));
        assert_eq!(left.minutes, 1);
        assert_eq!(left.seconds, 1);
    }

    #[test]
    fn pads_to_two_digits() {
        assert_eq!(pad2(7), "07");
        assert_eq!(pad2(0), "00");
        assert_eq!(pad2(123), "123");
    }
}
