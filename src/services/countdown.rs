//! Countdown math for the hero section and the gallery placeholders.

use chrono::NaiveDateTime;

/// Time left until an event, split into display segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    /// True once the target instant has arrived or passed.
    pub fn is_over(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }

    /// (label, zero-padded value) pairs in display order.
    pub fn segments(&self) -> [(&'static str, String); 4] {
        [
            ("Days", pad(self.days)),
            ("Hours", pad(self.hours)),
            ("Minutes", pad(self.minutes)),
            ("Seconds", pad(self.seconds)),
        ]
    }
}

pub fn remaining_until(now: NaiveDateTime, target: NaiveDateTime) -> Remaining {
    let total = (target - now).num_seconds().max(0);
    Remaining {
        days: total / 86_400,
        hours: total / 3_600 % 24,
        minutes: total / 60 % 60,
        seconds: total % 60,
    }
}

fn pad(value: i64) -> String {
    format!("{:02}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_segments_split() {
        let now = at(2025, 8, 29, 8, 30, 15);
        let target = at(2025, 8, 31, 10, 0, 0);

        let left = remaining_until(now, target);

        assert_eq!(left.days, 2);
        assert_eq!(left.hours, 1);
        assert_eq!(left.minutes, 29);
        assert_eq!(left.seconds, 45);
        assert!(!left.is_over());
    }

    #[test]
    fn test_past_target_is_over() {
        let now = at(2025, 9, 1, 0, 0, 0);
        let target = at(2025, 8, 31, 10, 0, 0);

        let left = remaining_until(now, target);

        assert_eq!(left, Remaining::default());
        assert!(left.is_over());
    }

    #[test]
    fn test_exact_instant_is_over() {
        let now = at(2025, 8, 31, 10, 0, 0);
        assert!(remaining_until(now, now).is_over());
    }

    #[test]
    fn test_segments_are_zero_padded() {
        let now = at(2025, 8, 31, 9, 59, 58);
        let target = at(2025, 8, 31, 10, 0, 0);

        let segments = remaining_until(now, target).segments();

        assert_eq!(segments[0], ("Days", "00".to_string()));
        assert_eq!(segments[3], ("Seconds", "02".to_string()));
    }
}
