//! Time-of-day greeting for the dashboard welcome card.

use chrono::{Local, Timelike};
use std::fmt;

/// Greeting bucket for an hour of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Greeting {
    /// 00:00 to 05:59
    Night,
    /// 06:00 to 10:59
    Morning,
    /// 11:00 to 12:59
    Noon,
    /// 13:00 to 16:59
    Afternoon,
    /// 17:00 to 23:59
    Evening,
}

impl Greeting {
    /// Localized greeting text.
    pub fn text(&self) -> &'static str {
        match self {
            Greeting::Night => "早点睡",
            Greeting::Morning => "早上好",
            Greeting::Noon => "中午好",
            Greeting::Afternoon => "下午好",
            Greeting::Evening => "晚上好",
        }
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Pick the greeting for an hour of the day.
///
/// Hours past 23 clamp to 23 and therefore read as evening.
pub fn greeting_for(hour: u32) -> Greeting {
    match hour.min(23) {
        0..=5 => Greeting::Night,
        6..=10 => Greeting::Morning,
        11..=12 => Greeting::Noon,
        13..=16 => Greeting::Afternoon,
        _ => Greeting::Evening,
    }
}

/// Greeting for the local wall-clock hour.
pub fn current_greeting() -> Greeting {
    greeting_for(Local::now().hour())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_examples() {
        assert_eq!(greeting_for(5), Greeting::Night);
        assert_eq!(greeting_for(9), Greeting::Morning);
        assert_eq!(greeting_for(12), Greeting::Noon);
        assert_eq!(greeting_for(15), Greeting::Afternoon);
        assert_eq!(greeting_for(20), Greeting::Evening);
    }

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(greeting_for(0), Greeting::Night);
        assert_eq!(greeting_for(6), Greeting::Morning);
        assert_eq!(greeting_for(10), Greeting::Morning);
        assert_eq!(greeting_for(11), Greeting::Noon);
        assert_eq!(greeting_for(13), Greeting::Afternoon);
        assert_eq!(greeting_for(16), Greeting::Afternoon);
        assert_eq!(greeting_for(17), Greeting::Evening);
        assert_eq!(greeting_for(23), Greeting::Evening);
    }

    #[test]
    fn test_out_of_range_clamps_to_evening() {
        assert_eq!(greeting_for(24), Greeting::Evening);
        assert_eq!(greeting_for(u32::MAX), Greeting::Evening);
    }

    #[test]
    fn test_text() {
        assert_eq!(Greeting::Night.to_string(), "早点睡");
        assert_eq!(greeting_for(9).text(), "早上好");
    }

    #[test]
    fn test_every_hour_has_a_greeting() {
        let buckets: Vec<Greeting> = (0..24).map(greeting_for).collect();
        assert_eq!(buckets.iter().filter(|g| **g == Greeting::Night).count(), 6);
        assert_eq!(buckets.iter().filter(|g| **g == Greeting::Morning).count(), 5);
        assert_eq!(buckets.iter().filter(|g| **g == Greeting::Noon).count(), 2);
        assert_eq!(buckets.iter().filter(|g| **g == Greeting::Afternoon).count(), 4);
        assert_eq!(buckets.iter().filter(|g| **g == Greeting::Evening).count(), 7);
    }
}
