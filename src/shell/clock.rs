//! Taskbar clock
//!
//! 12-hour `h:mm AM/PM` display, refreshed once per second by the event
//! loop.

use chrono::{Local, NaiveTime, Timelike};

/// Clock state
#[derive(Debug, Default)]
pub struct Clock {
    display: String,
}

impl Clock {
    pub fn new() -> Self {
        let mut clock = Self::default();
        clock.tick();
        clock
    }

    /// Refresh the display from the wall clock
    pub fn tick(&mut self) {
        self.display = format_time(Local::now().time());
    }

    pub fn display(&self) -> &str {
        &self.display
    }
}

/// `h:mm AM/PM` with an unpadded 12-hour hour (midnight and noon show 12)
pub fn format_time(time: NaiveTime) -> String {
    let mut hours = time.hour() % 12;
    if hours == 0 {
        hours = 12;
    }
    let meridiem = if time.hour() >= 12 { "PM" } else { "AM" };
    format!("{}:{:02} {}", hours, time.minute(), meridiem)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn twelve_hour_formatting() {
        assert_eq!(format_time(at(0, 5)), "12:05 AM");
        assert_eq!(format_time(at(9, 9)), "9:09 AM");
        assert_eq!(format_time(at(12, 0)), "12:00 PM");
        assert_eq!(format_time(at(15, 7)), "3:07 PM");
        assert_eq!(format_time(at(23, 59)), "11:59 PM");
    }
}
