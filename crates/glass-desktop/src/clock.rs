//! Tray clock
//!
//! The clock is not ticking: the shell refreshes it whenever the window
//! list or focus changes, so the label is only as fresh as the last
//! interaction. Time is read through [`TimeSource`] so tests can pin it.

use serde::Serialize;

/// Wall-clock time of day
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
}

impl TimeOfDay {
    /// Build from a count of seconds since midnight (any day)
    pub fn from_seconds(seconds: u64) -> Self {
        let of_day = seconds % 86_400;
        Self {
            hour: (of_day / 3600) as u8,
            minute: (of_day % 3600 / 60) as u8,
        }
    }

    /// Format as `HH:MM` or `hh:MM AM`
    pub fn format(self, hour24: bool) -> String {
        if hour24 {
            format!("{:02}:{:02}", self.hour, self.minute)
        } else {
            let suffix = if self.hour < 12 { "AM" } else { "PM" };
            let hour = match self.hour % 12 {
                0 => 12,
                h => h,
            };
            format!("{:02}:{:02} {}", hour, self.minute, suffix)
        }
    }
}

/// Source of the current time of day
pub trait TimeSource {
    fn now(&self) -> TimeOfDay;
}

/// UTC time from the system clock
///
/// Not usable on `wasm32-unknown-unknown`; the browser build reads
/// `JsDateSource` instead.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> TimeOfDay {
        let seconds = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        TimeOfDay::from_seconds(seconds)
    }
}

/// Local time from the browser's `Date`
#[cfg(feature = "wasm")]
#[derive(Clone, Copy, Debug, Default)]
pub struct JsDateSource;

#[cfg(feature = "wasm")]
impl TimeSource for JsDateSource {
    fn now(&self) -> TimeOfDay {
        let date = js_sys::Date::new_0();
        TimeOfDay {
            hour: date.get_hours() as u8,
            minute: date.get_minutes() as u8,
        }
    }
}

/// A frozen time, for tests and demos
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedTime(pub TimeOfDay);

impl TimeSource for FixedTime {
    fn now(&self) -> TimeOfDay {
        self.0
    }
}

/// Time source for the current target
pub fn default_time_source() -> Box<dyn TimeSource> {
    #[cfg(all(feature = "wasm", target_arch = "wasm32"))]
    {
        Box::new(JsDateSource)
    }
    #[cfg(not(all(feature = "wasm", target_arch = "wasm32")))]
    {
        Box::new(SystemTimeSource)
    }
}

/// Cached clock label shown in the tray
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrayClock {
    label: String,
    hour24: bool,
}

impl TrayClock {
    pub fn new(hour24: bool) -> Self {
        Self {
            label: String::new(),
            hour24,
        }
    }

    /// Recompute the label
    pub fn refresh(&mut self, source: &dyn TimeSource) {
        self.label = source.now().format(self.hour24);
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }
}
