use chrono::{DateTime, Local};

/// Wall-clock instant used for sample arrival and commit times.
pub type Timestamp = DateTime<Local>;

/// Abstraction over where timestamps originate from.
pub trait Clock: Send {
    /// Reads the current time.
    fn now(&mut self) -> Timestamp;
}

/// Clock backed by the local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&mut self) -> Timestamp {
        Local::now()
    }
}

impl<F> Clock for F
where
    F: FnMut() -> Timestamp + Send,
{
    fn now(&mut self) -> Timestamp {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    #[test]
    fn closures_act_as_clocks() {
        let start = Local::now();
        let mut ticks = 0;
        let mut clock = move || {
            ticks += 1;
            start + TimeDelta::milliseconds(ticks)
        };
        let first = Clock::now(&mut clock);
        let second = Clock::now(&mut clock);
        assert_eq!(second - first, TimeDelta::milliseconds(1));
    }

    #[test]
    fn system_clock_moves_forward() {
        let mut clock = SystemClock::new();
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }
}
