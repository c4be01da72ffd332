use std::time::{Duration, SystemTime};

#[derive(Clone)]
pub struct SystemClock {}

pub trait Clock: Send + Sync {
    fn now(&self) -> SystemTime;

    /// Elapsed time since `time`, zero if `time` lies in the future of this clock.
    fn duration_since(&self, time: SystemTime) -> Duration {
        return self.now().duration_since(time).unwrap_or(Duration::ZERO);
    }
}

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        return SystemTime::now();
    }
}

impl SystemClock {
    pub fn new() -> SystemClock {
        return SystemClock {};
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        return Self::new();
    }
}
