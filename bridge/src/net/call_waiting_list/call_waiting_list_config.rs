use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallWaitingListConfig {
    call_expiry_after: Option<Duration>,
    pause_expiry_checker: Duration,
}

impl CallWaitingListConfig {
    pub fn new(call_expiry_after: Duration,
               pause_expiry_checker: Duration) -> Self {

        return CallWaitingListConfig {
            call_expiry_after: Some(call_expiry_after),
            pause_expiry_checker,
        };
    }

    /// Pending calls stay in the list until their reply arrives, however long that takes.
    pub fn without_expiry() -> Self {
        return CallWaitingListConfig {
            call_expiry_after: None,
            pause_expiry_checker: Duration::from_secs(2),
        };
    }

    pub fn get_call_expiry_after(&self) -> Option<Duration> {
        return self.call_expiry_after;
    }

    pub fn get_pause_expiry_checker(&self) -> Duration {
        return self.pause_expiry_checker;
    }
}

impl Default for CallWaitingListConfig {
    fn default() -> Self {
        return Self::without_expiry();
    }
}
