use chrono::{Local, NaiveDateTime};

// Port for the local wall-clock time used to stamp meetings.
pub trait Clock: Send + Sync {
    fn now_local(&self) -> NaiveDateTime;
}

#[derive(Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_local(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
