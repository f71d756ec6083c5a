use std::time::Duration;

use gloo_timers::callback::Timeout;

pub type Task = Box<dyn FnOnce()>;

pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Task);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, task).forget();
    }
}
