//! # Periodic Timer (`common::timer`)
//!
//! File: cli/src/common/timer.rs
//! Author: Christi Mahu
//!
//! The shell drives the agent's `update` hook from a [`Timer`]. The default
//! [`IntervalTimer`] wraps `tokio::time::interval`; it stays silent until
//! `start` is called and then fires once per period.
//!
use std::future;
use std::time::Duration;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};

/// One firing of the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickEvent {
    /// 1 for the first tick after `start`.
    pub count: u64,
    /// Time since `start`.
    pub elapsed: Duration,
}

/// Source of periodic tick events.
///
/// `tick` must be cancel safe: the shell races it against terminal input.
pub trait Timer {
    fn start(&mut self);
    async fn tick(&mut self) -> TickEvent;
}

pub struct IntervalTimer {
    period: Duration,
    interval: Option<Interval>,
    started_at: Option<Instant>,
    count: u64,
}

impl IntervalTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            interval: None,
            started_at: None,
            count: 0,
        }
    }
}

impl Timer for IntervalTimer {
    fn start(&mut self) {
        let now = Instant::now();
        let mut interval = time::interval_at(now + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        self.interval = Some(interval);
        self.started_at = Some(now);
        self.count = 0;
    }

    async fn tick(&mut self) -> TickEvent {
        let Some(interval) = self.interval.as_mut() else {
            return future::pending().await;
        };
        let at = interval.tick().await;
        self.count += 1;
        let started = self.started_at.unwrap_or(at);
        TickEvent {
            count: self.count,
            elapsed: at.duration_since(started),
        }
    }
}
