//! Session timer.

use chrono::{DateTime, Duration, Utc};

/// Elapsed play time of one session.
///
/// Time spent paused does not count, and the clock freezes for good once
/// stopped. Every method takes the current instant so hosts and tests
/// control time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionClock {
    started: DateTime<Utc>,
    paused_for: Duration,
    paused_since: Option<DateTime<Utc>>,
    stopped_at: Option<DateTime<Utc>>,
}

impl SessionClock {
    pub fn start(now: DateTime<Utc>) -> Self {
        SessionClock {
            started: now,
            paused_for: Duration::zero(),
            paused_since: None,
            stopped_at: None,
        }
    }

    pub fn started(&self) -> DateTime<Utc> {
        self.started
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped_at.is_some()
    }

    pub fn pause(&mut self, now: DateTime<Utc>) {
        if self.paused_since.is_none() && self.stopped_at.is_none() {
            self.paused_since = Some(now);
        }
    }

    pub fn resume(&mut self, now: DateTime<Utc>) {
        if let Some(since) = self.paused_since.take() {
            self.paused_for = self.paused_for + (now - since).max(Duration::zero());
        }
    }

    /// Freezes the clock at `now`. Later calls are ignored.
    pub fn stop(&mut self, now: DateTime<Utc>) {
        if self.stopped_at.is_none() {
            self.resume(now);
            self.stopped_at = Some(now);
        }
    }

    pub fn elapsed(&self, now: DateTime<Utc>) -> Duration {
        let end = self.stopped_at.or(self.paused_since).unwrap_or(now);
        (end - self.started - self.paused_for).max(Duration::zero())
    }

    /// Elapsed time as `MM:SS`. Minutes keep counting past 59.
    pub fn display(&self, now: DateTime<Utc>) -> String {
        let seconds = self.elapsed(now).num_seconds();
        format!("{:02}:{:02}", seconds / 60, seconds % 60)
    }
}
