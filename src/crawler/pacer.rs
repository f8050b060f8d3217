//! Request pacing
//!
//! The crawler runs one request at a time, so a fixed pause before each
//! fetch is also the minimum spacing between any two fetches in a run.

use std::time::Duration;

/// Sleeps a fixed delay before every fetch
#[derive(Debug, Clone)]
pub struct Pacer {
    delay: Duration,
    waits: u64,
}

impl Pacer {
    /// Creates a pacer with the given delay
    pub fn new(delay: Duration) -> Self {
        Self { delay, waits: 0 }
    }

    /// Returns the configured delay
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Number of times `wait` has been called
    pub fn waits(&self) -> u64 {
        self.waits
    }

    /// Waits the configured delay
    ///
    /// Applied unconditionally, including before the very first request.
    pub async fn wait(&mut self) {
        self.waits += 1;
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}
