use std::time::Duration;

/// Timing and queue settings for `ControlLoop`.
#[derive(Clone, Debug)]
pub struct ControlConfig {
    override_hold: Duration,
    loop_period: Duration,
    stream_interval: Duration,
    remote_capacity: usize,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            override_hold: Duration::from_secs(2),
            loop_period: Duration::ZERO,
            stream_interval: Duration::from_millis(50),
            remote_capacity: 8,
        }
    }
}

impl ControlConfig {
    /// How long a remote command keeps the estimator from actuating.
    /// Zero lets the next autonomous decision win right away.
    pub fn with_override_hold(mut self, hold: Duration) -> Self {
        self.override_hold = hold;
        self
    }

    /// Pause between iterations. Zero only yields to other tasks.
    pub fn with_loop_period(mut self, period: Duration) -> Self {
        self.loop_period = period;
        self
    }

    /// Minimum time between two frames pushed to the video sink.
    pub fn with_stream_interval(mut self, interval: Duration) -> Self {
        self.stream_interval = interval;
        self
    }

    /// Capacity of the remote command queue, at least 1.
    pub fn with_remote_capacity(mut self, capacity: usize) -> Self {
        self.remote_capacity = capacity.max(1);
        self
    }

    pub fn override_hold(&self) -> Duration {
        self.override_hold
    }

    pub fn loop_period(&self) -> Duration {
        self.loop_period
    }

    pub fn stream_interval(&self) -> Duration {
        self.stream_interval
    }

    pub fn remote_capacity(&self) -> usize {
        self.remote_capacity
    }
}
