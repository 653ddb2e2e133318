use std::{fmt, time::Instant};

/// Who currently drives the actuator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SystemMode {
    /// The estimator's decisions are applied.
    Autonomous,
    /// A remote command holds the actuator until `until`, or for good when
    /// the hold runs past what `Instant` can represent. Estimates are still
    /// computed but not applied.
    Overridden { until: Option<Instant> },
    /// A peripheral fault was seen. Only `Stop` is issued from now on.
    Degraded,
}

impl SystemMode {
    pub fn name(&self) -> &'static str {
        match self {
            SystemMode::Autonomous => "autonomous",
            SystemMode::Overridden { .. } => "overridden",
            SystemMode::Degraded => "degraded",
        }
    }

    pub fn is_overridden_at(&self, now: Instant) -> bool {
        match self {
            SystemMode::Overridden { until } => until.is_none_or(|until| now < until),
            _ => false,
        }
    }
}

impl fmt::Display for SystemMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
