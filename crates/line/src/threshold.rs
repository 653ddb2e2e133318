use {crate::Estimator, drive::DriveCommand};

/// Tuning of `ByteThresholdEstimator`.
///
/// The defaults are empirical and match the deployed rover. They are not
/// derived from frame geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EstimatorConfig {
    /// Bytes sampled, starting at the middle of the buffer.
    pub window_len: usize,
    /// Bytes strictly below this count as dark.
    pub dark_threshold: u8,
    /// Center count must exceed this to go forward.
    pub forward_min: u32,
    /// Left or right count must exceed this to turn.
    pub turn_min: u32,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            window_len: 150,
            dark_threshold: 30,
            forward_min: 100,
            turn_min: 80,
        }
    }
}

/// Dark-sample counts of one estimation pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegionScore {
    pub left: u32,
    pub center: u32,
    pub right: u32,
}

impl RegionScore {
    /// First matching rule wins: forward, left, right, stop.
    pub fn decide(&self, config: &EstimatorConfig) -> DriveCommand {
        let RegionScore {
            left,
            center,
            right,
        } = *self;
        if center > left && center > right && center > config.forward_min {
            DriveCommand::Forward
        } else if left > right && left > config.turn_min {
            DriveCommand::Left
        } else if right > left && right > config.turn_min {
            DriveCommand::Right
        } else {
            DriveCommand::Stop
        }
    }
}

/// Classifies raw compressed bytes, without decoding, into three partitions.
///
/// Partition boundaries are byte offsets, not image columns. The result is
/// a coarse qualitative signal only.
#[derive(Clone, Debug, Default)]
pub struct ByteThresholdEstimator {
    config: EstimatorConfig,
}

impl ByteThresholdEstimator {
    pub fn new(config: EstimatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    pub fn score(&self, frame: &[u8]) -> RegionScore {
        let len = frame.len();
        let mut score = RegionScore::default();
        if len == 0 {
            return score;
        }

        let start = len / 2;
        let first_third = len / 3;
        let second_third = (2 * len) / 3;

        // the window is always `window_len` samples; on frames shorter than
        // `start + window_len` it wraps around to the buffer start
        for i in start..start + self.config.window_len {
            let position = i % len;
            if frame[position] >= self.config.dark_threshold {
                continue;
            }
            if position < first_third {
                score.left += 1;
            } else if position < second_third {
                score.center += 1;
            } else {
                score.right += 1;
            }
        }
        score
    }
}

impl Estimator for ByteThresholdEstimator {
    fn estimate(&mut self, frame: &[u8]) -> DriveCommand {
        let score = self.score(frame);
        let command = score.decide(&self.config);
        log::trace!(
            "L:{} C:{} R:{} -> {}",
            score.left,
            score.center,
            score.right,
            command
        );
        command
    }
}
