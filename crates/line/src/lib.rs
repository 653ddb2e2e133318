//! Line position estimation.
//!
//! An `Estimator` turns one compressed frame into a `DriveCommand`. The
//! control loop only sees this trait, so a pixel-domain estimator can
//! replace `ByteThresholdEstimator` without touching anything else.

pub mod threshold;

pub use threshold::{ByteThresholdEstimator, EstimatorConfig, RegionScore};

use drive::DriveCommand;

pub trait Estimator {
    fn estimate(&mut self, frame: &[u8]) -> DriveCommand;
}

impl<F: FnMut(&[u8]) -> DriveCommand> Estimator for F {
    fn estimate(&mut self, frame: &[u8]) -> DriveCommand {
        self(frame)
    }
}
