//! Frame acquisition for the rover.
//!
//! A `FrameSource` hands out compressed camera frames from a fixed-size
//! `FramePool`. Every acquired `FrameBuffer` goes back to its pool exactly
//! once, either through `FrameSource::release` or when it is dropped on an
//! error path.

pub mod config;
pub mod error;
pub mod frame;
pub mod replay;
pub mod source;

#[cfg(feature = "v4l2")]
pub mod v4l2;

pub use config::CameraConfig;
pub use error::VideoError;
pub use frame::{FrameBuffer, FramePool};
pub use replay::ReplayDevice;
pub use source::{CaptureDevice, FrameSource, PooledCamera};

#[cfg(feature = "v4l2")]
pub use v4l2::V4l2Device;
