//! Closed-loop line following.
//!
//! `ControlLoop` runs one cooperative iteration per `step`: drain remote
//! commands, feed the video sink, then acquire, estimate, actuate and
//! release one frame. Nothing in an iteration blocks without bound.

pub mod config;
pub mod driver;
pub mod mode;
pub mod remote;
pub mod sink;
pub mod status;

pub use config::ControlConfig;
pub use driver::{ControlLoop, StepOutcome};
pub use mode::SystemMode;
pub use remote::{RemoteError, RemoteReceiver, RemoteSender, remote_channel};
pub use sink::FrameSink;
pub use status::LoopStatus;
