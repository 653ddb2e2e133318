//! Motor actuation for a two-channel differential rover.

pub mod actuator;
pub mod command;
pub mod l298n;

pub use actuator::{Actuator, SharedActuator};
pub use command::{ChannelOutput, Direction, DriveCommand, InvalidRemoteCommand, MotorSetting};
pub use l298n::{Bridge, HBridge, L298n};
