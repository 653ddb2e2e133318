//! Network surface of the rover.
//!
//! `CommandServer` turns `GET /<command>` requests into queued drive
//! commands, and serves the video feed (`/frame` snapshots and the `/stream`
//! MJPEG feed) plus the loop status. The server never touches the actuator;
//! the control loop drains the queue.

pub mod error;
pub mod feed;
pub mod mjpeg;
pub mod server;

pub use error::ComError;
pub use feed::FrameFeed;
pub use server::{CommandServer, Routes, acknowledgement};
