use std::fmt;

#[derive(Debug)]
pub enum VideoError {
    /// Pool exhausted or peripheral busy. Skip the cycle and retry.
    FrameUnavailable,
    /// Permanent hardware failure.
    PeripheralFault(String),
    /// The captured frame does not fit a pool buffer.
    Oversize { len: usize, max: usize },
}

impl VideoError {
    /// True for failures that will not clear up by retrying.
    pub fn is_fault(&self) -> bool {
        matches!(self, VideoError::PeripheralFault(_))
    }
}

impl fmt::Display for VideoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoError::FrameUnavailable => write!(f, "frame unavailable"),
            VideoError::PeripheralFault(msg) => write!(f, "peripheral fault: {msg}"),
            VideoError::Oversize { len, max } => {
                write!(f, "frame of {len} bytes exceeds buffer of {max} bytes")
            }
        }
    }
}

impl std::error::Error for VideoError {}

impl From<std::io::Error> for VideoError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::WouldBlock
            | std::io::ErrorKind::TimedOut
            | std::io::ErrorKind::Interrupted => VideoError::FrameUnavailable,
            _ => VideoError::PeripheralFault(err.to_string()),
        }
    }
}
