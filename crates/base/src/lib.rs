mod cancel;
pub use cancel::*;

pub mod logging;
pub use logging::{FileLogger, StdoutLogger, init_file_logger, init_stdout_logger};

// re-export so downstream crates can use base::log::*
pub use log;
