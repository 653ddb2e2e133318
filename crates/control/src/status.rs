use {
    crate::SystemMode,
    drive::DriveCommand,
    std::fmt,
};

/// Snapshot published after every iteration.
#[derive(Clone, Debug, PartialEq)]
pub struct LoopStatus {
    pub mode: SystemMode,
    pub last_command: Option<DriveCommand>,
    /// Frames estimated.
    pub frames: u64,
    /// Iterations without a frame.
    pub skipped: u64,
    pub fault: Option<String>,
}

impl Default for LoopStatus {
    fn default() -> Self {
        Self {
            mode: SystemMode::Autonomous,
            last_command: None,
            frames: 0,
            skipped: 0,
            fault: None,
        }
    }
}

impl fmt::Display for LoopStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "mode: {}", self.mode)?;
        match self.last_command {
            Some(command) => writeln!(f, "command: {}", command)?,
            None => writeln!(f, "command: none")?,
        }
        writeln!(f, "frames: {}", self.frames)?;
        writeln!(f, "skipped: {}", self.skipped)?;
        match &self.fault {
            Some(fault) => writeln!(f, "fault: {}", fault),
            None => writeln!(f, "fault: none"),
        }
    }
}
