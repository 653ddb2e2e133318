use {
    drive::DriveCommand,
    std::fmt,
    tokio::sync::mpsc::{self, error::TrySendError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteError {
    /// The queue holds `capacity` commands the loop has not drained yet.
    Full,
    /// The control loop is gone.
    Closed,
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteError::Full => write!(f, "remote command queue full"),
            RemoteError::Closed => write!(f, "control loop closed"),
        }
    }
}

impl std::error::Error for RemoteError {}

/// Create the bounded queue between the network layer and the control loop.
pub fn remote_channel(capacity: usize) -> (RemoteSender, RemoteReceiver) {
    let capacity = capacity.max(1);
    let (tx, rx) = mpsc::channel(capacity);
    (RemoteSender { tx }, RemoteReceiver { rx, capacity })
}

/// Network-side handle. Never blocks.
#[derive(Clone, Debug)]
pub struct RemoteSender {
    tx: mpsc::Sender<DriveCommand>,
}

impl RemoteSender {
    pub fn send(&self, command: DriveCommand) -> Result<(), RemoteError> {
        self.tx.try_send(command).map_err(|error| match error {
            TrySendError::Full(_) => RemoteError::Full,
            TrySendError::Closed(_) => RemoteError::Closed,
        })
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Loop-side handle.
#[derive(Debug)]
pub struct RemoteReceiver {
    rx: mpsc::Receiver<DriveCommand>,
    capacity: usize,
}

impl RemoteReceiver {
    /// Take what is pending right now, at most `capacity` commands, oldest first.
    pub fn drain(&mut self) -> Vec<DriveCommand> {
        let mut commands = Vec::new();
        while commands.len() < self.capacity {
            match self.rx.try_recv() {
                Ok(command) => commands.push(command),
                Err(_) => break,
            }
        }
        commands
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
