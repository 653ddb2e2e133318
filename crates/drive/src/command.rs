use std::{fmt, str::FromStr};

/// Discrete drive decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DriveCommand {
    Forward,
    Backward,
    Left,
    Right,
    Stop,
}

/// Rotation sense of one motor channel, as seen on its two input pins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
    /// Both inputs low.
    Released,
}

impl Direction {
    /// Logic levels for (IN1, IN2), or (IN3, IN4) on the second channel.
    pub fn levels(self) -> (bool, bool) {
        match self {
            Direction::Forward => (true, false),
            Direction::Reverse => (false, true),
            Direction::Released => (false, false),
        }
    }
}

/// Outputs of one H-bridge channel. `duty` is on the 0-255 analog scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelOutput {
    pub duty: u8,
    pub direction: Direction,
}

/// Outputs of both channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MotorSetting {
    pub a: ChannelOutput,
    pub b: ChannelOutput,
}

// cruise duty on both channels
const CRUISE: u8 = 90;
// inner channel while turning, gives a gentle arc
const TURN_INNER: u8 = 85;

const fn out(duty: u8, direction: Direction) -> ChannelOutput {
    ChannelOutput { duty, direction }
}

const FORWARD: MotorSetting = MotorSetting {
    a: out(CRUISE, Direction::Forward),
    b: out(CRUISE, Direction::Forward),
};
const BACKWARD: MotorSetting = MotorSetting {
    a: out(CRUISE, Direction::Reverse),
    b: out(CRUISE, Direction::Reverse),
};
const LEFT: MotorSetting = MotorSetting {
    a: out(TURN_INNER, Direction::Reverse),
    b: out(CRUISE, Direction::Forward),
};
const RIGHT: MotorSetting = MotorSetting {
    a: out(CRUISE, Direction::Forward),
    b: out(TURN_INNER, Direction::Reverse),
};
const STOP: MotorSetting = MotorSetting {
    a: out(0, Direction::Released),
    b: out(0, Direction::Released),
};

impl DriveCommand {
    pub const ALL: [DriveCommand; 5] = [
        DriveCommand::Forward,
        DriveCommand::Backward,
        DriveCommand::Left,
        DriveCommand::Right,
        DriveCommand::Stop,
    ];

    /// The fixed motor outputs for this command.
    pub fn setting(self) -> MotorSetting {
        match self {
            DriveCommand::Forward => FORWARD,
            DriveCommand::Backward => BACKWARD,
            DriveCommand::Left => LEFT,
            DriveCommand::Right => RIGHT,
            DriveCommand::Stop => STOP,
        }
    }

    /// Literal used on the remote control surface.
    pub fn as_str(self) -> &'static str {
        match self {
            DriveCommand::Forward => "forward",
            DriveCommand::Backward => "backward",
            DriveCommand::Left => "left",
            DriveCommand::Right => "right",
            DriveCommand::Stop => "stop",
        }
    }
}

impl fmt::Display for DriveCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A remote command literal that names no `DriveCommand`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidRemoteCommand(pub String);

impl fmt::Display for InvalidRemoteCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid remote command: {:?}", self.0)
    }
}

impl std::error::Error for InvalidRemoteCommand {}

impl FromStr for DriveCommand {
    type Err = InvalidRemoteCommand;

    /// Exact, case-sensitive match on the five literals.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DriveCommand::ALL
            .into_iter()
            .find(|command| command.as_str() == s)
            .ok_or_else(|| InvalidRemoteCommand(s.to_string()))
    }
}
