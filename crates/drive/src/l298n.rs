use {
    crate::{Actuator, ChannelOutput, DriveCommand, MotorSetting},
    embedded_hal::{digital::OutputPin, pwm::SetDutyCycle},
};

/// One motor channel.
pub trait Bridge {
    fn apply(&mut self, output: ChannelOutput);
}

/// One half of an L298N: two direction inputs and an enable pin driven by PWM.
pub struct HBridge<IN1, IN2, EN> {
    in1: IN1,
    in2: IN2,
    en: EN,
}

impl<IN1: OutputPin, IN2: OutputPin, EN: SetDutyCycle> HBridge<IN1, IN2, EN> {
    pub fn new(in1: IN1, in2: IN2, en: EN) -> Self {
        Self { in1, in2, en }
    }

    pub fn release(self) -> (IN1, IN2, EN) {
        (self.in1, self.in2, self.en)
    }
}

fn set_level(pin: &mut impl OutputPin, high: bool) {
    // pin errors are not observable by the caller
    if high {
        pin.set_high().ok();
    } else {
        pin.set_low().ok();
    }
}

impl<IN1: OutputPin, IN2: OutputPin, EN: SetDutyCycle> Bridge for HBridge<IN1, IN2, EN> {
    fn apply(&mut self, output: ChannelOutput) {
        // duty first, then direction
        self.en
            .set_duty_cycle_fraction(output.duty as u16, u8::MAX as u16)
            .ok();
        let (a, b) = output.direction.levels();
        set_level(&mut self.in1, a);
        set_level(&mut self.in2, b);
    }
}

/// Dual H-bridge driver. Channel A is ENA/IN1/IN2, channel B is ENB/IN3/IN4.
pub struct L298n<A, B> {
    a: A,
    b: B,
    command: DriveCommand,
}

impl<A: Bridge, B: Bridge> L298n<A, B> {
    /// Take ownership of both channels and put them in the safe state.
    pub fn new(a: A, b: B) -> Self {
        let mut driver = Self {
            a,
            b,
            command: DriveCommand::Stop,
        };
        driver.apply(DriveCommand::Stop.setting());
        driver
    }

    /// Last command applied.
    pub fn command(&self) -> DriveCommand {
        self.command
    }

    pub fn setting(&self) -> MotorSetting {
        self.command.setting()
    }

    fn apply(&mut self, setting: MotorSetting) {
        self.a.apply(setting.a);
        self.b.apply(setting.b);
    }
}

impl<A: Bridge, B: Bridge> Actuator for L298n<A, B> {
    fn drive(&mut self, command: DriveCommand) {
        if command != self.command {
            log::debug!("motors: {} -> {}", self.command, command);
        }
        self.apply(command.setting());
        self.command = command;
    }
}
