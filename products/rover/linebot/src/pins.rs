//! Motor driver wiring.
//!
//! L298N on the camera board:
//! - ENA: GPIO 4 (PWM, channel A speed)
//! - IN1: GPIO 2, IN2: GPIO 14 (channel A direction)
//! - IN3: GPIO 15, IN4: GPIO 13 (channel B direction)
//! - ENB: GPIO 12 (PWM, channel B speed)
//!
//! On a host without GPIO the lines below only log their transitions.

use {
    base::log,
    drive::{HBridge, L298n},
    embedded_hal::{digital, pwm},
    std::convert::Infallible,
};

pub const ENA: u8 = 4;
pub const IN1: u8 = 2;
pub const IN2: u8 = 14;
pub const IN3: u8 = 15;
pub const IN4: u8 = 13;
pub const ENB: u8 = 12;

/// 8-bit PWM resolution, as on the board's analog write.
pub const PWM_MAX: u16 = 255;

/// Digital output that logs level changes.
#[derive(Debug)]
pub struct GpioLine {
    gpio: u8,
    high: bool,
}

impl GpioLine {
    pub fn new(gpio: u8) -> Self {
        Self { gpio, high: false }
    }

    pub fn is_high(&self) -> bool {
        self.high
    }

    fn set(&mut self, high: bool) {
        if self.high != high {
            log::trace!("gpio {}: {}", self.gpio, if high { "high" } else { "low" });
        }
        self.high = high;
    }
}

impl digital::ErrorType for GpioLine {
    type Error = Infallible;
}

impl digital::OutputPin for GpioLine {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set(true);
        Ok(())
    }
}

/// PWM output that logs duty changes.
#[derive(Debug)]
pub struct PwmLine {
    gpio: u8,
    duty: u16,
}

impl PwmLine {
    pub fn new(gpio: u8) -> Self {
        Self { gpio, duty: 0 }
    }

    pub fn duty(&self) -> u16 {
        self.duty
    }
}

impl pwm::ErrorType for PwmLine {
    type Error = Infallible;
}

impl pwm::SetDutyCycle for PwmLine {
    fn max_duty_cycle(&self) -> u16 {
        PWM_MAX
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        if self.duty != duty {
            log::trace!("pwm {}: {}/{}", self.gpio, duty, PWM_MAX);
        }
        self.duty = duty;
        Ok(())
    }
}

pub type Channel = HBridge<GpioLine, GpioLine, PwmLine>;
pub type Motors = L298n<Channel, Channel>;

/// Build the driver in its safe state.
pub fn motors() -> Motors {
    L298n::new(
        HBridge::new(GpioLine::new(IN1), GpioLine::new(IN2), PwmLine::new(ENA)),
        HBridge::new(GpioLine::new(IN3), GpioLine::new(IN4), PwmLine::new(ENB)),
    )
}
