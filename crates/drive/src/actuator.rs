use {
    crate::DriveCommand,
    std::sync::{Arc, Mutex},
};

/// Sink for drive commands.
///
/// `drive` is idempotent and cannot fail; hardware faults are not visible
/// at this layer. `DriveCommand::Stop` is the safe state.
pub trait Actuator {
    fn drive(&mut self, command: DriveCommand);
}

impl<A: Actuator + ?Sized> Actuator for &mut A {
    fn drive(&mut self, command: DriveCommand) {
        (**self).drive(command)
    }
}

impl<A: Actuator + ?Sized> Actuator for Box<A> {
    fn drive(&mut self, command: DriveCommand) {
        (**self).drive(command)
    }
}

/// An actuator shared between threads.
///
/// Each `drive` holds the lock for the whole update, so concurrent writers
/// are serialized and the last one to take the lock defines the outputs.
pub struct SharedActuator<A> {
    inner: Arc<Mutex<A>>,
}

impl<A> Clone for SharedActuator<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A: Actuator> SharedActuator<A> {
    pub fn new(actuator: A) -> Self {
        Self {
            inner: Arc::new(Mutex::new(actuator)),
        }
    }

    /// Run `f` with exclusive access to the wrapped actuator.
    pub fn with<R>(&self, f: impl FnOnce(&mut A) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut guard)
    }
}

impl<A: Actuator> Actuator for SharedActuator<A> {
    fn drive(&mut self, command: DriveCommand) {
        self.with(|actuator| actuator.drive(command));
    }
}
