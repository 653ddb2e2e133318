use {
    crate::{ControlConfig, FrameSink, LoopStatus, RemoteReceiver, SystemMode},
    base::Cancel,
    drive::{Actuator, DriveCommand},
    line::Estimator,
    std::time::Instant,
    tokio::sync::watch,
    video::{FrameSource, VideoError},
};

/// What the autonomous half of one iteration did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The estimate was applied to the actuator.
    Actuated(DriveCommand),
    /// The estimate was computed while a remote override was active.
    Suppressed(DriveCommand),
    /// No frame this iteration. The actuator was not touched.
    Skipped,
    /// Faulted; `Stop` was applied.
    Degraded,
}

pub struct ControlLoop<S, E, A> {
    source: S,
    estimator: E,
    actuator: A,
    remote: RemoteReceiver,
    sink: Option<Box<dyn FrameSink>>,
    config: ControlConfig,
    mode: SystemMode,
    last_command: Option<DriveCommand>,
    last_stream: Option<Instant>,
    frames: u64,
    skipped: u64,
    fault: Option<String>,
    status: watch::Sender<LoopStatus>,
}

impl<S: FrameSource, E: Estimator, A: Actuator> ControlLoop<S, E, A> {
    pub fn new(
        source: S,
        estimator: E,
        actuator: A,
        remote: RemoteReceiver,
        config: ControlConfig,
    ) -> Self {
        let (status, _) = watch::channel(LoopStatus::default());
        Self {
            source,
            estimator,
            actuator,
            remote,
            sink: None,
            config,
            mode: SystemMode::Autonomous,
            last_command: None,
            last_stream: None,
            frames: 0,
            skipped: 0,
            fault: None,
            status,
        }
    }

    /// Attach the video egress.
    pub fn with_sink(mut self, sink: impl FrameSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Subscribe to the status published after each iteration.
    pub fn subscribe(&self) -> watch::Receiver<LoopStatus> {
        self.status.subscribe()
    }

    pub fn mode(&self) -> SystemMode {
        self.mode
    }

    pub fn last_command(&self) -> Option<DriveCommand> {
        self.last_command
    }

    pub fn actuator(&self) -> &A {
        &self.actuator
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn estimator(&self) -> &E {
        &self.estimator
    }

    pub fn config(&self) -> &ControlConfig {
        &self.config
    }

    pub fn step(&mut self) -> StepOutcome {
        self.step_at(Instant::now())
    }

    /// Run one iteration as if the clock read `now`.
    pub fn step_at(&mut self, now: Instant) -> StepOutcome {
        self.service_remote(now);
        self.stream_frame(now);
        let outcome = self.autonomous_cycle(now);
        self.publish();
        outcome
    }

    /// Step until `cancel` is set, then park the motors.
    pub async fn run(&mut self, cancel: &Cancel) {
        log::info!("control loop: running");
        while !cancel.is_cancelled() {
            self.step();
            let period = self.config.loop_period();
            if period.is_zero() {
                tokio::task::yield_now().await;
            } else {
                tokio::time::sleep(period).await;
            }
        }
        self.apply(DriveCommand::Stop);
        self.publish();
        log::info!("control loop: stopped");
    }

    fn service_remote(&mut self, now: Instant) {
        for command in self.remote.drain() {
            if self.mode == SystemMode::Degraded {
                log::warn!("remote: {} ignored while degraded", command);
                self.apply(DriveCommand::Stop);
                continue;
            }
            log::info!("remote: {}", command);
            self.apply(command);
            let hold = self.config.override_hold();
            if !hold.is_zero() {
                if !self.mode.is_overridden_at(now) {
                    log::info!("mode: overridden for {:?}", hold);
                }
                self.mode = SystemMode::Overridden {
                    until: now.checked_add(hold),
                };
            }
        }
    }

    fn stream_frame(&mut self, now: Instant) {
        if self.mode == SystemMode::Degraded {
            return;
        }
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        if !sink.wants_frame() {
            return;
        }
        if let Some(last) = self.last_stream {
            if now.saturating_duration_since(last) < self.config.stream_interval() {
                return;
            }
        }

        match self.source.acquire() {
            Ok(frame) => {
                sink.push(&frame);
                self.source.release(frame);
                self.last_stream = Some(now);
            }
            Err(error) if error.is_fault() => self.degrade(error),
            Err(error) => log::debug!("stream: no frame: {}", error),
        }
    }

    fn autonomous_cycle(&mut self, now: Instant) -> StepOutcome {
        if self.mode == SystemMode::Degraded {
            self.apply(DriveCommand::Stop);
            return StepOutcome::Degraded;
        }

        if let SystemMode::Overridden { .. } = self.mode {
            if !self.mode.is_overridden_at(now) {
                log::info!("mode: override expired, autonomous");
                self.mode = SystemMode::Autonomous;
            }
        }

        let frame = match self.source.acquire() {
            Ok(frame) => frame,
            Err(error) if error.is_fault() => {
                self.degrade(error);
                self.apply(DriveCommand::Stop);
                return StepOutcome::Degraded;
            }
            Err(error) => {
                log::debug!("capture: no frame: {}", error);
                self.skipped += 1;
                return StepOutcome::Skipped;
            }
        };
        let command = self.estimator.estimate(&frame);
        self.source.release(frame);
        self.frames += 1;

        if self.mode.is_overridden_at(now) {
            return StepOutcome::Suppressed(command);
        }
        self.apply(command);
        StepOutcome::Actuated(command)
    }

    fn degrade(&mut self, error: VideoError) {
        log::error!("capture: {}, stopping", error);
        self.fault = Some(error.to_string());
        self.mode = SystemMode::Degraded;
    }

    fn apply(&mut self, command: DriveCommand) {
        if self.last_command != Some(command) {
            log::debug!("drive: {}", command);
        }
        self.actuator.drive(command);
        self.last_command = Some(command);
    }

    fn publish(&self) {
        self.status.send_replace(LoopStatus {
            mode: self.mode,
            last_command: self.last_command,
            frames: self.frames,
            skipped: self.skipped,
            fault: self.fault.clone(),
        });
    }
}
