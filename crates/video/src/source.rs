use crate::{CameraConfig, FrameBuffer, FramePool, VideoError};

/// Producer of compressed frames.
///
/// `acquire` waits a bounded time at most. Each returned buffer has exactly
/// one consumer and must be given back with `release` once it has been used.
pub trait FrameSource {
    fn acquire(&mut self) -> Result<FrameBuffer, VideoError>;

    fn release(&mut self, frame: FrameBuffer) {
        drop(frame);
    }
}

/// Low-level capture backend that writes one frame into a pooled buffer.
pub trait CaptureDevice: Send {
    /// Capture the next frame into `frame`, replacing its contents.
    fn capture(&mut self, frame: &mut FrameBuffer) -> Result<(), VideoError>;
}

impl<D: CaptureDevice + ?Sized> CaptureDevice for Box<D> {
    fn capture(&mut self, frame: &mut FrameBuffer) -> Result<(), VideoError> {
        (**self).capture(frame)
    }
}

/// A `CaptureDevice` backed by a fixed `FramePool`.
#[derive(Debug)]
pub struct PooledCamera<D> {
    device: D,
    pool: FramePool,
}

impl<D: CaptureDevice> PooledCamera<D> {
    pub fn new(device: D, config: &CameraConfig) -> Self {
        Self {
            device,
            pool: FramePool::new(config.frame_count(), config.max_frame_len()),
        }
    }

    pub fn pool(&self) -> &FramePool {
        &self.pool
    }

    pub fn device(&self) -> &D {
        &self.device
    }
}

impl<D: CaptureDevice> FrameSource for PooledCamera<D> {
    fn acquire(&mut self) -> Result<FrameBuffer, VideoError> {
        let mut frame = self.pool.try_take()?;
        // on failure `frame` drops here and goes straight back to the pool
        self.device.capture(&mut frame)?;
        Ok(frame)
    }

    fn release(&mut self, frame: FrameBuffer) {
        log::trace!("releasing frame of {} bytes", frame.len());
        drop(frame);
    }
}
