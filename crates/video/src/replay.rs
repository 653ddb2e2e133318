use {
    crate::{CaptureDevice, FrameBuffer, VideoError},
    std::{fs, path::Path},
};

/// Plays back recorded frames in a loop.
#[derive(Debug, Clone)]
pub struct ReplayDevice {
    frames: Vec<Vec<u8>>,
    next: usize,
}

impl ReplayDevice {
    pub fn new(frames: Vec<Vec<u8>>) -> Result<Self, VideoError> {
        if frames.is_empty() {
            return Err(VideoError::PeripheralFault(
                "replay device has no frames".to_string(),
            ));
        }
        Ok(Self { frames, next: 0 })
    }

    /// Load every `.jpg`/`.jpeg` file from `dir`, in file name order.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, VideoError> {
        let mut paths = Vec::new();
        for entry in fs::read_dir(dir.as_ref())? {
            let path = entry?.path();
            let is_jpeg = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg"))
                .unwrap_or(false);
            if is_jpeg {
                paths.push(path);
            }
        }
        paths.sort();

        let mut frames = Vec::with_capacity(paths.len());
        for path in &paths {
            frames.push(fs::read(path)?);
        }
        log::info!(
            "replay: loaded {} frames from {}",
            frames.len(),
            dir.as_ref().display()
        );
        Self::new(frames)
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

impl CaptureDevice for ReplayDevice {
    fn capture(&mut self, frame: &mut FrameBuffer) -> Result<(), VideoError> {
        let bytes = &self.frames[self.next];
        self.next = (self.next + 1) % self.frames.len();
        frame.fill(bytes)
    }
}
