use {
    crate::{CameraConfig, CaptureDevice, FrameBuffer, VideoError},
    v4l::{
        Device, Format, FourCC, buffer::Type, io::mmap::Stream as MmapStream,
        io::traits::CaptureStream, video::Capture,
    },
};

// number of kernel-side capture buffers
const MMAP_BUFFERS: u32 = 2;

/// MJPEG capture from a V4L2 device.
pub struct V4l2Device {
    stream: MmapStream<'static>,
    width: u32,
    height: u32,
}

impl V4l2Device {
    pub fn open(config: &CameraConfig) -> Result<Self, VideoError> {
        let device = Device::with_path(config.device())?;

        let actual = Capture::set_format(
            &device,
            &Format::new(config.width(), config.height(), FourCC::new(b"MJPG")),
        )?;
        if &actual.fourcc.repr != b"MJPG" {
            return Err(VideoError::PeripheralFault(format!(
                "{} does not support MJPG (got {})",
                config.device(),
                actual.fourcc
            )));
        }

        let params = Capture::set_params(
            &device,
            &v4l::video::capture::Parameters::with_fps(config.fps()),
        )?;
        log::info!(
            "v4l2: {} at {}x{}, {}/{} s per frame",
            config.device(),
            actual.width,
            actual.height,
            params.interval.numerator,
            params.interval.denominator
        );

        let stream = MmapStream::with_buffers(&device, Type::VideoCapture, MMAP_BUFFERS)?;

        Ok(Self {
            stream,
            width: actual.width,
            height: actual.height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl CaptureDevice for V4l2Device {
    fn capture(&mut self, frame: &mut FrameBuffer) -> Result<(), VideoError> {
        let (data, metadata) = CaptureStream::next(&mut self.stream)?;
        let used = (metadata.bytesused as usize).min(data.len());
        frame.fill(&data[..used])
    }
}
