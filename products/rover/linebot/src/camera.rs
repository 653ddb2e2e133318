//! Capture backend selection.

use {
    base::log,
    std::path::Path,
    video::{CameraConfig, CaptureDevice, ReplayDevice, VideoError},
};

/// Replay recorded frames from `replay_dir` if given, else open the camera.
pub fn open_camera(
    replay_dir: Option<&Path>,
    config: &CameraConfig,
) -> Result<Box<dyn CaptureDevice>, VideoError> {
    if let Some(dir) = replay_dir {
        log::info!("replaying frames from {}", dir.display());
        return Ok(Box::new(ReplayDevice::from_dir(dir)?));
    }
    open_live(config)
}

#[cfg(feature = "v4l2")]
fn open_live(config: &CameraConfig) -> Result<Box<dyn CaptureDevice>, VideoError> {
    log::info!("opening camera {}", config.device());
    Ok(Box::new(video::V4l2Device::open(config)?))
}

#[cfg(not(feature = "v4l2"))]
fn open_live(config: &CameraConfig) -> Result<Box<dyn CaptureDevice>, VideoError> {
    Err(VideoError::PeripheralFault(format!(
        "no capture backend for {}: pass a replay directory or build with the v4l2 feature",
        config.device()
    )))
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        std::fs,
        video::{FrameSource, PooledCamera},
    };

    #[test]
    fn test_replay_dir_takes_precedence() {
        let dir = std::env::temp_dir().join(format!("linebot-camera-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("0001.jpg"), [0xFF, 0xD8, 0x00, 0xFF, 0xD9]).unwrap();

        let config = CameraConfig::default();
        let device = open_camera(Some(&dir), &config).unwrap();
        let mut camera = PooledCamera::new(device, &config);
        let frame = camera.acquire().unwrap();
        assert_eq!(&frame[..], &[0xFF, 0xD8, 0x00, 0xFF, 0xD9]);
        camera.release(frame);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_replay_dir_is_a_fault() {
        let dir = std::env::temp_dir().join("linebot-camera-does-not-exist");
        let err = open_camera(Some(&dir), &CameraConfig::default()).err().unwrap();
        assert!(err.is_fault());
    }

    #[cfg(not(feature = "v4l2"))]
    #[test]
    fn test_no_live_backend_without_v4l2() {
        let config = CameraConfig::default().with_device("/dev/video7".to_string());
        match open_camera(None, &config) {
            Err(VideoError::PeripheralFault(msg)) => assert!(msg.contains("/dev/video7")),
            Err(other) => panic!("Expected PeripheralFault, got {}", other),
            Ok(_) => panic!("Expected an error"),
        }
    }
}
