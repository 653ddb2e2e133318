use std::fs;
use video::{CameraConfig, FrameSource, PooledCamera, ReplayDevice, VideoError};

fn encode_gray_jpeg(value: u8) -> Vec<u8> {
    let img = crates_image::GrayImage::from_fn(16, 16, |_, _| crates_image::Luma([value]));
    let mut jpeg = Vec::new();
    crates_image::codecs::jpeg::JpegEncoder::new(&mut jpeg)
        .encode_image(&img)
        .unwrap();
    jpeg
}

#[test]
fn test_replay_requires_frames() {
    match ReplayDevice::new(Vec::new()) {
        Err(VideoError::PeripheralFault(_)) => {}
        other => panic!("Expected PeripheralFault, got {:?}", other),
    }
}

#[test]
fn test_replay_cycles_frames_in_order() {
    let device = ReplayDevice::new(vec![vec![1], vec![2], vec![3]]).unwrap();
    let mut camera = PooledCamera::new(device, &CameraConfig::default());

    let mut seen = Vec::new();
    for _ in 0..5 {
        let frame = camera.acquire().unwrap();
        seen.push(frame[0]);
        camera.release(frame);
    }
    assert_eq!(seen, vec![1, 2, 3, 1, 2]);
}

#[test]
fn test_replay_from_dir_loads_sorted_jpegs() {
    let dir = std::env::temp_dir().join(format!("linebot-replay-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();

    let dark = encode_gray_jpeg(0);
    let bright = encode_gray_jpeg(255);
    fs::write(dir.join("b.jpg"), &bright).unwrap();
    fs::write(dir.join("a.JPEG"), &dark).unwrap();
    fs::write(dir.join("notes.txt"), b"not a frame").unwrap();

    let device = ReplayDevice::from_dir(&dir).unwrap();
    assert_eq!(device.frame_count(), 2);

    let mut camera = PooledCamera::new(device, &CameraConfig::default());
    let first = camera.acquire().unwrap();
    assert_eq!(first.as_bytes(), dark.as_slice());
    assert_eq!(&first[0..2], &[0xFF, 0xD8]);
    camera.release(first);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_replay_from_missing_dir_is_fault() {
    let dir = std::env::temp_dir().join("linebot-replay-does-not-exist");
    let err = ReplayDevice::from_dir(&dir).unwrap_err();
    assert!(err.is_fault());
}
