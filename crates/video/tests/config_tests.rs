use video::CameraConfig;

#[test]
fn test_config_defaults() {
    let config = CameraConfig::default();

    assert_eq!(config.device(), "/dev/video0");
    assert_eq!(config.width(), 320);
    assert_eq!(config.height(), 240);
    assert_eq!(config.fps(), 30);
    assert_eq!(config.frame_count(), 2);
    assert_eq!(config.max_frame_len(), 64 * 1024);
}

#[test]
fn test_config_builder() {
    let config = CameraConfig::default()
        .with_device("/dev/video2".to_string())
        .with_width(160)
        .with_height(120)
        .with_fps(15)
        .with_frame_count(1)
        .with_max_frame_len(16 * 1024);

    assert_eq!(config.device(), "/dev/video2");
    assert_eq!(config.width(), 160);
    assert_eq!(config.height(), 120);
    assert_eq!(config.fps(), 15);
    assert_eq!(config.frame_count(), 1);
    assert_eq!(config.max_frame_len(), 16 * 1024);
}
