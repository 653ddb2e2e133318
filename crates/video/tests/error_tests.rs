use std::io;
use video::VideoError;

#[test]
fn test_transient_io_errors_map_to_frame_unavailable() {
    for kind in [
        io::ErrorKind::WouldBlock,
        io::ErrorKind::TimedOut,
        io::ErrorKind::Interrupted,
    ] {
        let err: VideoError = io::Error::new(kind, "busy").into();
        assert!(matches!(err, VideoError::FrameUnavailable), "{:?}", kind);
        assert!(!err.is_fault());
    }
}

#[test]
fn test_other_io_errors_map_to_peripheral_fault() {
    let err: VideoError = io::Error::new(io::ErrorKind::NotFound, "no /dev/video0").into();
    match &err {
        VideoError::PeripheralFault(msg) => assert!(msg.contains("no /dev/video0")),
        _ => panic!("Expected PeripheralFault"),
    }
    assert!(err.is_fault());
}

#[test]
fn test_error_display() {
    assert_eq!(VideoError::FrameUnavailable.to_string(), "frame unavailable");
    assert!(
        VideoError::Oversize { len: 10, max: 4 }
            .to_string()
            .contains("10 bytes")
    );
    assert!(
        VideoError::PeripheralFault("sensor gone".to_string())
            .to_string()
            .contains("sensor gone")
    );
}

#[test]
fn test_only_peripheral_faults_are_permanent() {
    let all = [
        VideoError::FrameUnavailable,
        VideoError::PeripheralFault("lost".to_string()),
        VideoError::Oversize { len: 9, max: 8 },
    ];
    for err in all {
        let permanent = match &err {
            VideoError::FrameUnavailable => false,
            VideoError::PeripheralFault(_) => true,
            VideoError::Oversize { .. } => false,
        };
        assert_eq!(err.is_fault(), permanent, "{}", err);
    }
}
