use {
    base::{Cancel, log},
    com::{CommandServer, FrameFeed, Routes},
    control::{ControlConfig, ControlLoop, remote_channel},
    drive::SharedActuator,
    line::ByteThresholdEstimator,
    linebot::{camera, pins},
    std::path::PathBuf,
    video::{CameraConfig, PooledCamera},
};

const DEFAULT_ADDR: &str = "0.0.0.0:80";
const ADDR_VAR: &str = "LINEBOT_ADDR";

// one thread: the control loop yields between iterations so the server
// tasks get serviced in the gaps
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    base::init_stdout_logger();

    let camera_config = CameraConfig::default();
    let control_config = ControlConfig::default();
    let addr = std::env::var(ADDR_VAR).unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    let replay_dir = std::env::args().nth(1).map(PathBuf::from);
    let device = camera::open_camera(replay_dir.as_deref(), &camera_config)?;
    let source = PooledCamera::new(device, &camera_config);
    log::info!(
        "frame pool: {} x {} bytes",
        camera_config.frame_count(),
        camera_config.max_frame_len()
    );

    let motors = SharedActuator::new(pins::motors());
    let (sender, receiver) = remote_channel(control_config.remote_capacity());
    let feed = FrameFeed::new();

    let mut control = ControlLoop::new(
        source,
        ByteThresholdEstimator::default(),
        motors.clone(),
        receiver,
        control_config,
    )
    .with_sink(feed.clone());

    let routes = Routes::new(sender, feed, control.subscribe())
        .with_stream_interval(control.config().stream_interval());
    let server = CommandServer::bind(&addr, routes).await?;
    log::info!("listening on {}", server.local_addr());

    let cancel = Cancel::new();
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                log::info!("interrupt, shutting down");
                cancel.cancel();
            }
        }
    });

    control.run(&cancel).await;
    drop(server);

    log::info!("motors parked: {}", motors.with(|m| m.command()));
    Ok(())
}
