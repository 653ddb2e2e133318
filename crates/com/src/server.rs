use {
    crate::{ComError, FrameFeed, mjpeg},
    axum::{
        Router,
        body::Body,
        extract::State,
        http::{StatusCode, header},
        response::{IntoResponse, Response},
        routing::get,
    },
    control::{LoopStatus, RemoteError, RemoteSender},
    drive::DriveCommand,
    futures_util::stream,
    std::{convert::Infallible, net::SocketAddr, time::Duration},
    tokio::{
        net::{TcpListener, ToSocketAddrs},
        sync::watch,
        task::JoinHandle,
        time::{MissedTickBehavior, interval},
    },
};

const DEFAULT_STREAM_INTERVAL: Duration = Duration::from_millis(50);

// tokio intervals must be non-zero
const MIN_STREAM_INTERVAL: Duration = Duration::from_millis(1);

/// Body sent back for an accepted drive command.
pub fn acknowledgement(command: DriveCommand) -> &'static str {
    match command {
        DriveCommand::Forward => "Moving Forward",
        DriveCommand::Backward => "Moving Backward",
        DriveCommand::Left => "Turning Left",
        DriveCommand::Right => "Turning Right",
        DriveCommand::Stop => "Stopped",
    }
}

/// Handles shared by every request.
#[derive(Clone)]
pub struct Routes {
    remote: RemoteSender,
    feed: FrameFeed,
    status: watch::Receiver<LoopStatus>,
    stream_interval: Duration,
}

impl Routes {
    pub fn new(remote: RemoteSender, feed: FrameFeed, status: watch::Receiver<LoopStatus>) -> Self {
        Self {
            remote,
            feed,
            status,
            stream_interval: DEFAULT_STREAM_INTERVAL,
        }
    }

    /// Pause between two parts of `/stream`.
    pub fn with_stream_interval(mut self, stream_interval: Duration) -> Self {
        self.stream_interval = stream_interval.max(MIN_STREAM_INTERVAL);
        self
    }

    /// `GET /forward` .. `GET /stop`, `/frame`, `/stream` and `/status`.
    /// Anything else is 404; other methods on these paths are 405.
    pub fn router(self) -> Router {
        let mut router: Router<Routes> = Router::new()
            .route("/frame", get(frame))
            .route("/stream", get(stream_frames))
            .route("/status", get(status));
        for command in DriveCommand::ALL {
            router = router.route(
                &format!("/{}", command),
                get(move |State(routes): State<Routes>| async move { routes.submit(command) }),
            );
        }
        router.fallback(not_found).with_state(self)
    }

    fn submit(&self, command: DriveCommand) -> Response {
        match self.remote.send(command) {
            Ok(()) => {
                log::debug!("http: queued {}", command);
                acknowledgement(command).into_response()
            }
            Err(RemoteError::Full) => {
                log::warn!("http: queue full, dropping {}", command);
                (StatusCode::SERVICE_UNAVAILABLE, "busy").into_response()
            }
            Err(RemoteError::Closed) => {
                (StatusCode::SERVICE_UNAVAILABLE, "control loop stopped").into_response()
            }
        }
    }
}

async fn frame(State(routes): State<Routes>) -> Response {
    match routes.feed.snapshot() {
        Some(jpeg) => ([(header::CONTENT_TYPE, "image/jpeg")], jpeg).into_response(),
        None => (StatusCode::SERVICE_UNAVAILABLE, "no frame yet").into_response(),
    }
}

async fn stream_frames(State(routes): State<Routes>) -> Response {
    log::info!("http: stream client connected");
    let mut ticker = interval(routes.stream_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    // each poll registers demand, so the loop keeps feeding while the client reads
    let parts = stream::unfold(
        (routes.feed, ticker, 0u64),
        |(feed, mut ticker, seen)| async move {
            loop {
                ticker.tick().await;
                if let Some((sequence, jpeg)) = feed.next_after(seen) {
                    let part = Ok::<_, Infallible>(mjpeg::part(&jpeg));
                    return Some((part, (feed, ticker, sequence)));
                }
            }
        },
    );

    (
        [
            (header::CONTENT_TYPE, mjpeg::CONTENT_TYPE),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        Body::from_stream(parts),
    )
        .into_response()
}

async fn status(State(routes): State<Routes>) -> String {
    routes.status.borrow().to_string()
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "not found")
}

pub struct CommandServer {
    local_addr: SocketAddr,
    serve_task: JoinHandle<()>,
}

impl CommandServer {
    /// Bind and start serving on the current runtime.
    pub async fn bind(addr: impl ToSocketAddrs, routes: Routes) -> Result<Self, ComError> {
        let listener = TcpListener::bind(addr).await?;
        let local_addr = listener.local_addr()?;
        let app = routes.router();

        let serve_task = tokio::spawn(async move {
            if let Err(error) = axum::serve(listener, app).await {
                log::error!("http: server stopped: {}", error);
            }
        });

        Ok(Self {
            local_addr,
            serve_task,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }
}

impl Drop for CommandServer {
    fn drop(&mut self) {
        self.serve_task.abort();
    }
}
