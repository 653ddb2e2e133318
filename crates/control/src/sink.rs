/// Video egress.
///
/// The loop hands the sink a frame it acquired for the sink alone and
/// releases it as soon as `push` returns, so implementations copy whatever
/// they keep.
pub trait FrameSink {
    /// False while nobody is watching; the loop then skips acquisition.
    fn wants_frame(&self) -> bool {
        true
    }

    fn push(&mut self, frame: &[u8]);
}
