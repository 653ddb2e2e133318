use {
    crate::VideoError,
    std::{
        fmt,
        ops::Deref,
        sync::{Arc, Mutex},
    },
};

struct PoolShared {
    free: Mutex<Vec<Vec<u8>>>,
    capacity: usize,
    max_len: usize,
}

impl PoolShared {
    fn put_back(&self, mut data: Vec<u8>) {
        data.clear();
        let mut free = self.free.lock().unwrap_or_else(|e| e.into_inner());
        if free.len() < self.capacity {
            free.push(data);
        }
    }
}

/// Fixed-size pool of frame buffers.
///
/// All buffers are allocated up front. `try_take` fails with
/// `VideoError::FrameUnavailable` while every buffer is out.
#[derive(Clone)]
pub struct FramePool {
    shared: Arc<PoolShared>,
}

impl FramePool {
    pub fn new(capacity: usize, max_len: usize) -> Self {
        let free = (0..capacity).map(|_| Vec::with_capacity(max_len)).collect();
        Self {
            shared: Arc::new(PoolShared {
                free: Mutex::new(free),
                capacity,
                max_len,
            }),
        }
    }

    /// Take an empty buffer out of the pool.
    pub fn try_take(&self) -> Result<FrameBuffer, VideoError> {
        let data = self
            .shared
            .free
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop()
            .ok_or(VideoError::FrameUnavailable)?;
        Ok(FrameBuffer {
            data,
            home: Some(Arc::clone(&self.shared)),
        })
    }

    /// Number of buffers currently in the pool.
    pub fn available(&self) -> usize {
        self.shared
            .free
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    pub fn capacity(&self) -> usize {
        self.shared.capacity
    }

    pub fn max_len(&self) -> usize {
        self.shared.max_len
    }
}

impl fmt::Debug for FramePool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FramePool")
            .field("available", &self.available())
            .field("capacity", &self.capacity())
            .field("max_len", &self.max_len())
            .finish()
    }
}

/// One compressed camera frame.
///
/// A buffer taken from a `FramePool` returns to it when dropped, so it is
/// handed back exactly once on every path. Detached buffers have no pool.
pub struct FrameBuffer {
    data: Vec<u8>,
    home: Option<Arc<PoolShared>>,
}

impl FrameBuffer {
    /// Wrap bytes that do not belong to any pool.
    pub fn detached(data: Vec<u8>) -> Self {
        Self { data, home: None }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Byte capacity this frame may grow to.
    pub fn max_len(&self) -> usize {
        match &self.home {
            Some(home) => home.max_len,
            None => usize::MAX,
        }
    }

    /// Replace the contents with `bytes`.
    pub fn fill(&mut self, bytes: &[u8]) -> Result<(), VideoError> {
        let max = self.max_len();
        if bytes.len() > max {
            return Err(VideoError::Oversize {
                len: bytes.len(),
                max,
            });
        }
        self.data.clear();
        self.data.extend_from_slice(bytes);
        Ok(())
    }

    pub fn is_pooled(&self) -> bool {
        self.home.is_some()
    }
}

impl Deref for FrameBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameBuffer")
            .field("len", &self.data.len())
            .field("pooled", &self.home.is_some())
            .finish()
    }
}

impl Drop for FrameBuffer {
    fn drop(&mut self) {
        if let Some(home) = self.home.take() {
            home.put_back(std::mem::take(&mut self.data));
        }
    }
}
