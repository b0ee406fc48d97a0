use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;

/// Bounded task runner for matching work
///
/// At most `size` tasks run concurrently; the rest queue on the semaphore.
/// The pool is an owned resource of the matcher with an explicit lifecycle,
/// reused across matching runs. `shutdown` closes the pool: tasks already
/// holding a permit finish, queued and late-spawned tasks are dropped.
#[derive(Debug, Clone)]
pub struct WorkerPool {
    permits: Arc<Semaphore>,
    size: usize,
}

impl WorkerPool {
    /// Default number of concurrent workers, a small multiple of the
    /// expected core count
    pub const DEFAULT_SIZE: usize = 4;

    pub fn new(size: usize) -> Self {
        // A pool of zero workers could never run anything.
        let size = size.max(1);
        Self {
            permits: Arc::new(Semaphore::new(size)),
            size,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Schedule one unit of work
    ///
    /// Returns immediately; the task runs once a worker slot frees up. A
    /// panic inside the task is contained in the returned handle and never
    /// affects sibling tasks.
    pub fn spawn<F>(&self, task: F) -> JoinHandle<()>
    where
        F: FnOnce() + Send + 'static,
    {
        let permits = Arc::clone(&self.permits);
        tokio::spawn(async move {
            match permits.acquire_owned().await {
                Ok(_permit) => task(),
                Err(_) => {
                    tracing::debug!("worker pool shut down, task dropped");
                }
            }
        })
    }

    /// Close the pool
    ///
    /// In-flight tasks finish; anything still waiting for a slot is dropped.
    pub fn shutdown(&self) {
        self.permits.close();
    }

    pub fn is_shutdown(&self) -> bool {
        self.permits.is_closed()
    }
}

impl Default for WorkerPool {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE)
    }
}
