//! Shared worker pool for parallel replicate execution.
//!
//! All parallel bootstrap runs in the process share one lazily built rayon
//! pool, so concurrent callers never oversubscribe the machine.

#[cfg(feature = "parallel")]
use rayon::ThreadPool;

#[cfg(feature = "parallel")]
use std::sync::OnceLock;

#[cfg(feature = "parallel")]
static THREAD_POOL: OnceLock<ThreadPool> = OnceLock::new();

/// Get or initialize the shared worker pool.
///
/// One worker per logical CPU, named `bootstrap-worker-{index}`.
#[cfg(feature = "parallel")]
pub fn get_thread_pool() -> &'static ThreadPool {
    THREAD_POOL.get_or_init(|| {
        rayon::ThreadPoolBuilder::new()
            .thread_name(|index| format!("bootstrap-worker-{index}"))
            .build()
            .expect("Failed to build bootstrap worker pool")
    })
}

/// Number of workers replicates are spread across.
#[cfg(feature = "parallel")]
pub fn worker_count() -> usize {
    get_thread_pool().current_num_threads()
}

/// Number of workers replicates are spread across.
#[cfg(not(feature = "parallel"))]
pub fn worker_count() -> usize {
    1
}

/// Execute an operation inside the shared worker pool.
#[cfg(feature = "parallel")]
pub fn install<OP, R>(op: OP) -> R
where
    OP: FnOnce() -> R + Send,
    R: Send,
{
    get_thread_pool().install(op)
}

/// Execute an operation on the calling thread.
#[cfg(not(feature = "parallel"))]
pub fn install<OP, R>(op: OP) -> R
where
    OP: FnOnce() -> R,
{
    op()
}
