//! The tokio runtime used when no runtime is current.
//!
//! Async sources and dispatchers prefer the runtime the caller is already
//! inside, so tracing and metrics configured there are preserved. Outside
//! any runtime they fall back to one shared, lazily built multi-thread
//! runtime with one worker per CPU core. That runtime is never dropped.
//!
//! ```rust
//! use fnkit::control::later::runtime;
//!
//! let answer = runtime::global().block_on(async { 6 * 7 });
//! assert_eq!(answer, 42);
//! ```

use std::sync::LazyLock;

use tokio::runtime::{Builder, Handle, Runtime};

static GLOBAL_RUNTIME: LazyLock<Runtime> = LazyLock::new(|| {
    tracing::debug!(workers = num_cpus::get(), "starting shared runtime");
    Builder::new_multi_thread()
        .worker_threads(num_cpus::get())
        .thread_name("fnkit-worker")
        .enable_all()
        .build()
        .expect("Failed to create global tokio runtime")
});

/// Returns the shared runtime, building it on first use.
#[inline]
#[must_use]
pub fn global() -> &'static Runtime {
    &GLOBAL_RUNTIME
}

/// Returns a handle to the current runtime, or to [`global`] outside one.
#[must_use]
pub fn handle() -> Handle {
    Handle::try_current().unwrap_or_else(|_| global().handle().clone())
}
