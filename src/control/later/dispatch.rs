//! Dispatchers: where jobs run.

use std::sync::Arc;

#[cfg(feature = "async")]
use tokio::runtime::Handle;
#[cfg(feature = "async")]
use tokio::sync::mpsc;

/// A unit of work submitted to a [`Dispatcher`].
pub type Job = Box<dyn FnOnce() + Send>;

/// An executor that runs submitted jobs.
pub trait Dispatcher: Send + Sync + 'static {
    /// Submits `job` for execution.
    fn dispatch(&self, job: Job);
}

impl<D: Dispatcher + ?Sized> Dispatcher for Arc<D> {
    fn dispatch(&self, job: Job) {
        (**self).dispatch(job);
    }
}

/// Runs every job inline on the calling thread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Immediate;

impl Dispatcher for Immediate {
    fn dispatch(&self, job: Job) {
        job();
    }
}

/// Runs jobs on a tokio runtime's blocking pool.
///
/// Jobs may run concurrently and in any order.
#[cfg(feature = "async")]
#[derive(Debug, Clone)]
pub struct TokioDispatcher {
    handle: Handle,
}

#[cfg(feature = "async")]
impl TokioDispatcher {
    /// Dispatches onto the runtime behind `handle`.
    pub const fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Dispatches onto the current runtime, or the shared global runtime
    /// when called outside one.
    pub fn current() -> Self {
        Self::new(super::runtime::handle())
    }
}

#[cfg(feature = "async")]
impl Dispatcher for TokioDispatcher {
    fn dispatch(&self, job: Job) {
        tracing::trace!("submitting job to blocking pool");
        drop(self.handle.spawn_blocking(job));
    }
}

/// Runs jobs one at a time, in submission order.
///
/// An async task on the runtime drains the queue, handing each job to the
/// blocking pool and awaiting it before starting the next. Clones share the
/// queue; the task exits once every clone has been dropped or the runtime
/// shuts down. After shutdown, submissions are dropped with a warning.
///
/// A panicking job is logged and skipped; the queue carries on.
#[cfg(feature = "async")]
#[derive(Debug, Clone)]
pub struct SerialDispatcher {
    sender: mpsc::UnboundedSender<Job>,
}

#[cfg(feature = "async")]
impl SerialDispatcher {
    /// Starts a queue drained on the runtime behind `handle`.
    pub fn new(handle: &Handle) -> Self {
        let (sender, mut receiver) = mpsc::unbounded_channel::<Job>();
        let pool = handle.clone();
        drop(handle.spawn(async move {
            while let Some(job) = receiver.recv().await {
                if let Err(error) = pool.spawn_blocking(job).await {
                    tracing::warn!(%error, "serial job did not complete");
                }
            }
            tracing::trace!("serial queue drained and closed");
        }));
        Self { sender }
    }

    /// Starts a queue on the current runtime, or the shared global runtime
    /// when called outside one.
    pub fn current() -> Self {
        Self::new(&super::runtime::handle())
    }
}

#[cfg(feature = "async")]
impl Dispatcher for SerialDispatcher {
    fn dispatch(&self, job: Job) {
        tracing::trace!("queueing job on serial dispatcher");
        if self.sender.send(job).is_err() {
            tracing::warn!("serial dispatcher has stopped; job dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::mpsc as std_mpsc;

    #[rstest]
    fn immediate_runs_inline() {
        let (sender, receiver) = std_mpsc::channel();
        Immediate.dispatch(Box::new(move || sender.send(1).unwrap()));
        assert_eq!(receiver.try_recv(), Ok(1));
    }

    #[rstest]
    fn shared_dispatcher_delegates() {
        let shared: Arc<dyn Dispatcher> = Arc::new(Immediate);
        let (sender, receiver) = std_mpsc::channel();
        shared.dispatch(Box::new(move || sender.send("ran").unwrap()));
        assert_eq!(receiver.try_recv(), Ok("ran"));
    }

    #[cfg(feature = "async")]
    #[rstest]
    fn serial_dispatcher_preserves_order() {
        let dispatcher = SerialDispatcher::current();
        let (sender, receiver) = std_mpsc::channel();
        for index in 0..100 {
            let sender = sender.clone();
            dispatcher.dispatch(Box::new(move || sender.send(index).unwrap()));
        }
        drop(sender);
        let order: Vec<i32> = receiver.iter().take(100).collect();
        assert_eq!(order, (0..100).collect::<Vec<_>>());
    }

    #[cfg(feature = "async")]
    #[rstest]
    fn serial_dispatcher_survives_a_panicking_job() {
        let dispatcher = SerialDispatcher::current();
        let (sender, receiver) = std_mpsc::channel();
        dispatcher.dispatch(Box::new(|| panic!("job failed")));
        dispatcher.dispatch(Box::new(move || sender.send("after").unwrap()));
        assert_eq!(
            receiver.recv_timeout(std::time::Duration::from_secs(5)),
            Ok("after")
        );
    }

    #[cfg(feature = "async")]
    #[rstest]
    fn runtime_shuts_down_while_a_serial_pipeline_is_alive() {
        use super::super::{ContinuationDropped, Later, operation};
        use std::time::Duration;
        use tokio::runtime::Builder;

        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .unwrap();
        let pipeline = operation(SerialDispatcher::new(runtime.handle()), || 1);
        assert_eq!(pipeline.wait(), Ok(1));

        let (sender, receiver) = std_mpsc::channel();
        std::thread::spawn(move || {
            drop(runtime);
            sender.send(()).unwrap();
        });
        assert_eq!(receiver.recv_timeout(Duration::from_secs(5)), Ok(()));

        assert_eq!(pipeline.wait(), Err(ContinuationDropped));
    }

    #[cfg(feature = "async")]
    #[rstest]
    fn tokio_dispatcher_runs_jobs_off_thread() {
        let caller = std::thread::current().id();
        let (sender, receiver) = std_mpsc::channel();
        TokioDispatcher::current()
            .dispatch(Box::new(move || sender.send(std::thread::current().id()).unwrap()));
        assert_ne!(receiver.recv().unwrap(), caller);
    }
}
