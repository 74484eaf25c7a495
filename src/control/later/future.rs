//! Bridges between [`Later`] and Rust futures.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures::channel::oneshot;
use tokio::runtime::Handle;

use super::{Continuation, Later};

/// The computation finished without calling its continuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("continuation was dropped without being called")]
pub struct ContinuationDropped;

/// A started [`Later`], returned by [`Later::future`].
#[derive(Debug)]
#[must_use = "futures do nothing unless polled, but the computation has already started"]
pub struct LaterFuture<T> {
    receiver: oneshot::Receiver<T>,
}

impl<T: Send + 'static> LaterFuture<T> {
    pub(super) fn start<L>(later: &L) -> Self
    where
        L: Later<Output = T> + ?Sized,
    {
        let (sender, receiver) = oneshot::channel();
        later.run(Box::new(move |value| {
            if sender.send(value).is_err() {
                tracing::trace!("later future dropped before its value arrived");
            }
        }));
        Self { receiver }
    }
}

impl<T> Future for LaterFuture<T> {
    type Output = Result<T, ContinuationDropped>;

    fn poll(mut self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver)
            .poll(context)
            .map_err(|_| ContinuationDropped)
    }
}

/// Returned by [`from_future`].
pub struct FromFuture<F> {
    handle: Handle,
    factory: Arc<F>,
}

/// Spawns a fresh future from `factory` on the runtime behind `handle` on
/// every run; its output is delivered from the runtime.
///
/// ```rust
/// use fnkit::control::later::{self, Later, runtime};
///
/// let delayed = later::from_future(runtime::handle(), || async {
///     tokio::task::yield_now().await;
///     "ready"
/// });
/// assert_eq!(delayed.wait(), Ok("ready"));
/// ```
pub fn from_future<F, Fut>(handle: Handle, factory: F) -> FromFuture<F>
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future + Send + 'static,
{
    FromFuture {
        handle,
        factory: Arc::new(factory),
    }
}

impl<F, Fut> Later for FromFuture<F>
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future + Send + 'static,
    Fut::Output: Send + 'static,
{
    type Output = Fut::Output;

    fn run(&self, continuation: Continuation<Fut::Output>) {
        let future = (self.factory)();
        tracing::trace!("spawning future");
        drop(self.handle.spawn(async move { continuation(future.await) }));
    }
}
