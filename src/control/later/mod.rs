//! Later - lazy, continuation-passing asynchronous values.
//!
//! A [`Later`] describes a computation that delivers exactly one value to a
//! callback (its [`Continuation`]). Building a `Later` does nothing; work
//! happens only when [`Later::run`] is called, and every call performs the
//! whole computation again. Nothing is memoized or shared between runs.
//!
//! Combinators mirror those of [`Iterator`]: each returns a small adapter
//! struct that is itself a `Later`, so a pipeline is a nested type that the
//! compiler can inline. Use [`Later::boxed`] to erase it when a nameable type
//! is needed.
//!
//! Where the work runs is decided by a [`Dispatcher`]. The library never
//! spawns threads of its own; it hands jobs to the dispatcher it is given
//! ([`Immediate`], or with the `async` feature the tokio-backed
//! [`TokioDispatcher`] and [`SerialDispatcher`]).
//!
//! # Examples
//!
//! ```rust
//! use std::sync::mpsc;
//!
//! use fnkit::control::later::{self, Later};
//!
//! let parsed = later::pure("42")
//!     .map(|text| text.parse::<i32>())
//!     .map(|result| result.unwrap_or_default())
//!     .flat_map(|value| later::lazy(move || value * 2));
//!
//! let (sender, receiver) = mpsc::channel();
//! parsed.start(move |value| sender.send(value).unwrap());
//! assert_eq!(receiver.recv().unwrap(), 84);
//! ```
//!
//! With the `async` feature a `Later` can be awaited:
//!
//! ```rust
//! # #[cfg(feature = "async")]
//! # {
//! use fnkit::control::later::{self, Later, TokioDispatcher};
//!
//! let total = later::operation(TokioDispatcher::current(), || (1..=10).sum::<u32>());
//! assert_eq!(total.wait(), Ok(55));
//! # }
//! ```

mod combinators;
mod dispatch;
mod result;
mod source;

#[cfg(feature = "async")]
mod future;
#[cfg(feature = "http")]
pub mod http;
#[cfg(feature = "async")]
pub mod runtime;

use std::fmt;
use std::sync::Arc;

pub use combinators::{AndThenOk, DispatchOn, Erase, FlatMap, Map, StartOn, Tap, Then, Zip};
#[cfg(feature = "async")]
pub use dispatch::{SerialDispatcher, TokioDispatcher};
pub use dispatch::{Dispatcher, Immediate, Job};
#[cfg(feature = "async")]
pub use future::{ContinuationDropped, FromFuture, LaterFuture, from_future};
pub use result::TryLater;
pub use source::{FromFn, Lazy, Operation, Pure, from_fn, lazy, operation, pure};

/// The callback that receives the value of a [`Later`].
pub type Continuation<T> = Box<dyn FnOnce(T) + Send>;

/// A lazy computation that delivers one value to a continuation.
///
/// Implementations must call the continuation at most once per `run`, and
/// may call it on any thread.
pub trait Later: Send + Sync + 'static {
    /// The value delivered to the continuation.
    type Output: Send + 'static;

    /// Starts the computation; `continuation` receives its result.
    fn run(&self, continuation: Continuation<Self::Output>);

    /// Starts the computation with an unboxed callback.
    fn start<F>(&self, callback: F)
    where
        Self: Sized,
        F: FnOnce(Self::Output) + Send + 'static,
    {
        self.run(Box::new(callback));
    }

    /// Transforms the delivered value.
    fn map<B, F>(self, function: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> B + Send + Sync + 'static,
        B: Send + 'static,
    {
        Map::new(self, function)
    }

    /// Feeds the delivered value into the next computation and runs it.
    fn flat_map<L, F>(self, function: F) -> FlatMap<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> L + Send + Sync + 'static,
        L: Later,
    {
        FlatMap::new(self, function)
    }

    /// Alias for [`flat_map`](Later::flat_map).
    #[inline]
    fn bind<L, F>(self, function: F) -> FlatMap<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> L + Send + Sync + 'static,
        L: Later,
    {
        self.flat_map(function)
    }

    /// Runs `next` once this computation completes, discarding this output.
    fn then<L>(self, next: L) -> Then<Self, L>
    where
        Self: Sized,
        L: Later,
    {
        Then::new(self, next)
    }

    /// Observes the delivered value without changing it.
    fn tap<F>(self, function: F) -> Tap<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Output) + Send + Sync + 'static,
    {
        Tap::new(self, function)
    }

    /// Starts both computations and delivers both values once each is ready.
    fn zip<L>(self, other: L) -> Zip<Self, L>
    where
        Self: Sized,
        L: Later,
    {
        Zip::new(self, other)
    }

    /// Discards the delivered value.
    fn erase(self) -> Erase<Self>
    where
        Self: Sized,
    {
        Erase::new(self)
    }

    /// Delivers the value through `dispatcher` instead of on the producing thread.
    fn dispatch_on<D>(self, dispatcher: D) -> DispatchOn<Self, D>
    where
        Self: Sized,
        D: Dispatcher,
    {
        DispatchOn::new(self, dispatcher)
    }

    /// Starts the computation through `dispatcher`.
    fn start_on<D>(self, dispatcher: D) -> StartOn<Self, D>
    where
        Self: Sized,
        D: Dispatcher,
    {
        StartOn::new(self, dispatcher)
    }

    /// Erases the concrete pipeline type.
    fn boxed(self) -> BoxedLater<Self::Output>
    where
        Self: Sized,
    {
        BoxedLater {
            inner: Arc::new(self),
        }
    }

    /// Starts the computation and returns a future of its value.
    ///
    /// The future resolves to [`ContinuationDropped`] if the computation
    /// finishes without calling its continuation.
    #[cfg(feature = "async")]
    fn future(&self) -> LaterFuture<Self::Output>
    where
        Self: Sized,
    {
        LaterFuture::start(self)
    }

    /// Starts the computation and blocks the current thread until it delivers.
    ///
    /// This must not be called from inside an async task whose runtime is
    /// needed to finish the computation.
    #[cfg(feature = "async")]
    fn wait(&self) -> Result<Self::Output, ContinuationDropped>
    where
        Self: Sized,
    {
        futures::executor::block_on(self.future())
    }
}

impl<L: Later + ?Sized> Later for Arc<L> {
    type Output = L::Output;

    fn run(&self, continuation: Continuation<Self::Output>) {
        (**self).run(continuation);
    }
}

impl<L: Later + ?Sized> Later for Box<L> {
    type Output = L::Output;

    fn run(&self, continuation: Continuation<Self::Output>) {
        (**self).run(continuation);
    }
}

/// A type-erased [`Later`]. Cloning shares the underlying pipeline.
pub struct BoxedLater<T> {
    inner: Arc<dyn Later<Output = T>>,
}

impl<T: Send + 'static> Later for BoxedLater<T> {
    type Output = T;

    fn run(&self, continuation: Continuation<T>) {
        self.inner.run(continuation);
    }

    fn boxed(self) -> BoxedLater<T> {
        self
    }
}

impl<T> Clone for BoxedLater<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> fmt::Debug for BoxedLater<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("BoxedLater").finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(BoxedLater<String>: Later, Send, Sync, Clone);
