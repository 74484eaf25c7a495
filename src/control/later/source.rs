//! Leaf computations: values, thunks, raw callbacks and dispatched work.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use super::{Continuation, Dispatcher, Later};

/// Returned by [`pure`].
#[derive(Debug, Clone)]
pub struct Pure<T> {
    value: T,
}

/// Delivers a clone of `value` on every run.
pub const fn pure<T>(value: T) -> Pure<T> {
    Pure { value }
}

impl<T> Later for Pure<T>
where
    T: Clone + Send + Sync + 'static,
{
    type Output = T;

    fn run(&self, continuation: Continuation<T>) {
        continuation(self.value.clone());
    }
}

/// Returned by [`lazy`].
#[derive(Clone)]
pub struct Lazy<F> {
    function: F,
}

/// Calls `function` on every run and delivers its result synchronously.
pub const fn lazy<F>(function: F) -> Lazy<F> {
    Lazy { function }
}

impl<F, T> Later for Lazy<F>
where
    F: Fn() -> T + Send + Sync + 'static,
    T: Send + 'static,
{
    type Output = T;

    fn run(&self, continuation: Continuation<T>) {
        continuation((self.function)());
    }
}

/// Returned by [`from_fn`].
pub struct FromFn<F, T> {
    function: F,
    output: PhantomData<fn() -> T>,
}

/// Adapts a callback-style API.
///
/// `function` receives the continuation on every run and must call it at
/// most once, from any thread.
///
/// ```rust
/// use std::sync::mpsc;
/// use std::thread;
///
/// use fnkit::control::later::{self, Continuation, Later};
///
/// let threaded = later::from_fn(|continuation: Continuation<u8>| {
///     thread::spawn(move || continuation(7));
/// });
///
/// let (sender, receiver) = mpsc::channel();
/// threaded.start(move |value| sender.send(value).unwrap());
/// assert_eq!(receiver.recv().unwrap(), 7);
/// ```
pub const fn from_fn<T, F>(function: F) -> FromFn<F, T>
where
    F: Fn(Continuation<T>),
{
    FromFn {
        function,
        output: PhantomData,
    }
}

impl<F, T> Later for FromFn<F, T>
where
    F: Fn(Continuation<T>) + Send + Sync + 'static,
    T: Send + 'static,
{
    type Output = T;

    fn run(&self, continuation: Continuation<T>) {
        (self.function)(continuation);
    }
}

impl<F, T> fmt::Debug for FromFn<F, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("FromFn").finish_non_exhaustive()
    }
}

/// Returned by [`operation`].
pub struct Operation<D, F> {
    dispatcher: D,
    work: Arc<F>,
}

/// Submits blocking `work` to `dispatcher` on every run and delivers its
/// result from the dispatcher's thread.
pub fn operation<D, F, T>(dispatcher: D, work: F) -> Operation<D, F>
where
    D: Dispatcher,
    F: Fn() -> T + Send + Sync + 'static,
{
    Operation {
        dispatcher,
        work: Arc::new(work),
    }
}

impl<D, F, T> Later for Operation<D, F>
where
    D: Dispatcher,
    F: Fn() -> T + Send + Sync + 'static,
    T: Send + 'static,
{
    type Output = T;

    fn run(&self, continuation: Continuation<T>) {
        let work = Arc::clone(&self.work);
        tracing::trace!("submitting operation");
        self.dispatcher
            .dispatch(Box::new(move || continuation(work())));
    }
}

impl<D: fmt::Debug, F> fmt::Debug for Operation<D, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Operation")
            .field("dispatcher", &self.dispatcher)
            .finish_non_exhaustive()
    }
}
