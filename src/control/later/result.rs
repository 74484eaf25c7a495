//! Combinators for computations that deliver a `Result`.
//!
//! Errors short-circuit: once a step produces `Err`, the remaining
//! `Ok`-side steps are skipped and the error is delivered as is.
//!
//! ```rust
//! use std::num::ParseIntError;
//!
//! use fnkit::control::later::{self, Later, TryLater};
//!
//! let parsed = later::pure("17")
//!     .map(|text| text.parse::<u32>())
//!     .map_ok(|value| value + 1)
//!     .fold(|value| format!("got {value}"), |error: ParseIntError| error.to_string());
//!
//! let (sender, receiver) = std::sync::mpsc::channel();
//! parsed.start(move |message| sender.send(message).unwrap());
//! assert_eq!(receiver.recv().unwrap(), "got 18");
//! ```

use super::{AndThenOk, Later};

/// Extension methods for a [`Later`] whose output is `Result<T, E>`.
pub trait TryLater<T, E>: Later<Output = Result<T, E>> + Sized
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Applies a fallible function to the success value.
    fn try_map<U, F>(self, function: F) -> impl Later<Output = Result<U, E>>
    where
        F: Fn(T) -> Result<U, E> + Send + Sync + 'static,
        U: Send + 'static,
    {
        self.map(move |result: Result<T, E>| result.and_then(&function))
    }

    /// Transforms the success value.
    fn map_ok<U, F>(self, function: F) -> impl Later<Output = Result<U, E>>
    where
        F: Fn(T) -> U + Send + Sync + 'static,
        U: Send + 'static,
    {
        self.map(move |result: Result<T, E>| result.map(&function))
    }

    /// Transforms the error value.
    fn map_err<E2, F>(self, function: F) -> impl Later<Output = Result<T, E2>>
    where
        F: Fn(E) -> E2 + Send + Sync + 'static,
        E2: Send + 'static,
    {
        self.map(move |result: Result<T, E>| result.map_err(&function))
    }

    /// Runs the next fallible computation on success.
    fn and_then_ok<U, Next, F>(self, function: F) -> AndThenOk<Self, F>
    where
        F: Fn(T) -> Next + Send + Sync + 'static,
        Next: Later<Output = Result<U, E>>,
        U: Send + 'static,
    {
        AndThenOk::new(self, function)
    }

    /// Replaces an error with a success value.
    fn recover<F>(self, function: F) -> impl Later<Output = T>
    where
        F: Fn(E) -> T + Send + Sync + 'static,
    {
        self.map(move |result: Result<T, E>| result.unwrap_or_else(&function))
    }

    /// Collapses both outcomes into one value.
    fn fold<U, OnOk, OnErr>(self, on_ok: OnOk, on_err: OnErr) -> impl Later<Output = U>
    where
        OnOk: Fn(T) -> U + Send + Sync + 'static,
        OnErr: Fn(E) -> U + Send + Sync + 'static,
        U: Send + 'static,
    {
        self.map(move |result: Result<T, E>| match result {
            Ok(value) => on_ok(value),
            Err(error) => on_err(error),
        })
    }
}

impl<L, T, E> TryLater<T, E> for L
where
    L: Later<Output = Result<T, E>>,
    T: Send + 'static,
    E: Send + 'static,
{
}
