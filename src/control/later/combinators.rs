//! Adapter types returned by the [`Later`] combinator methods.
//!
//! Functions are held behind an `Arc` because the upstream may deliver its
//! value on another thread after `run` has returned.

use std::sync::Arc;

use parking_lot::Mutex;

use super::{Continuation, Dispatcher, Later};

/// Returned by [`Later::map`].
pub struct Map<L, F> {
    upstream: L,
    function: Arc<F>,
}

impl<L, F> Map<L, F> {
    pub(super) fn new(upstream: L, function: F) -> Self {
        Self {
            upstream,
            function: Arc::new(function),
        }
    }
}

impl<L, F, B> Later for Map<L, F>
where
    L: Later,
    F: Fn(L::Output) -> B + Send + Sync + 'static,
    B: Send + 'static,
{
    type Output = B;

    fn run(&self, continuation: Continuation<B>) {
        let function = Arc::clone(&self.function);
        self.upstream
            .run(Box::new(move |value| continuation(function(value))));
    }
}

/// Returned by [`Later::flat_map`] and [`Later::bind`].
pub struct FlatMap<L, F> {
    upstream: L,
    function: Arc<F>,
}

impl<L, F> FlatMap<L, F> {
    pub(super) fn new(upstream: L, function: F) -> Self {
        Self {
            upstream,
            function: Arc::new(function),
        }
    }
}

impl<L, F, Next> Later for FlatMap<L, F>
where
    L: Later,
    F: Fn(L::Output) -> Next + Send + Sync + 'static,
    Next: Later,
{
    type Output = Next::Output;

    fn run(&self, continuation: Continuation<Next::Output>) {
        let function = Arc::clone(&self.function);
        self.upstream
            .run(Box::new(move |value| function(value).run(continuation)));
    }
}

/// Returned by [`Later::then`].
pub struct Then<L, Next> {
    first: L,
    second: Arc<Next>,
}

impl<L, Next> Then<L, Next> {
    pub(super) fn new(first: L, second: Next) -> Self {
        Self {
            first,
            second: Arc::new(second),
        }
    }
}

impl<L: Later, Next: Later> Later for Then<L, Next> {
    type Output = Next::Output;

    fn run(&self, continuation: Continuation<Next::Output>) {
        let second = Arc::clone(&self.second);
        self.first.run(Box::new(move |_| second.run(continuation)));
    }
}

/// Returned by [`Later::tap`].
pub struct Tap<L, F> {
    upstream: L,
    function: Arc<F>,
}

impl<L, F> Tap<L, F> {
    pub(super) fn new(upstream: L, function: F) -> Self {
        Self {
            upstream,
            function: Arc::new(function),
        }
    }
}

impl<L, F> Later for Tap<L, F>
where
    L: Later,
    F: Fn(&L::Output) + Send + Sync + 'static,
{
    type Output = L::Output;

    fn run(&self, continuation: Continuation<L::Output>) {
        let function = Arc::clone(&self.function);
        self.upstream.run(Box::new(move |value| {
            function(&value);
            continuation(value);
        }));
    }
}

/// Returned by [`Later::zip`].
pub struct Zip<L, R> {
    left: L,
    right: R,
}

impl<L, R> Zip<L, R> {
    pub(super) const fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

struct Pending<A, B> {
    left: Option<A>,
    right: Option<B>,
    continuation: Option<Continuation<(A, B)>>,
}

impl<A, B> Pending<A, B> {
    fn deliver(state: &Mutex<Self>, store: impl FnOnce(&mut Self)) {
        let ready = {
            let mut pending = state.lock();
            store(&mut pending);
            if pending.left.is_some() && pending.right.is_some() {
                let pair = pending.left.take().zip(pending.right.take());
                pair.zip(pending.continuation.take())
            } else {
                None
            }
        };
        if let Some((pair, continuation)) = ready {
            continuation(pair);
        }
    }
}

impl<L: Later, R: Later> Later for Zip<L, R> {
    type Output = (L::Output, R::Output);

    fn run(&self, continuation: Continuation<Self::Output>) {
        let state = Arc::new(Mutex::new(Pending {
            left: None,
            right: None,
            continuation: Some(continuation),
        }));
        let left_state = Arc::clone(&state);
        self.left.run(Box::new(move |value| {
            Pending::deliver(&left_state, |pending| pending.left = Some(value));
        }));
        self.right.run(Box::new(move |value| {
            Pending::deliver(&state, |pending| pending.right = Some(value));
        }));
    }
}

/// Returned by [`Later::erase`].
pub struct Erase<L> {
    upstream: L,
}

impl<L> Erase<L> {
    pub(super) const fn new(upstream: L) -> Self {
        Self { upstream }
    }
}

impl<L: Later> Later for Erase<L> {
    type Output = ();

    fn run(&self, continuation: Continuation<()>) {
        self.upstream.run(Box::new(move |_| continuation(())));
    }
}

/// Returned by [`Later::dispatch_on`].
pub struct DispatchOn<L, D> {
    upstream: L,
    dispatcher: Arc<D>,
}

impl<L, D> DispatchOn<L, D> {
    pub(super) fn new(upstream: L, dispatcher: D) -> Self {
        Self {
            upstream,
            dispatcher: Arc::new(dispatcher),
        }
    }
}

impl<L: Later, D: Dispatcher> Later for DispatchOn<L, D> {
    type Output = L::Output;

    fn run(&self, continuation: Continuation<L::Output>) {
        let dispatcher = Arc::clone(&self.dispatcher);
        self.upstream.run(Box::new(move |value| {
            tracing::trace!("dispatching delivery");
            dispatcher.dispatch(Box::new(move || continuation(value)));
        }));
    }
}

/// Returned by [`Later::start_on`].
pub struct StartOn<L, D> {
    upstream: Arc<L>,
    dispatcher: D,
}

impl<L, D> StartOn<L, D> {
    pub(super) fn new(upstream: L, dispatcher: D) -> Self {
        Self {
            upstream: Arc::new(upstream),
            dispatcher,
        }
    }
}

impl<L: Later, D: Dispatcher> Later for StartOn<L, D> {
    type Output = L::Output;

    fn run(&self, continuation: Continuation<L::Output>) {
        let upstream = Arc::clone(&self.upstream);
        tracing::trace!("dispatching start");
        self.dispatcher
            .dispatch(Box::new(move || upstream.run(continuation)));
    }
}

/// Returned by [`TryLater::and_then_ok`](super::TryLater::and_then_ok).
pub struct AndThenOk<L, F> {
    upstream: L,
    function: Arc<F>,
}

impl<L, F> AndThenOk<L, F> {
    pub(super) fn new(upstream: L, function: F) -> Self {
        Self {
            upstream,
            function: Arc::new(function),
        }
    }
}

impl<L, F, Next, T, U, E> Later for AndThenOk<L, F>
where
    L: Later<Output = Result<T, E>>,
    F: Fn(T) -> Next + Send + Sync + 'static,
    Next: Later<Output = Result<U, E>>,
    T: Send + 'static,
    U: Send + 'static,
    E: Send + 'static,
{
    type Output = Result<U, E>;

    fn run(&self, continuation: Continuation<Result<U, E>>) {
        let function = Arc::clone(&self.function);
        self.upstream.run(Box::new(move |result| match result {
            Ok(value) => function(value).run(continuation),
            Err(error) => continuation(Err(error)),
        }));
    }
}
