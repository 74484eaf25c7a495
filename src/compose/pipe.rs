//! Pipe-forward as a method.

/// Applies a function to `self` in method position, so transformations read
/// left to right: `value.pipe(f).pipe(g)` is `g(f(value))`.
///
/// Implemented for every type.
///
/// ```
/// use fnkit::compose::Pipe;
///
/// let label = 7_u32
///     .pipe(|count| count * 3)
///     .pipe(|count| format!("{count} items"));
/// assert_eq!(label, "21 items");
///
/// let length = "borrowed".pipe_ref(|text| text.len());
/// assert_eq!(length, 8);
/// ```
pub trait Pipe {
    /// Passes `self` by value to `function`.
    #[inline]
    fn pipe<R, F>(self, function: F) -> R
    where
        Self: Sized,
        F: FnOnce(Self) -> R,
    {
        function(self)
    }

    /// Passes `self` by reference to `function`.
    #[inline]
    fn pipe_ref<'a, R, F>(&'a self, function: F) -> R
    where
        F: FnOnce(&'a Self) -> R,
    {
        function(self)
    }

    /// Passes `self` by mutable reference to `function`.
    #[inline]
    fn pipe_mut<'a, R, F>(&'a mut self, function: F) -> R
    where
        F: FnOnce(&'a mut Self) -> R,
    {
        function(self)
    }
}

impl<T: ?Sized> Pipe for T {}
