//! Left-to-right application.

/// Threads a value through functions left to right:
/// `pipe!(x, f, g, h) == h(g(f(x)))`.
///
/// Unlike [`compose!`](crate::compose!), the value is applied immediately.
/// See [`Pipe`](crate::compose::Pipe) for the method form.
///
/// ```
/// use fnkit::pipe;
///
/// let total = pipe!(
///     "3, 4, 5",
///     |text: &str| text.split(", ").map(str::parse::<u32>).collect::<Result<Vec<_>, _>>(),
///     |numbers: Result<Vec<u32>, std::num::ParseIntError>| numbers.map(|numbers| numbers.into_iter().sum::<u32>()),
/// );
/// assert_eq!(total, Ok(12));
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(, $function:expr)* $(,)?) => {{
        let piped = $value;
        $( let piped = ($function)(piped); )*
        piped
    }};
}
