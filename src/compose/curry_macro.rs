//! Currying for functions of two to six arguments.
//!
//! The curried form shares the function behind an `Arc`, so partially
//! applied stages can be called repeatedly and sent across threads when the
//! function and the bound arguments allow it. Every argument except the
//! last is cloned on each call and must be `Clone`.

#[doc(hidden)]
#[macro_export]
macro_rules! __curry {
    ($function:ident; [$($bound:ident)*] [$last:ident]) => {
        move |$last| $function($(::std::clone::Clone::clone(&$bound),)* $last)
    };
    ($function:ident; [$($bound:ident)*] [$next:ident $($rest:ident)+]) => {
        move |$next| {
            let $function = ::std::sync::Arc::clone(&$function);
            $( let $bound = ::std::clone::Clone::clone(&$bound); )*
            $crate::__curry!($function; [$($bound)* $next] [$($rest)+])
        }
    };
}

/// Curries a function of two arguments: `curry2!(f)(a)(b) == f(a, b)`.
///
/// ```
/// use fnkit::curry2;
///
/// let greet = curry2!(|greeting: &str, name: &str| format!("{greeting}, {name}!"));
/// let hello = greet("Hello");
/// assert_eq!(hello("Ferris"), "Hello, Ferris!");
/// assert_eq!(hello("world"), "Hello, world!");
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::sync::Arc::new($function);
        $crate::__curry!(function; [] [first second])
    }};
}

/// Curries a function of three arguments.
///
/// ```
/// use fnkit::curry3;
///
/// fn clamp(low: i32, high: i32, value: i32) -> i32 {
///     value.clamp(low, high)
/// }
///
/// let percent = curry3!(clamp)(0)(100);
/// assert_eq!(percent(140), 100);
/// assert_eq!(percent(-5), 0);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::sync::Arc::new($function);
        $crate::__curry!(function; [] [first second third])
    }};
}

/// Curries a function of four arguments.
#[macro_export]
macro_rules! curry4 {
    ($function:expr $(,)?) => {{
        let function = ::std::sync::Arc::new($function);
        $crate::__curry!(function; [] [first second third fourth])
    }};
}

/// Curries a function of five arguments.
#[macro_export]
macro_rules! curry5 {
    ($function:expr $(,)?) => {{
        let function = ::std::sync::Arc::new($function);
        $crate::__curry!(function; [] [first second third fourth fifth])
    }};
}

/// Curries a function of six arguments.
#[macro_export]
macro_rules! curry6 {
    ($function:expr $(,)?) => {{
        let function = ::std::sync::Arc::new($function);
        $crate::__curry!(function; [] [first second third fourth fifth sixth])
    }};
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    fn sum6(a: i32, b: i32, c: i32, d: i32, e: i32, f: i32) -> i32 {
        a + b + c + d + e + f
    }

    #[rstest]
    fn arguments_keep_their_order() {
        let subtract = curry2!(|left: i32, right: i32| left - right);
        assert_eq!(subtract(10)(3), 7);

        let digits = curry4!(|a: u8, b: u8, c: u8, d: u8| format!("{a}{b}{c}{d}"));
        assert_eq!(digits(1)(2)(3)(4), "1234");
    }

    #[rstest]
    fn stages_are_reusable() {
        let join = curry3!(|separator: String, left: String, right: String| {
            format!("{left}{separator}{right}")
        });
        let dashed = join(String::from("-"));
        let from_a = dashed(String::from("a"));
        assert_eq!(from_a(String::from("b")), "a-b");
        assert_eq!(from_a(String::from("c")), "a-c");
        assert_eq!(dashed(String::from("x"))(String::from("y")), "x-y");
    }

    #[rstest]
    fn six_arguments() {
        assert_eq!(curry6!(sum6)(1)(2)(3)(4)(5)(6), 21);
        let partial = curry5!(|a: i32, b: i32, c: i32, d: i32, e: i32| sum6(a, b, c, d, e, 0));
        assert_eq!(partial(1)(1)(1)(1)(1), 5);
    }

    #[rstest]
    fn stages_cross_threads() {
        let scale = curry2!(|factor: i64, value: i64| factor * value);
        let triple = scale(3);
        let handle = std::thread::spawn(move || triple(14));
        assert_eq!(handle.join().unwrap(), 42);
    }
}
