//! Character-class refinements for anything that views as `str`.
//!
//! These rules hold vacuously for the empty string; combine them with
//! [`NonEmpty`](super::NonEmpty) when that matters.
//!
//! ```rust
//! use fnkit::refined::{Alphanumeric, Both, Lowercase, NonEmpty, Refined};
//!
//! type Slug = Refined<String, Both<NonEmpty, Both<Alphanumeric, Lowercase>>>;
//!
//! assert!(Slug::new(String::from("fnkit2")).is_ok());
//! assert!(Slug::new(String::from("FnKit")).is_err());
//! ```

use super::Refinement;

/// No leading or trailing whitespace.
pub struct Trimmed;

/// Only ASCII characters.
pub struct Ascii;

/// Only alphanumeric characters.
pub struct Alphanumeric;

/// No uppercase characters.
pub struct Lowercase;

/// No lowercase characters.
pub struct Uppercase;

macro_rules! str_refinement {
    ($($rule:ident => $description:literal, |$text:ident| $check:expr;)*) => {
        $(
            impl<T: AsRef<str> + ?Sized> Refinement<T> for $rule {
                fn is_valid(value: &T) -> bool {
                    let $text = value.as_ref();
                    $check
                }

                fn description() -> String {
                    String::from($description)
                }
            }
        )*
    };
}

str_refinement! {
    Trimmed => "trimmed", |text| text.trim() == text;
    Ascii => "ASCII", |text| text.is_ascii();
    Alphanumeric => "alphanumeric", |text| text.chars().all(char::is_alphanumeric);
    Lowercase => "lowercase", |text| !text.chars().any(char::is_uppercase);
    Uppercase => "uppercase", |text| !text.chars().any(char::is_lowercase);
}
