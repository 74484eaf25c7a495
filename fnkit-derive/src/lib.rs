//! Derive macros for fnkit's algebraic type classes.
//!
//! - [`Semigroup`]: combines two values field by field
//! - [`Monoid`]: builds the identity value field by field
//!
//! Both work on structs with named fields, tuple structs and unit structs.
//! Every field type must itself implement the trait being derived; the
//! generated impl carries one `where` bound per field type, so generic
//! structs get instances exactly when their fields do.
//!
//! The macros are re-exported by `fnkit` under the `derive` feature and
//! should be used through `fnkit::typeclass`:
//!
//! ```rust,ignore
//! use fnkit::typeclass::{Monoid, Semigroup, Sum};
//!
//! #[derive(Debug, PartialEq, Semigroup, Monoid)]
//! struct Totals {
//!     count: Sum<u32>,
//!     names: Vec<String>,
//! }
//!
//! let combined = Totals::combine_all([
//!     Totals { count: Sum(1), names: vec![String::from("a")] },
//!     Totals { count: Sum(2), names: vec![String::from("b")] },
//! ]);
//! assert_eq!(combined.count, Sum(3));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod fields;
mod monoid;
mod semigroup;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derives `fnkit::typeclass::Semigroup` by combining each field with
/// the corresponding field of the other value.
///
/// Enums and unions are rejected: there is no single lawful way to combine
/// two different variants.
#[proc_macro_derive(Semigroup)]
pub fn derive_semigroup(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    semigroup::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derives `fnkit::typeclass::Monoid` by building every field from its
/// own `empty()`.
///
/// The type must also implement `Semigroup`, usually by deriving it too.
#[proc_macro_derive(Monoid)]
pub fn derive_monoid(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    monoid::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
