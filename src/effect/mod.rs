//! Writer-style effects.
//!
//! - [`Changeable`]: a value paired with a monotonic "changed" flag, for
//!   pipelines that must report whether any stage modified their input.
//!
//! ```rust
//! use fnkit::effect::Changeable;
//!
//! let trimmed = Changeable::unchanged(String::from("  padded "))
//!     .update(|text| text.trim().to_string())
//!     .update(|text| text.to_lowercase());
//!
//! assert_eq!(trimmed.into_parts(), (String::from("padded"), true));
//! ```

mod changeable;

pub use changeable::Changeable;
