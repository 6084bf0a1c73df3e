//! # Surd
//!
//! Exact arithmetic over integers, rationals, and real roots of rationals.
//!
//! Every value is kept in a canonical form after each operation, so
//! equality and ordering are exact; no floating-point value is ever consulted
//! except by the explicit approximation methods.
//!
//! ## Features
//!
//! - **Arbitrary Precision**: integers backed by `dashu`, no overflow
//! - **Canonical Fractions**: always reduced, denominator always positive
//! - **Radicals**: `Root` extracts exact prime-power roots on construction
//! - **Checked Narrowing**: downcasts report failure instead of losing data
//!
//! ## Quick Start
//!
//! ```rust
//! use surd::prelude::*;
//!
//! let third = Fraction::from_i64(1, 3);
//! let sixth = Fraction::from_i64(1, 6);
//! assert_eq!(third + sixth, Fraction::from_i64(1, 2));
//!
//! let root = Root::new(Integer::new(4), Fraction::from(16));
//! assert_eq!(root.try_to_integer(), Some(Integer::new(2)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use surd_numeric as numeric;
pub use surd_numeric::{Fraction, Integer, NumericError, Root};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use num_traits::{One, Zero};
    pub use surd_numeric::{Fraction, Integer, NumericError, PrimeDivisors, Root};
}
