//! Error types for the numeric tower.

use thiserror::Error;

/// Errors raised by constructors and forced narrowing casts.
///
/// Checked narrowing (`try_to_*`) reports failure through `Option` instead;
/// this type is reserved for undefined values and casts the caller insisted on.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NumericError {
    /// A zero denominator, a zeroth root, or a reciprocal of zero.
    #[error("division by zero: {context}")]
    DivideByZero {
        /// What was being divided.
        context: &'static str,
    },

    /// A forced downcast whose target shape cannot hold the value.
    #[error("cannot cast {from} to {to}: {reason}")]
    InvalidCast {
        /// Source shape.
        from: &'static str,
        /// Target shape.
        to: &'static str,
        /// The invariant that blocked the cast.
        reason: &'static str,
    },

    /// Operands exceed the bounded range an approximation needs.
    #[error("numbers are too big for {operation}")]
    TooBig {
        /// The approximation that was attempted.
        operation: &'static str,
    },

    /// An even root of a negative radicand has no real value.
    #[error("even root of a negative radicand is not real")]
    NotReal,
}

impl NumericError {
    pub(crate) const fn divide_by_zero(context: &'static str) -> Self {
        Self::DivideByZero { context }
    }

    pub(crate) const fn invalid_cast(
        from: &'static str,
        to: &'static str,
        reason: &'static str,
    ) -> Self {
        Self::InvalidCast { from, to, reason }
    }
}

/// Result alias for fallible numeric operations.
pub type Result<T> = std::result::Result<T, NumericError>;
