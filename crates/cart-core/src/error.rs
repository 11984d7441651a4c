//! # Error Types
//!
//! Domain-specific error types for cart-core.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (limits, offending values)
//! 3. Errors are enum variants, never String
//! 4. Every failure is a deterministic function of the input: the same call
//!    with the same arguments fails the same way, so callers must never
//!    retry without changing the input
//!
//! ## Propagation Policy
//! Every validation failure aborts the triggering call with no partial
//! mutation, and nothing is caught or suppressed inside the crate. Errors
//! always surface to the immediate caller, which reports them at the
//! application boundary.

use thiserror::Error;

// =============================================================================
// Cart Error
// =============================================================================

/// Cart domain errors.
///
/// All variants are local, synchronous validation failures - never
/// transient or retryable.
#[derive(Debug, Error)]
pub enum CartError {
    /// A concrete unit price below one minor currency unit.
    ///
    /// `None`/unset is a valid "not priced yet" state and does not raise
    /// this error; only a present value smaller than 1 does.
    #[error("unit price must be at least 1 minor unit, got {cents}")]
    InvalidUnitPrice { cents: i64 },

    /// A concrete tax percentage outside the supported rate set.
    #[error("tax rate must be one of {allowed:?} percent, got {percent}")]
    InvalidTaxRate { percent: u32, allowed: [u32; 4] },

    /// Minimum order quantity below the floor of 1.
    #[error("minimum quantity must be at least 1, got {quantity}")]
    InvalidMinimumQuantity { quantity: i64 },

    /// An item's quantity set or incremented below its product's minimum.
    ///
    /// ## When This Occurs
    /// - `Item` construction with too small an initial quantity
    /// - `Item::set_quantity` / `Cart::set_quantity` with a value below
    ///   the product's minimum
    /// - `Cart::add_product` merging into an existing line such that the
    ///   combined quantity still falls below the minimum
    #[error("at least {minimum} unit(s) of this product must be ordered, requested {requested}")]
    QuantityTooLow { minimum: i64, requested: i64 },

    /// Positional cart access outside the current line range.
    #[error("no cart line at position {position}, cart holds {len} line(s)")]
    OutOfRange { position: usize, len: usize },

    /// A line total was requested before the line's quantity was decided.
    ///
    /// Totals fail fast on incomplete lines instead of silently coercing
    /// an unset quantity to zero.
    #[error("line total requested for an item with no quantity set")]
    MissingQuantity,

    /// A line total was requested for a product that has no unit price yet.
    #[error("line total requested for a product with no unit price set")]
    MissingUnitPrice,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CartError.
pub type CartResult<T> = Result<T, CartError>;

// =============================================================================
// Unit Tests
// =============================================================================
