//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely, plus the
//! validated `TaxRate` the cart applies when computing gross totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In floating point:                                                 │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Minor Units                                  │
//! │    All prices are i64 counts of the smallest currency denomination  │
//! │    (cents, groszy, ...). Rounding happens in exactly one place,     │
//! │    with one documented rule.                                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding Rule
//! Gross totals round the tax surcharge **half up** on the final integer
//! result: `(net * percent + 50) / 100` in non-negative integer arithmetic.
//! Every tax computation in the crate goes through [`Money::with_tax`], so
//! the rule cannot drift between call sites.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::error::{CartError, CartResult};

// =============================================================================
// Tax Rate
// =============================================================================

/// The tax percentages a product may carry.
pub const ALLOWED_TAX_RATES: [u32; 4] = [0, 5, 8, 23];

/// A validated tax rate, expressed as an integer percentage.
///
/// Construction is only possible through [`TaxRate::from_percent`], which
/// admits exactly the rates in [`ALLOWED_TAX_RATES`]. Code holding a
/// `TaxRate` can therefore rely on it being one of the enumerated values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from an integer percentage.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::money::TaxRate;
    ///
    /// assert_eq!(TaxRate::from_percent(23).unwrap().percent(), 23);
    /// assert!(TaxRate::from_percent(7).is_err());
    /// ```
    pub fn from_percent(percent: u32) -> CartResult<Self> {
        if !ALLOWED_TAX_RATES.contains(&percent) {
            return Err(CartError::InvalidTaxRate {
                percent,
                allowed: ALLOWED_TAX_RATES,
            });
        }

        Ok(TaxRate(percent))
    }

    /// Returns the rate as an integer percentage.
    #[inline]
    pub const fn percent(&self) -> u32 {
        self.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if the tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: leaves room for refund/correction flows upstream
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units (cents).
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // 10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Computes the tax surcharge for this net amount.
    ///
    /// ## Rounding
    /// Half-up on the final integer result: `(net * percent + 50) / 100`.
    /// i128 intermediates prevent overflow on large amounts.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::money::{Money, TaxRate};
    ///
    /// let net = Money::from_cents(2000);
    /// let rate = TaxRate::from_percent(23).unwrap();
    /// assert_eq!(net.tax_amount(rate).cents(), 460);
    /// ```
    pub fn tax_amount(&self, rate: TaxRate) -> Money {
        let surcharge = (self.0 as i128 * rate.percent() as i128 + 50) / 100;
        Money::from_cents(surcharge as i64)
    }

    /// Returns this net amount plus its tax surcharge (the gross amount).
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::money::{Money, TaxRate};
    ///
    /// let net = Money::from_cents(2000);
    /// let rate = TaxRate::from_percent(23).unwrap();
    /// assert_eq!(net.with_tax(rate).cents(), 2460);
    /// ```
    pub fn with_tax(&self, rate: TaxRate) -> Money {
        *self + self.tax_amount(rate)
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299);
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging. Use frontend formatting for actual UI display
/// to handle currency symbols and localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
