//! # Product Entity
//!
//! A catalog product with validated pricing rules.
//!
//! ## Identity, Not Value
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  "Same product" in a cart means SAME INSTANCE, not equal fields.    │
//! │                                                                     │
//! │  Product::new(..).into_handle()  ──►  ProductHandle (Rc<Product>)   │
//! │                                                                     │
//! │  Two handles cloned from one product:   identity-equal  → merged    │
//! │  Two products built from equal fields:  distinct        → 2 lines   │
//! │                                                                     │
//! │  The cart compares handles with Rc::ptr_eq. Product deliberately    │
//! │  derives no PartialEq so field-wise comparison never sneaks in.     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Items hold a live `Rc` to the product rather than a copy, so the product
//! outlives the cart lines that reference it without any extra bookkeeping.

use std::rc::Rc;

use crate::error::{CartError, CartResult};
use crate::money::{Money, TaxRate};

/// Shared handle to a product.
///
/// `Rc` rather than `Arc`: the cart core is single-threaded by design, and
/// `Rc` makes that a compile-time property (`!Send`/`!Sync`).
pub type ProductHandle = Rc<Product>;

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// Fields may be left unset while the product is being assembled by the
/// catalog layer: an id is absent until persisted, a price may not be
/// decided yet. Every concrete value is validated at the setter, so a
/// constructed `Product` never holds an out-of-range price, tax rate, or
/// minimum quantity.
#[derive(Debug)]
pub struct Product {
    /// Persistence identifier, unset until stored.
    id: Option<i64>,

    /// Display name.
    name: Option<String>,

    /// Unit price in minor currency units; `None` means "not priced yet".
    unit_price_cents: Option<i64>,

    /// Tax rate; `None` means "no tax configured" (treated as 0% in totals).
    tax: Option<TaxRate>,

    /// Minimum order quantity, at least 1.
    minimum_quantity: i64,
}

impl Product {
    /// Creates a product, running every setter in a fixed order:
    /// id, name, unit price, tax, minimum quantity.
    ///
    /// Minimum quantity is validated last and independently of the other
    /// fields, so it acts as the final line of defense.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::product::Product;
    ///
    /// let product = Product::new(Some(1), Some("Coffee".into()), Some(1000), Some(23), 1)
    ///     .unwrap()
    ///     .into_handle();
    /// assert_eq!(product.unit_price().unwrap().cents(), 1000);
    /// ```
    pub fn new(
        id: Option<i64>,
        name: Option<String>,
        unit_price_cents: Option<i64>,
        tax_percent: Option<u32>,
        minimum_quantity: i64,
    ) -> CartResult<Self> {
        let mut product = Product {
            id: None,
            name: None,
            unit_price_cents: None,
            tax: None,
            minimum_quantity: 1,
        };

        product.set_id(id);
        product.set_name(name);
        product.set_unit_price(unit_price_cents)?;
        product.set_tax(tax_percent)?;
        product.set_minimum_quantity(minimum_quantity)?;

        Ok(product)
    }

    /// Wraps the product into its shared, identity-carrying handle.
    ///
    /// From this point on the product is immutable; clones of the handle
    /// all denote the same cart line.
    #[inline]
    pub fn into_handle(self) -> ProductHandle {
        Rc::new(self)
    }

    // -------------------------------------------------------------------------
    // Setters (fluent: return the instance for chaining)
    // -------------------------------------------------------------------------

    /// Sets the persistence identifier.
    pub fn set_id(&mut self, id: Option<i64>) -> &mut Self {
        self.id = id;
        self
    }

    /// Sets the display name.
    pub fn set_name(&mut self, name: Option<String>) -> &mut Self {
        self.name = name;
        self
    }

    /// Sets the unit price in minor units.
    ///
    /// `None` is accepted and means "not priced yet". A concrete value
    /// below 1 fails with [`CartError::InvalidUnitPrice`] and leaves the
    /// previous price untouched.
    pub fn set_unit_price(&mut self, cents: Option<i64>) -> CartResult<&mut Self> {
        if let Some(cents) = cents {
            if cents < 1 {
                return Err(CartError::InvalidUnitPrice { cents });
            }
        }
        self.unit_price_cents = cents;

        Ok(self)
    }

    /// Sets the tax rate from an integer percentage.
    ///
    /// `None` is accepted and means "no tax configured". A concrete
    /// percentage outside the enumerated set fails with
    /// [`CartError::InvalidTaxRate`] and leaves the previous rate untouched.
    pub fn set_tax(&mut self, percent: Option<u32>) -> CartResult<&mut Self> {
        self.tax = match percent {
            Some(percent) => Some(TaxRate::from_percent(percent)?),
            None => None,
        };

        Ok(self)
    }

    /// Sets the minimum order quantity.
    ///
    /// Always required; values below 1 fail with
    /// [`CartError::InvalidMinimumQuantity`].
    pub fn set_minimum_quantity(&mut self, quantity: i64) -> CartResult<&mut Self> {
        if quantity < 1 {
            return Err(CartError::InvalidMinimumQuantity { quantity });
        }
        self.minimum_quantity = quantity;

        Ok(self)
    }

    // -------------------------------------------------------------------------
    // Getters (pure reads)
    // -------------------------------------------------------------------------

    /// Returns the persistence identifier, if assigned.
    #[inline]
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    /// Returns the display name, if set.
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the unit price as Money, if priced.
    #[inline]
    pub fn unit_price(&self) -> Option<Money> {
        self.unit_price_cents.map(Money::from_cents)
    }

    /// Returns the configured tax rate, if any.
    #[inline]
    pub fn tax(&self) -> Option<TaxRate> {
        self.tax
    }

    /// Returns the minimum order quantity (always >= 1).
    #[inline]
    pub fn minimum_quantity(&self) -> i64 {
        self.minimum_quantity
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
