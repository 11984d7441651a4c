//! # Order Entity
//!
//! The immutable result of checking out a cart.
//!
//! An order owns a frozen copy of the cart's line list taken at checkout
//! time; the cart clearing itself afterwards (or being mutated again) has
//! no effect on an order that was already issued. The only thing the
//! outside world consumes is the [`OrderView`] projection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Item;
use crate::error::CartResult;
use crate::money::Money;

// =============================================================================
// Order
// =============================================================================

/// A finalized order.
///
/// Constructed only by `Cart::checkout`; exposes no mutation API.
#[derive(Debug)]
pub struct Order {
    id: i64,
    items: Vec<Item>,
    created_at: DateTime<Utc>,
}

impl Order {
    /// Freezes a line list under an order id.
    ///
    /// Crate-private: carts are the only source of orders.
    pub(crate) fn new(id: i64, items: Vec<Item>) -> Self {
        Order {
            id,
            items,
            created_at: Utc::now(),
        }
    }

    /// Returns the order id.
    #[inline]
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Borrows the frozen line list.
    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns when the order was issued.
    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Projects the order into the plain data shape consumed by
    /// presentation code.
    ///
    /// Pure read: per line {product_id, quantity, tax, total_price,
    /// total_price_gross} plus order-wide totals, all prices in integer
    /// minor units. Fails only when a frozen line was never fully
    /// populated (no quantity or no unit price).
    pub fn data_for_view(&self) -> CartResult<OrderView> {
        let mut items = Vec::with_capacity(self.items.len());
        let mut total_price = Money::zero();
        let mut total_price_gross = Money::zero();

        for item in &self.items {
            let line_net = item.total_price()?;
            let line_gross = item.total_price_gross()?;

            items.push(OrderItemView {
                product_id: item.product().id(),
                quantity: item.quantity(),
                tax: item.product().tax().map(|rate| rate.percent()),
                total_price: line_net.cents(),
                total_price_gross: line_gross.cents(),
            });
            total_price += line_net;
            total_price_gross += line_gross;
        }

        Ok(OrderView {
            id: self.id,
            items,
            total_price: total_price.cents(),
            total_price_gross: total_price_gross.cents(),
        })
    }
}

// =============================================================================
// View Projection
// =============================================================================

/// One order line as presented to the outside world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderItemView {
    /// Product id, absent when the product was never persisted.
    pub product_id: Option<i64>,

    /// Ordered quantity.
    pub quantity: Option<i64>,

    /// Tax percentage, absent when no tax was configured.
    pub tax: Option<u32>,

    /// Net line total in minor units.
    pub total_price: i64,

    /// Gross line total in minor units.
    pub total_price_gross: i64,
}

/// The full order projection: lines plus order-wide totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderView {
    pub id: i64,
    pub items: Vec<OrderItemView>,

    /// Net order total in minor units.
    pub total_price: i64,

    /// Gross order total in minor units.
    pub total_price_gross: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================
