//! # Cart Aggregate
//!
//! The shopping cart and its line items.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Cart Operations                                │
//! │                                                                     │
//! │  Caller Action              Cart State Change                       │
//! │  ─────────────              ─────────────────                       │
//! │                                                                     │
//! │  add_product(p, q) ───────► merge into existing line, or append     │
//! │                                                                     │
//! │  set_quantity(p, q) ──────► overwrite quantity (appends if absent)  │
//! │                                                                     │
//! │  remove_product(p) ───────► delete line, keys compact               │
//! │                                                                     │
//! │  checkout(id) ────────────► freeze items into Order, clear cart     │
//! │                                                                     │
//! │  Lines are matched by PRODUCT IDENTITY (Rc::ptr_eq), never by       │
//! │  field equality. At most one line per distinct product handle.      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! None, by design: the aggregate is single-writer, in-memory, and `!Send`
//! (it holds `Rc` product handles). Callers sharing a cart across
//! concurrent contexts must serialize access externally.

use std::rc::Rc;

use crate::collection::Collection;
use crate::error::{CartError, CartResult};
use crate::money::Money;
use crate::order::Order;
use crate::product::ProductHandle;

// =============================================================================
// Item
// =============================================================================

/// A cart line: one product paired with a quantity.
///
/// The item holds a live handle to the product, not a copy, so line totals
/// always reflect the product the catalog handed out. The quantity may be
/// unset ("not yet decided"); once concrete it must meet the product's
/// minimum order quantity, re-checked at every mutation.
#[derive(Debug, Clone)]
pub struct Item {
    product: ProductHandle,
    quantity: Option<i64>,
}

impl Item {
    /// Creates a line for a product with an initial quantity.
    ///
    /// Construction routes through [`Item::set_quantity`], so an invalid
    /// initial quantity fails exactly like a later mutation would.
    pub fn new(product: ProductHandle, quantity: Option<i64>) -> CartResult<Self> {
        let mut item = Item {
            product,
            quantity: None,
        };
        item.set_quantity(quantity)?;

        Ok(item)
    }

    /// Sets the quantity.
    ///
    /// A concrete value below the product's minimum fails with
    /// [`CartError::QuantityTooLow`] and leaves the previous quantity in
    /// place. `None` is accepted without validation.
    pub fn set_quantity(&mut self, quantity: Option<i64>) -> CartResult<&mut Self> {
        if let Some(requested) = quantity {
            let minimum = self.product.minimum_quantity();
            if requested < minimum {
                return Err(CartError::QuantityTooLow { minimum, requested });
            }
        }
        self.quantity = quantity;

        Ok(self)
    }

    /// Returns the product handle this line refers to.
    #[inline]
    pub fn product(&self) -> &ProductHandle {
        &self.product
    }

    /// Returns the quantity, if decided.
    #[inline]
    pub fn quantity(&self) -> Option<i64> {
        self.quantity
    }

    /// Net line total: quantity × unit price.
    ///
    /// Fails fast with [`CartError::MissingQuantity`] or
    /// [`CartError::MissingUnitPrice`] on an incompletely populated line
    /// instead of coercing the missing side to zero.
    pub fn total_price(&self) -> CartResult<Money> {
        let quantity = self.quantity.ok_or(CartError::MissingQuantity)?;
        let unit_price = self
            .product
            .unit_price()
            .ok_or(CartError::MissingUnitPrice)?;

        Ok(unit_price.multiply_quantity(quantity))
    }

    /// Gross line total: net plus the product's tax surcharge.
    ///
    /// A product with no tax configured is treated as taxed at 0%.
    pub fn total_price_gross(&self) -> CartResult<Money> {
        let net = self.total_price()?;
        let rate = self.product.tax().unwrap_or_default();

        Ok(net.with_tax(rate))
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart aggregate.
///
/// ## Invariants
/// - At most one line per distinct product handle (merge by identity)
/// - Every concrete line quantity meets its product's minimum
/// - Lines keep insertion order; removal compacts positions
#[derive(Debug, Default)]
pub struct Cart {
    items: Collection<Item>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Collection::new(),
        }
    }

    /// Adds a product, merging into the existing line when the same
    /// instance is already in the cart.
    ///
    /// ## Behavior
    /// - Product already in cart: the line's quantity becomes
    ///   current + `quantity`, re-validated against the product minimum
    /// - Otherwise: a new line is appended, whose construction applies the
    ///   same minimum-quantity check to the initial value
    ///
    /// A failed validation aborts with no partial mutation. On success the
    /// cart itself is returned for chaining.
    pub fn add_product(&mut self, product: &ProductHandle, quantity: i64) -> CartResult<&mut Self> {
        match self.item_key_by_product(product) {
            Some(key) => {
                if let Some(item) = self.items.get_mut(key) {
                    let current = item.quantity().unwrap_or(0);
                    item.set_quantity(Some(current + quantity))?;
                }
            }
            None => {
                let item = Item::new(Rc::clone(product), Some(quantity))?;
                self.items.add(item);
            }
        }

        Ok(self)
    }

    /// Overwrites the quantity of a product's line.
    ///
    /// When the product has no line yet, a new one is appended with the
    /// given quantity. That append-on-miss behavior is deliberate and
    /// relied upon by callers; do not change it to a no-op or an error.
    pub fn set_quantity(&mut self, product: &ProductHandle, quantity: i64) -> CartResult<&mut Self> {
        match self.item_key_by_product(product) {
            Some(key) => {
                if let Some(item) = self.items.get_mut(key) {
                    item.set_quantity(Some(quantity))?;
                }
            }
            None => {
                let item = Item::new(Rc::clone(product), Some(quantity))?;
                self.items.add(item);
            }
        }

        Ok(self)
    }

    /// Removes a product's line. A no-op when the product is not in the
    /// cart. Positions above the removed line shift down by one.
    pub fn remove_product(&mut self, product: &ProductHandle) -> &mut Self {
        if let Some(key) = self.item_key_by_product(product) {
            self.items.remove(key);
        }
        self
    }

    /// Returns the position of the line holding this exact product
    /// instance, or `None` when absent.
    ///
    /// Identity equality: two distinct products with identical fields are
    /// different lines.
    pub fn item_key_by_product(&self, product: &ProductHandle) -> Option<usize> {
        self.items
            .filter(|item, wanted| Rc::ptr_eq(item.product(), wanted), product)
            .first()
            .map(|(key, _)| *key)
    }

    /// Borrows the current lines in insertion/compaction order.
    #[inline]
    pub fn items(&self) -> &[Item] {
        self.items.as_slice()
    }

    /// Returns the line at a position.
    ///
    /// Fails with [`CartError::OutOfRange`] when the position is at or
    /// beyond the current line count.
    pub fn get_item(&self, position: usize) -> CartResult<&Item> {
        self.items.get(position).ok_or(CartError::OutOfRange {
            position,
            len: self.items.count(),
        })
    }

    /// Number of lines in the cart.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.items.count()
    }

    /// Checks if the cart holds no lines.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Net total over all lines; zero for an empty cart.
    pub fn total_price(&self) -> CartResult<Money> {
        self.items
            .as_slice()
            .iter()
            .try_fold(Money::zero(), |total, item| {
                Ok(total + item.total_price()?)
            })
    }

    /// Gross total over all lines; zero for an empty cart.
    pub fn total_price_gross(&self) -> CartResult<Money> {
        self.items
            .as_slice()
            .iter()
            .try_fold(Money::zero(), |total, item| {
                Ok(total + item.total_price_gross()?)
            })
    }

    /// Freezes the current lines into an [`Order`] and empties the cart.
    ///
    /// The order receives an independent snapshot of the line list: later
    /// cart mutations, including another checkout, never alter an order
    /// that was already issued.
    pub fn checkout(&mut self, id: i64) -> Order {
        let order = Order::new(id, self.items.to_vec());
        self.items.clear();

        order
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Product;

    fn product(cents: i64, tax: Option<u32>, minimum: i64) -> ProductHandle {
        Product::new(Some(1), Some("Test".into()), Some(cents), tax, minimum)
            .unwrap()
            .into_handle()
    }

    // -------------------------------------------------------------------------
    // Item
    // -------------------------------------------------------------------------

    #[test]
    fn test_item_construction_validates_like_mutation() {
        let p = product(1000, None, 3);

        assert!(matches!(
            Item::new(Rc::clone(&p), Some(2)),
            Err(CartError::QuantityTooLow {
                minimum: 3,
                requested: 2
            })
        ));
        assert!(Item::new(Rc::clone(&p), Some(3)).is_ok());
        // An undecided quantity passes without validation
        assert!(Item::new(p, None).is_ok());
    }

    #[test]
    fn test_item_set_quantity_keeps_prior_value_on_failure() {
        let p = product(1000, None, 2);
        let mut item = Item::new(p, Some(5)).unwrap();

        assert!(item.set_quantity(Some(1)).is_err());
        assert_eq!(item.quantity(), Some(5));

        item.set_quantity(Some(2)).unwrap();
        assert_eq!(item.quantity(), Some(2));
    }

    #[test]
    fn test_item_totals() {
        let p = product(1000, Some(23), 1);
        let item = Item::new(p, Some(2)).unwrap();

        assert_eq!(item.total_price().unwrap().cents(), 2000);
        assert_eq!(item.total_price_gross().unwrap().cents(), 2460);
    }

    #[test]
    fn test_item_gross_without_tax_equals_net() {
        let p = product(750, None, 1);
        let item = Item::new(p, Some(2)).unwrap();

        assert_eq!(item.total_price().unwrap().cents(), 1500);
        assert_eq!(item.total_price_gross().unwrap().cents(), 1500);
    }

    #[test]
    fn test_item_totals_fail_fast_on_incomplete_line() {
        let priced = product(1000, None, 1);
        let item = Item::new(priced, None).unwrap();
        assert!(matches!(
            item.total_price(),
            Err(CartError::MissingQuantity)
        ));

        let unpriced = Product::new(None, None, None, None, 1)
            .unwrap()
            .into_handle();
        let item = Item::new(unpriced, Some(2)).unwrap();
        assert!(matches!(
            item.total_price(),
            Err(CartError::MissingUnitPrice)
        ));
    }

    // -------------------------------------------------------------------------
    // Cart: line management
    // -------------------------------------------------------------------------

    #[test]
    fn test_add_same_instance_merges_into_one_line() {
        let p = product(999, None, 1);
        let mut cart = Cart::new();

        cart.add_product(&p, 2).unwrap().add_product(&p, 3).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.get_item(0).unwrap().quantity(), Some(5));
    }

    #[test]
    fn test_distinct_instances_with_equal_fields_stay_separate() {
        let a = product(999, None, 1);
        let b = product(999, None, 1);
        let mut cart = Cart::new();

        cart.add_product(&a, 1).unwrap().add_product(&b, 1).unwrap();

        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_add_below_minimum_fails_without_mutation() {
        let p = product(1000, None, 5);
        let mut cart = Cart::new();

        assert!(matches!(
            cart.add_product(&p, 4),
            Err(CartError::QuantityTooLow { .. })
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_merge_revalidates_minimum() {
        // Minimum 5: a merge that lands below it must fail and leave the
        // existing line untouched
        let p = product(1000, None, 5);
        let mut cart = Cart::new();
        cart.add_product(&p, 5).unwrap();

        assert!(matches!(
            cart.add_product(&p, -3),
            Err(CartError::QuantityTooLow { .. })
        ));
        assert_eq!(cart.get_item(0).unwrap().quantity(), Some(5));
    }

    #[test]
    fn test_set_quantity_overwrites_existing_line() {
        let p = product(1000, None, 1);
        let mut cart = Cart::new();

        cart.add_product(&p, 2).unwrap();
        cart.set_quantity(&p, 7).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.get_item(0).unwrap().quantity(), Some(7));
    }

    #[test]
    fn test_set_quantity_appends_when_product_absent() {
        let p = product(1000, None, 1);
        let mut cart = Cart::new();

        cart.set_quantity(&p, 4).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.get_item(0).unwrap().quantity(), Some(4));
    }

    #[test]
    fn test_remove_product_compacts_positions() {
        let a = product(100, None, 1);
        let b = product(200, None, 1);
        let c = product(300, None, 1);
        let mut cart = Cart::new();
        cart.add_product(&a, 1)
            .unwrap()
            .add_product(&b, 1)
            .unwrap()
            .add_product(&c, 1)
            .unwrap();

        cart.remove_product(&b);

        assert_eq!(cart.item_count(), 2);
        // Former position 2 shifted down to position 1
        assert!(Rc::ptr_eq(cart.get_item(0).unwrap().product(), &a));
        assert!(Rc::ptr_eq(cart.get_item(1).unwrap().product(), &c));
    }

    #[test]
    fn test_remove_absent_product_is_noop() {
        let a = product(100, None, 1);
        let stranger = product(100, None, 1);
        let mut cart = Cart::new();
        cart.add_product(&a, 1).unwrap();

        cart.remove_product(&stranger);

        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_item_key_by_product_uses_identity() {
        let a = product(100, None, 1);
        let twin = product(100, None, 1);
        let mut cart = Cart::new();
        cart.add_product(&a, 1).unwrap();

        assert_eq!(cart.item_key_by_product(&a), Some(0));
        assert_eq!(cart.item_key_by_product(&twin), None);
    }

    #[test]
    fn test_get_item_out_of_range() {
        let p = product(100, None, 1);
        let mut cart = Cart::new();
        cart.add_product(&p, 1).unwrap();

        assert!(cart.get_item(0).is_ok());
        assert!(matches!(
            cart.get_item(1),
            Err(CartError::OutOfRange {
                position: 1,
                len: 1
            })
        ));
    }

    // -------------------------------------------------------------------------
    // Cart: totals and checkout
    // -------------------------------------------------------------------------

    #[test]
    fn test_empty_cart_totals_are_zero() {
        let cart = Cart::new();
        assert!(cart.total_price().unwrap().is_zero());
        assert!(cart.total_price_gross().unwrap().is_zero());
    }

    #[test]
    fn test_totals_reference_example() {
        // Unit 1000 at 23%, quantity 2 → net 2000, gross 2460
        let p = product(1000, Some(23), 1);
        let mut cart = Cart::new();
        cart.add_product(&p, 2).unwrap();

        assert_eq!(cart.total_price().unwrap().cents(), 2000);
        assert_eq!(cart.total_price_gross().unwrap().cents(), 2460);
    }

    #[test]
    fn test_totals_sum_across_mixed_rates() {
        let low = product(500, Some(8), 1); // net 1000, gross 1080
        let high = product(1000, Some(23), 1); // net 1000, gross 1230
        let mut cart = Cart::new();
        cart.add_product(&low, 2).unwrap().add_product(&high, 1).unwrap();

        assert_eq!(cart.total_price().unwrap().cents(), 2000);
        assert_eq!(cart.total_price_gross().unwrap().cents(), 2310);
    }

    #[test]
    fn test_checkout_snapshots_and_clears() {
        let p = product(1000, Some(23), 1);
        let mut cart = Cart::new();
        cart.add_product(&p, 2).unwrap();
        let net_before = cart.total_price().unwrap();
        let gross_before = cart.total_price_gross().unwrap();

        let order = cart.checkout(1);

        assert!(cart.items().is_empty());
        let view = order.data_for_view().unwrap();
        assert_eq!(view.total_price, net_before.cents());
        assert_eq!(view.total_price_gross, gross_before.cents());

        // Mutating the cart afterwards must not leak into the order
        cart.add_product(&p, 10).unwrap();
        let second = cart.checkout(2);
        assert_eq!(order.items().len(), 1);
        assert_eq!(order.items()[0].quantity(), Some(2));
        assert_eq!(second.items().len(), 1);
    }

    #[test]
    fn test_checkout_on_empty_cart_yields_empty_order() {
        let mut cart = Cart::new();
        let order = cart.checkout(7);

        let view = order.data_for_view().unwrap();
        assert!(view.items.is_empty());
        assert_eq!(view.total_price, 0);
        assert_eq!(view.total_price_gross, 0);
    }
}
