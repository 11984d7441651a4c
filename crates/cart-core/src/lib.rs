//! # cart-core: Pure Shopping Cart Business Logic
//!
//! This crate is the invariant-preserving core of the shopping cart. It
//! contains all business logic as pure, synchronous code with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    External Collaborators                           │
//! │                                                                     │
//! │   Catalog ──► hands out ProductHandle                               │
//! │   Controllers ──► call Cart mutations, surface CartError            │
//! │   Presentation ──► consumes OrderView                               │
//! └──────────────────────────────┬──────────────────────────────────────┘
//!                                │
//! ┌──────────────────────────────▼──────────────────────────────────────┐
//! │                  ★ cart-core (THIS CRATE) ★                         │
//! │                                                                     │
//! │   ┌─────────┐  ┌───────┐  ┌────────────┐  ┌──────┐  ┌───────┐      │
//! │   │ product │  │ money │  │ collection │  │ cart │  │ order │      │
//! │   │ Product │  │ Money │  │ Collection │  │ Cart │  │ Order │      │
//! │   │ handles │  │TaxRate│  │ positional │  │ Item │  │ View  │      │
//! │   └─────────┘  └───────┘  └────────────┘  └──────┘  └───────┘      │
//! │                                                                     │
//! │   NO I/O • NO DATABASE • NO NETWORK • SINGLE-THREADED               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//!
//! 1. **Integer money**: all prices are i64 minor units, one documented
//!    rounding rule (half up on the tax surcharge)
//! 2. **Identity, not value**: products are shared `Rc` handles; "the same
//!    product" means the same instance
//! 3. **Validate at every mutation**: invariants hold after construction
//!    and after every setter, with no partial mutation on failure
//! 4. **Explicit errors**: all failures are typed `CartError` variants,
//!    never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use cart_core::{Cart, Product};
//!
//! let coffee = Product::new(Some(1), Some("Coffee".into()), Some(1000), Some(23), 1)?
//!     .into_handle();
//!
//! let mut cart = Cart::new();
//! cart.add_product(&coffee, 2)?;
//! assert_eq!(cart.total_price()?.cents(), 2000);
//! assert_eq!(cart.total_price_gross()?.cents(), 2460);
//!
//! let order = cart.checkout(1);
//! assert!(cart.items().is_empty());
//! assert_eq!(order.data_for_view()?.total_price, 2000);
//! # Ok::<(), cart_core::CartError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod collection;
pub mod error;
pub mod money;
pub mod order;
pub mod product;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use cart_core::Cart` instead of
// `use cart_core::cart::Cart`

pub use cart::{Cart, Item};
pub use collection::Collection;
pub use error::{CartError, CartResult};
pub use money::{Money, TaxRate, ALLOWED_TAX_RATES};
pub use order::{Order, OrderItemView, OrderView};
pub use product::{Product, ProductHandle};
