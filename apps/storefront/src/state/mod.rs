//! # State Module
//!
//! The one piece of live state the storefront owns: the cart.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                         CartStore                               │   │
//! │  │                                                                 │   │
//! │  │   Mutex<Cart>  ◄── the only shared mutable state               │   │
//! │  │                                                                 │   │
//! │  │   catalog:  impl CatalogService   (stock + product lookups)    │   │
//! │  │   storage:  impl KeyValueStore    (@RocketShoes:cart)          │   │
//! │  │   notifier: impl Notifier         (toasts / stderr / tests)    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • The Mutex is never held across an await                             │
//! │  • Each operation commits under one lock acquisition                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;

pub use cart::{CartStore, UpdateProductAmount};
