//! # Commands Module
//!
//! The cart operations as the CLI (and any other front end) invokes them.
//!
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! └── cart.rs     ◄─── get_cart, add_to_cart, update_cart_item, remove_from_cart
//! ```
//!
//! Every command runs one `CartStore` operation and answers with the
//! resulting cart. Failures never come back as errors: the store has
//! already reported them through its notifier.

pub mod cart;

pub use cart::CartResponse;
