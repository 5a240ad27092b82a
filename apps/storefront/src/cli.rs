//! # Command Line Interface
//!
//! ```text
//! rocketshoes show
//! rocketshoes add 3
//! rocketshoes update 3 2
//! rocketshoes remove 3
//! rocketshoes --json show
//! ```
//!
//! Each invocation restores the persisted cart, runs one operation and
//! prints the resulting cart. Notices go to stderr.

use clap::{Parser, Subcommand};
use rocketshoes_catalog::CatalogService;
use rocketshoes_core::ProductId;
use rocketshoes_store::KeyValueStore;

use crate::commands::cart::{add_to_cart, get_cart, remove_from_cart, update_cart_item};
use crate::commands::CartResponse;
use crate::notifier::Notifier;
use crate::state::CartStore;

#[derive(Debug, Parser)]
#[command(name = "rocketshoes", version, about = "RocketShoes storefront cart")]
pub struct Cli {
    /// Print the cart as JSON instead of a table
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show the cart
    Show,

    /// Add one unit of a product
    Add { product_id: ProductId },

    /// Remove a product from the cart
    Remove { product_id: ProductId },

    /// Set the amount of a product already in the cart
    Update {
        product_id: ProductId,

        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
}

impl Command {
    /// Runs the command against a store.
    pub async fn execute<C, S, N>(self, store: &CartStore<C, S, N>) -> CartResponse
    where
        C: CatalogService,
        S: KeyValueStore,
        N: Notifier,
    {
        match self {
            Command::Show => get_cart(store),
            Command::Add { product_id } => add_to_cart(store, product_id).await,
            Command::Remove { product_id } => remove_from_cart(store, product_id),
            Command::Update { product_id, amount } => {
                update_cart_item(store, product_id, amount).await
            }
        }
    }
}
