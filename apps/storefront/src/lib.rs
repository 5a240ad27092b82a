//! # RocketShoes Storefront Library
//!
//! The storefront's cart: live state, persistence and notices, wired to the
//! HTTP catalog and the file store.
//!
//! ## Module Organization
//! ```text
//! rocketshoes_storefront/
//! ├── lib.rs          ◄─── You are here (logging & wiring)
//! ├── cli.rs          ◄─── clap definitions for the `rocketshoes` binary
//! ├── config.rs       ◄─── StorefrontConfig (env + TOML + defaults)
//! ├── error.rs        ◄─── CartError, AppError
//! ├── notifier.rs     ◄─── Notifier trait, console and recording notifiers
//! ├── state/
//! │   ├── mod.rs      ◄─── State exports
//! │   └── cart.rs     ◄─── CartStore
//! └── commands/
//!     ├── mod.rs      ◄─── Command exports
//!     └── cart.rs     ◄─── get_cart, add_to_cart, update_cart_item, ...
//! ```
//!
//! ## Embedding
//! ```rust,ignore
//! let store = CartStore::new(catalog, storage, notifier);
//! store.add_product(1).await;
//! let entries = store.cart();
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod notifier;
pub mod state;

use std::io::Write;

use rocketshoes_catalog::HttpCatalog;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::StorefrontConfig;
use error::AppError;
use notifier::ConsoleNotifier;
use state::CartStore;

/// Runs one CLI invocation.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Invocation                                        │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • ROCKETSHOES_* env, optional TOML file, defaults                   │
/// │                                                                         │
/// │  2. Build Collaborators ──────────────────────────────────────────────► │
/// │     • HttpCatalog with the configured timeout                           │
/// │     • FileStore in the data dir                                         │
/// │     • ConsoleNotifier in the configured locale                          │
/// │                                                                         │
/// │  3. Restore Cart ─────────────────────────────────────────────────────► │
/// │     • @RocketShoes:cart, empty when missing or invalid                  │
/// │                                                                         │
/// │  4. Run Command & Print Cart ─────────────────────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(cli: Cli) -> Result<(), AppError> {
    let config = StorefrontConfig::load()?;
    info!(api_url = %config.api_url, locale = ?config.locale, "Starting RocketShoes storefront");

    let catalog = HttpCatalog::new(config.catalog_config()?)?;
    let storage = config.open_store()?;
    let store = CartStore::new(catalog, storage, ConsoleNotifier::new(config.locale));

    let response = cli.command.execute(&store).await;

    let output = if cli.json {
        format!("{}\n", serde_json::to_string_pretty(&response)?)
    } else {
        response.render(config.locale)
    };
    // A closed stdout (e.g. `| head`) is not an application error.
    let _ = std::io::stdout().lock().write_all(output.as_bytes());

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=rocketshoes=trace` - Show trace for rocketshoes crates only
/// - Default: INFO, with debug for rocketshoes crates
///
/// Logs go to stderr so they never mix with the printed cart.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,rocketshoes=debug,reqwest=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
