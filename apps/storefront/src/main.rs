//! # RocketShoes CLI Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        rocketshoes                                      │
//! │                                                                         │
//! │  main.rs ────► Parses arguments, sets up logging and the runtime       │
//! │                                                                         │
//! │  lib.rs ─────► Loads config, wires CartStore, runs one command         │
//! │                                                                         │
//! │           ┌──────────────┐            ┌────────────────────────┐       │
//! │           │ Catalog API  │◄── HTTP ───│  CartStore             │       │
//! │           │ :3333        │            │  └─► FileStore (JSON)  │       │
//! │           └──────────────┘            └────────────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

use clap::Parser;
use rocketshoes_storefront::cli::Cli;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    rocketshoes_storefront::init_tracing();

    match rocketshoes_storefront::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Storefront failed to start");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
