//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the structured logger used by every binary in the
//! workspace.
//!
//! ## What Gets Traced
//!
//! - **Store Lifecycle**: `Store started`, `Restored`, `Shutdown`
//! - **Store Operations**: each `Apply` (with the action at `debug`) and `Snapshot`
//! - **Persistence**: write failures and discarded stored state at `warn`
//! - **Client Calls**: `#[instrument]` spans on every client method
//!
//! ## Usage Examples
//!
//! ```bash
//! # Default: warnings only
//! storefront cart show
//!
//! # Store lifecycle and applied actions
//! RUST_LOG=info storefront cart add 3
//!
//! # Full payloads
//! RUST_LOG=debug storefront wishlist show
//!
//! # Filter to one crate
//! RUST_LOG=store_framework=debug storefront products
//! ```
//!
//! Output goes to stderr so it never mixes with what a command prints.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";

pub fn setup_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
