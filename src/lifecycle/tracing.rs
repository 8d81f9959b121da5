//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the subscriber for the binary. Library code
//! only emits through `tracing` macros and the [`TracingSink`](crate::audit::TracingSink).
//!
//! ## What Gets Traced
//!
//! - **Audit events**: one `INFO Audit kind=... subject=...` line per mutation,
//!   `WARN` for rejected fulfillments
//! - **Actor lifecycle**: startup and shutdown with the number of handled requests
//! - **Requests**: every command at `DEBUG`, including its payload
//! - **Client calls**: `#[instrument]` spans around each typed client method
//!
//! ## Usage Examples
//!
//! ```bash
//! # Audit trail only
//! RUST_LOG=info cargo run
//!
//! # Show every request payload
//! RUST_LOG=debug cargo run
//!
//! # Filter to specific modules
//! RUST_LOG=company_records::framework=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a fulfillment looks like:
//!
//! ```text
//! INFO Audit kind="inventory.stock_deducted" subject=item_1
//! INFO Audit kind="processing.fulfilled" subject=item_1
//! ```

/// Initializes the tracing subscriber with `RUST_LOG` filtering.
///
/// Logs go to stderr so they do not interleave with the shell's stdout.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
