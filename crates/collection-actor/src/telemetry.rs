//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the `tracing-subscriber` used by binaries built on this crate.
//!
//! Every collection actor logs with an `entity_type` field instead of a module path, so the
//! subscriber hides targets and uses the compact format:
//!
//! ```text
//! INFO Actor started entity_type="OrderLine"
//! INFO Created batch entity_type="OrderLine" count=3 size=3
//! INFO Action ok entity_type="OrderLine" id=order_line_2
//! INFO Retired entity_type="OrderLine" id=order_line_2 size=2
//! ```
//!
//! ```bash
//! RUST_LOG=info cargo run                  # compact lifecycle logs
//! RUST_LOG=debug cargo run                 # full payloads and query filters
//! RUST_LOG=collection_actor=debug cargo run
//! ```

/// Initialize the global subscriber, filtered by `RUST_LOG`.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}
