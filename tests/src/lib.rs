//! # User Directory Test Suite
//!
//! Unified test crate for scenarios that cross crate boundaries: a real
//! authority service behind the in-memory transport, queried through the
//! client proxy.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── directory_flows.rs   # end-to-end query scenarios
//!     └── failure_modes.rs     # transport death, policy, version skew
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All integration scenarios
//! cargo test -p directory-tests
//!
//! # By category
//! cargo test -p directory-tests integration::directory_flows
//! cargo test -p directory-tests integration::failure_modes
//! ```

pub mod integration;

/// Install a stderr subscriber honoring `RUST_LOG`, once per process.
/// Fixtures call this so `RUST_LOG=debug cargo test` shows the dispatch
/// traces; without the variable set, tests stay quiet.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
