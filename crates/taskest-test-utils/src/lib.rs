#![deny(unsafe_code)]

//! Shared test utilities for the taskest workspace.
//!
//! Provides config builders and on-disk config fixtures so that individual
//! crate tests stay concise and consistent.
//!
//! Add this crate as a `[dev-dependency]` in any workspace member:
//!
//! ```toml
//! [dev-dependencies]
//! taskest-test-utils = { workspace = true }
//! ```

pub mod config;
