//! Polymarket SDK - Main Library
//!
//! Re-exports the `polymarket-client` workspace library and carries the
//! helpers shared by the binaries.
//!
//! ## Usage in Binaries
//!
//! ```rust,no_run
//! use polymarket_sdk::bin_common::load_config;
//! use polymarket_sdk::polymarket_client::Client;
//! ```

// Re-export workspace libraries for convenience
pub use polymarket_client;

// Binary common utilities
pub mod bin_common {
    //! Common utilities for binary executables

    pub mod cli;

    pub use cli::{
        load_config, load_config_from, load_config_path, parse_args, parse_nonce, CONFIG_PATH_ENV,
        DEFAULT_CONFIG_PATH,
    };
}
