pub mod auth;
pub mod clob;
pub mod client;
pub mod config;
pub mod constants;
pub mod gamma;
pub mod http;
pub mod logging;
pub mod types;

pub use auth::{ApiCredentials, AuthError, ClobAuthenticator, WalletSigner};
pub use clob::{ClobClient, ClobError, OpenOrderParams};
pub use client::Client;
pub use config::{Config, ConfigError};
pub use gamma::{GammaClient, GammaFilters};
pub use http::{
    FakeTransport, HttpError, HttpRequest, HttpResponse, HttpTransport, Method, ReqwestTransport,
};
pub use logging::init_tracing;
pub use types::*;
