//! Core components for the Rigel client crates.
//!
//! This crate provides the foundational types shared by the Rigel SDK and
//! its transport implementations:
//!
//! - **Context**: a container holding the HTTP transport and environment
//!   access used by the SDK's network operations
//! - **HttpSend** / **Env**: abstract interfaces so transports and
//!   configuration sources stay pluggable (and mockable in tests)
//! - **Error**: the shared error type with the failure taxonomy of the
//!   Rigel protocol
//! - [`hash`]: the HMAC token rendering used by request signing
//!
//! ## Example
//!
//! ```
//! use rigel_core::Context;
//!
//! // A default context carries no-op implementations; configure the
//! // components you need with the `with_*` methods.
//! let ctx = Context::new();
//! assert!(ctx.env_var("RIGEL_KEY").is_none());
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;

mod context;
pub use context::{Context, Env, HttpSend, NoopEnv, NoopHttpSend, OsEnv, StaticEnv};

mod error;
pub use error::{Error, ErrorKind, Result};
