//! Rigel image proxy client.
//!
//! This crate builds authenticated, tamper-evident URLs for a Rigel image
//! transformation/proxy service and drives its cache workflows. Every URL
//! carries an `X-Signature` token the server recomputes independently, so
//! canonicalization here is bit-exact: parameters are percent-encoded,
//! sorted byte-wise, signed with HMAC-SHA1 over `request_path=<route>` plus
//! the sorted pairs, and rendered as unpadded URL-safe base64.
//!
//! ## Quick Start
//!
//! ```no_run
//! use rigel::{Client, Config, TransformOptions, ImageType};
//! use rigel_core::Context;
//! use rigel_http_send_reqwest::ReqwestHttpSend;
//!
//! #[tokio::main]
//! async fn main() -> rigel_core::Result<()> {
//!     let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
//!
//!     let config = Config {
//!         endpoint: Some("http://localhost:8080/rigel".to_string()),
//!         key: Some("secretkey".to_string()),
//!         salt: Some("secretsalt".to_string()),
//!     };
//!     let client = Client::new(ctx, config)?;
//!
//!     let options = TransformOptions {
//!         width: Some(100),
//!         height: Some(100),
//!         image_type: Some(ImageType::Webp),
//!         ..Default::default()
//!     };
//!
//!     // Pure URL construction, no network traffic.
//!     let proxy = client.proxy_url("https://example.com/cat.jpg", Some(&options), -1);
//!     println!("proxy url: {proxy}");
//!
//!     // Cache-or-fallback: always yields a usable URL.
//!     let short = client
//!         .try_short_url("https://example.com/cat.jpg", Some(&options), -1)
//!         .await;
//!     println!("short url: {short}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Operations
//!
//! - [`Client::proxy_url`]: signed one-off transform URL, pure.
//! - [`Client::cache_image`]: ask the service to cache a rendition, get a
//!   signed short URL addressing it by content signature.
//! - [`Client::try_short_url`]: cache with graceful fallback to the proxy
//!   URL; never fails.
//! - [`Client::batched_cache`]: cache a list of images in one request,
//!   all-or-nothing.
//!
//! ## Expiry
//!
//! Expiring URLs take an integer milliseconds value; `0` and `-1` both mean
//! "no expiry" and never emit an `X-ExpiresAt` parameter.
//!
//! ## Configuration
//!
//! Credentials and endpoint live in an immutable [`Config`], settable
//! explicitly or loaded from `RIGEL_ENDPOINT` / `RIGEL_KEY` / `RIGEL_SALT`
//! via [`Config::from_env`].

mod constants;

mod config;
pub use config::Config;

mod options;
pub use options::{Gravity, ImageType, TransformOptions};

mod query;

mod signer;
pub use signer::UrlSigner;

mod model;
pub use model::{CacheRecord, ProxyTarget};

mod client;
pub use client::Client;
