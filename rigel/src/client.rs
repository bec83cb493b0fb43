use bytes::Bytes;
use http::{header, Request};
use log::debug;

use rigel_core::{Context, Error, Result};

use crate::config::Config;
use crate::constants::*;
use crate::model::{CacheRecord, ProxyTarget};
use crate::options::TransformOptions;
use crate::signer::UrlSigner;

/// Client for the Rigel image proxy service.
///
/// Construction validates the configuration once; afterwards the client is
/// immutable and cheap to clone. URL construction is pure and safe to call
/// concurrently; only the cache operations touch the network, and each
/// issues exactly one request through the [`Context`]'s transport with no
/// internal retries.
#[derive(Debug, Clone)]
pub struct Client {
    ctx: Context,
    signer: UrlSigner,
}

impl Client {
    /// Build a client from configuration.
    ///
    /// Returns a `ConfigInvalid` error when endpoint, key or salt is
    /// missing or empty.
    pub fn new(ctx: Context, config: Config) -> Result<Self> {
        let endpoint = config
            .endpoint
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::config_invalid("endpoint is not set"))?;
        let key = config
            .key
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::config_invalid("key is not set"))?;
        let salt = config
            .salt
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::config_invalid("salt is not set"))?;

        Ok(Self {
            ctx,
            signer: UrlSigner::new(&endpoint, &key, &salt),
        })
    }

    /// The signer backing this client.
    pub fn signer(&self) -> &UrlSigner {
        &self.signer
    }

    /// Build a signed `proxy` URL for `img` with optional transforms.
    ///
    /// Pure; no network traffic.
    pub fn proxy_url(&self, img: &str, options: Option<&TransformOptions>, expiry: i64) -> String {
        self.signer
            .signed_url(ROUTE_PROXY, &request_params(img, options), expiry)
    }

    /// Ask the service to cache a rendition of `img` and return the signed
    /// short URL addressing it by content signature.
    ///
    /// Issues exactly one POST with an empty body. Any transport, status or
    /// body failure is returned as a typed error; nothing is retried and no
    /// result is memoized.
    pub async fn cache_image(
        &self,
        img: &str,
        options: Option<&TransformOptions>,
        expiry: i64,
    ) -> Result<String> {
        let url = self
            .signer
            .signed_url(ROUTE_HEADSUP, &request_params(img, options), expiry);
        let req = Request::post(url.as_str()).body(Bytes::new())?;

        let resp = self.ctx.http_send(req).await?;
        let status = resp.status();
        if !status.is_success() {
            debug!("cache request for {img} rejected with status {status}");
            return Err(
                Error::remote_failed(format!("cache request rejected with status {status}"))
                    .with_status(status.as_u16()),
            );
        }

        let record: CacheRecord = serde_json::from_slice(resp.body()).map_err(|e| {
            Error::deserialize_failed("cache response body is not a cache record").with_source(e)
        })?;

        Ok(self.short_url(&record.signature, expiry))
    }

    /// Return a short cached URL when possible, falling back to a plain
    /// signed `proxy` URL when the cache request fails for any reason.
    ///
    /// Never fails: a usable URL is always produced, degrading gracefully
    /// when the service is unreachable.
    pub async fn try_short_url(
        &self,
        img: &str,
        options: Option<&TransformOptions>,
        expiry: i64,
    ) -> String {
        match self.cache_image(img, options, expiry).await {
            Ok(url) => url,
            Err(err) => {
                debug!("cache unavailable for {img}, serving proxy url instead: {err}");
                self.proxy_url(img, options, expiry)
            }
        }
    }

    /// Cache every target in one request and mint a short URL per record.
    ///
    /// All-or-nothing: any failure fails the whole batch with a
    /// `BatchFailed` error and no partial results. Returned records keep
    /// the order the service reported, which mirrors the submitted order.
    pub async fn batched_cache(
        &self,
        targets: &[ProxyTarget],
        expiry: i64,
    ) -> Result<Vec<CacheRecord>> {
        let url = self.signer.signed_url(ROUTE_BATCHED_HEADSUP, &[], expiry);
        let body = serde_json::to_vec(targets).map_err(|e| {
            Error::batch_failed("failed to encode batch request body").with_source(e)
        })?;
        let req = Request::post(url.as_str())
            .header(header::CONTENT_TYPE, "application/json")
            .body(Bytes::from(body))?;

        let resp = self
            .ctx
            .http_send(req)
            .await
            .map_err(|e| Error::batch_failed("batch cache request failed").with_source(e))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::batch_failed(format!(
                "batch cache request rejected with status {status}"
            ))
            .with_status(status.as_u16()));
        }

        let mut records: Vec<CacheRecord> = serde_json::from_slice(resp.body()).map_err(|e| {
            Error::batch_failed("batch response body is not a list of cache records")
                .with_source(e)
        })?;
        for record in &mut records {
            record.short_url = self.short_url(&record.signature, expiry);
        }

        Ok(records)
    }

    /// Signed URL addressing a cached artifact by content signature.
    fn short_url(&self, signature: &str, expiry: i64) -> String {
        self.signer
            .signed_url(&format!("{ROUTE_IMG_PREFIX}/{signature}"), &[], expiry)
    }
}

/// Base parameter set for a single-image request: the target image merged
/// with the serialized transform options.
fn request_params(img: &str, options: Option<&TransformOptions>) -> Vec<(&'static str, String)> {
    let mut params = vec![(PARAM_IMG, img.to_string())];
    if let Some(options) = options {
        params.extend(options.to_query_pairs());
    }
    params
}
