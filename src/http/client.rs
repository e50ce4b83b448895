//! Default transport — `SilaHttp`, a thin `reqwest` wrapper.
//!
//! Posts the canonical body as raw bytes; never hands a value to reqwest's
//! JSON encoder.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use std::collections::BTreeMap;
use std::time::Duration;

use crate::error::TransportError;
use crate::http::{RawResponse, SignedRequest, Transport};
use crate::network::DEFAULT_TIMEOUT_SECS;

/// HTTP transport for the Sila REST API.
#[derive(Debug, Clone)]
pub struct SilaHttp {
    base_url: String,
    client: Client,
}

impl SilaHttp {
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn header_map(headers: &[(String, String)]) -> Result<HeaderMap, TransportError> {
        let mut map = HeaderMap::with_capacity(headers.len());
        for (name, value) in headers {
            let header_name =
                HeaderName::try_from(name.as_str()).map_err(|e| TransportError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            let header_value =
                HeaderValue::from_str(value).map_err(|e| TransportError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            map.insert(header_name, header_value);
        }
        Ok(map)
    }
}

impl Transport for SilaHttp {
    async fn send(&self, request: SignedRequest) -> Result<RawResponse, TransportError> {
        let url = format!("{}{}", self.base_url, request.path);
        let headers = Self::header_map(&request.headers)?;

        let resp = self
            .client
            .post(&url)
            .headers(headers)
            .body(request.body.into_bytes())
            .send()
            .await
            .map_err(classify)?;

        let status = resp.status().as_u16();
        let mut response_headers: BTreeMap<String, String> = BTreeMap::new();
        for (name, value) in resp.headers() {
            let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
            response_headers
                .entry(name.as_str().to_string())
                .and_modify(|existing| {
                    existing.push_str(", ");
                    existing.push_str(&value);
                })
                .or_insert(value);
        }
        let body = resp.bytes().await.map_err(classify)?.to_vec();

        Ok(RawResponse {
            status,
            headers: response_headers,
            body,
        })
    }
}

fn classify(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout
    } else if e.is_connect() {
        TransportError::Connect(e)
    } else {
        TransportError::Reqwest(e)
    }
}
