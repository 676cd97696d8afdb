use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::path::Path;

use crate::auth::{basic_auth_header, LockfileData};
use crate::error::LcuError;

/// Client for the League client's local API on 127.0.0.1.
#[derive(Clone, Debug)]
pub struct LcuClient {
    pub(crate) http: Client,
    pub(crate) lockfile: LockfileData,
}

impl LcuClient {
    /// Read the lockfile at `path` and build a client from it.
    pub fn connect(path: impl AsRef<Path>) -> Result<Self, LcuError> {
        let lockfile = LockfileData::read(path)?;
        Self::new(lockfile)
    }

    /// The local API serves a self-signed certificate, so verification is
    /// switched off for this client only.
    pub fn new(lockfile: LockfileData) -> Result<Self, LcuError> {
        let http = Client::builder()
            .danger_accept_invalid_certs(true)
            // loopback only
            .no_proxy()
            .build()?;

        Ok(Self { http, lockfile })
    }

    pub fn local_url(&self) -> String {
        format!("{}://127.0.0.1:{}", self.lockfile.protocol, self.lockfile.port)
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.local_url(), path)
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.http
            .get(self.endpoint(path))
            .header(AUTHORIZATION, basic_auth_header(&self.lockfile.password))
            .header(ACCEPT, "application/json")
    }

    /// Single GET against the local API. Non-2xx is an error; nothing is retried.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, LcuError> {
        tracing::debug!(url = %self.endpoint(path), "GET");

        let resp = self.get(path).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("Unknown status");
            let body = match resp.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!(error = %e, "could not read error body");
                    String::new()
                }
            };
            let message = if body.trim().is_empty() {
                reason.to_string()
            } else {
                format!("{} ({})", reason, body.trim())
            };
            tracing::warn!(status = status.as_u16(), path, "local API request failed");
            return Err(LcuError::ApiError { status: status.as_u16(), message });
        }

        let body = resp.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
