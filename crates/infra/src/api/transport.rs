//! Request plumbing shared by every resource client
//!
//! The transport turns a verb, a host-relative path and an optional JSON body
//! into one HTTP exchange. It attaches the credential snapshot taken at the
//! start of the request and hands the raw [`Outcome`] to the normalizer.

use std::fmt;

use harvest_domain::constants::ACCESS_TOKEN_PARAM;
use harvest_domain::{HarvestError, HttpVerb, Result};
use reqwest::header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::multipart::Form;
use reqwest::{Method, RequestBuilder};
use serde_json::Value;
use tracing::{debug, field, instrument, Span};
use uuid::Uuid;

use super::auth::CredentialSlot;
use super::normalizer::{normalize, Outcome};
use crate::errors::InfraError;
use crate::http::HttpClient;

const JSON: &str = "application/json";

/// Sends requests to one Harvest host with the current credential.
#[derive(Clone)]
pub struct Transport {
    http: HttpClient,
    host: String,
    credentials: CredentialSlot,
    debug: bool,
}

impl Transport {
    pub fn new(http: HttpClient, host: impl Into<String>, credentials: CredentialSlot) -> Self {
        Self { http, host: host.into(), credentials, debug: false }
    }

    /// Log payloads and response statuses at debug level.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn credentials(&self) -> &CredentialSlot {
        &self.credentials
    }

    /// Perform one request and normalize its outcome.
    ///
    /// # Errors
    /// See [`normalize`].
    pub async fn request(&self, verb: HttpVerb, path: &str, body: Option<&Value>) -> Result<Value> {
        normalize(self.run(verb, path, body).await)
    }

    /// Perform one request and return the raw outcome.
    ///
    /// Non-GET requests always carry a content length: the serialized body
    /// length, or 0 without a body.
    #[instrument(
        skip_all,
        fields(request_id = %Uuid::new_v4(), verb = %verb, path = %path, status = field::Empty)
    )]
    pub async fn run(&self, verb: HttpVerb, path: &str, body: Option<&Value>) -> Outcome {
        let credential = self.credentials.snapshot();
        let url = self.url(path);

        if self.debug {
            debug!(credential = credential.kind(), payload = ?body, "run");
        }

        let mut request = credential.apply(self.http.request(method(verb), &url)).header(ACCEPT, JSON);

        if verb.has_body() {
            request = match attach_body(request, body) {
                Ok(request) => request,
                Err(err) => return Outcome::Failed(err),
            };
        }

        self.complete(verb, request).await
    }

    /// Multipart POST. A bearer token travels as the `access_token` query
    /// parameter; otherwise the current credential is attached as a header.
    ///
    /// # Errors
    /// See [`normalize`].
    #[instrument(
        skip_all,
        fields(request_id = %Uuid::new_v4(), path = %path, status = field::Empty)
    )]
    pub async fn upload(&self, path: &str, form: Form) -> Result<Value> {
        let credential = self.credentials.snapshot();
        let url = self.url(path);

        let mut request = self.http.request(Method::POST, &url).header(ACCEPT, JSON);
        request = match credential.bearer_token() {
            Some(token) => request.query(&[(ACCESS_TOKEN_PARAM, token)]),
            None => credential.apply(request),
        };

        if self.debug {
            debug!(credential = credential.kind(), "uploading multipart form");
        }

        normalize(self.complete(HttpVerb::Post, request.multipart(form)).await)
    }

    async fn complete(&self, verb: HttpVerb, request: RequestBuilder) -> Outcome {
        let response = match self.http.send(request).await {
            Ok(response) => response,
            Err(err) => return Outcome::Failed(err),
        };

        let status = response.status();
        Span::current().record("status", status.as_u16());

        match response.text().await {
            Ok(body) => {
                if self.debug {
                    debug!(%status, body_len = body.len(), "complete");
                }
                Outcome::Completed { verb, status, body }
            }
            Err(err) => Outcome::Failed(HarvestError::from(InfraError::from(err))),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.host, path)
    }
}

impl fmt::Debug for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transport")
            .field("host", &self.host)
            .field("credentials", &self.credentials)
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

fn method(verb: HttpVerb) -> Method {
    match verb {
        HttpVerb::Get => Method::GET,
        HttpVerb::Post => Method::POST,
        HttpVerb::Put => Method::PUT,
        HttpVerb::Patch => Method::PATCH,
        HttpVerb::Delete => Method::DELETE,
    }
}

fn attach_body(request: RequestBuilder, body: Option<&Value>) -> Result<RequestBuilder> {
    let Some(body) = body else {
        return Ok(request.header(CONTENT_LENGTH, 0));
    };

    let payload = serde_json::to_vec(body).map_err(|err| HarvestError::from(InfraError::from(err)))?;
    Ok(request
        .header(CONTENT_TYPE, JSON)
        .header(CONTENT_LENGTH, payload.len())
        .body(payload))
}
