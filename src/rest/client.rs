/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::api::{API_ORIGIN, ApiParams, REST_PATH, ResponseBody};
use crate::rest::creds::Creds;
use crate::rest::errors::FlickrError;
use reqwest::StatusCode;
use reqwest::header::RETRY_AFTER;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use url::Url;

/// Handle used to communicate with the Flickr REST API.
///
/// Cloning is cheap and every clone shares the same connection pool.
#[derive(Clone)]
pub struct Client {
    creds: Arc<Creds>,
    api_origin: Arc<str>,
    https_client: reqwest::Client,
}

impl Client {
    /// Creates a new Flickr client instance from provided credentials
    pub fn new(creds: Creds) -> Self {
        Self {
            creds: Arc::new(creds),
            api_origin: Arc::from(API_ORIGIN),
            https_client: reqwest::Client::new(),
        }
    }

    /// Creates a client that talks to another origin than api.flickr.com
    pub fn with_origin(creds: Creds, origin: &str) -> Result<Self, FlickrError> {
        Url::parse(origin)?;
        Ok(Self {
            creds: Arc::new(creds),
            api_origin: Arc::from(origin),
            https_client: reqwest::Client::new(),
        })
    }

    /// Invokes a REST method and returns the deserialized response payload
    pub async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Option<&ApiParams<'_>>,
    ) -> Result<T, FlickrError> {
        let mut req_url = Url::parse(&self.api_origin)?.join(REST_PATH)?;
        req_url
            .query_pairs_mut()
            .append_pair("method", method)
            .append_pair("format", "json")
            .append_pair("nojsoncallback", "1")
            .append_pair("api_key", self.creds.api_key());
        if let Some(params) = params {
            req_url.query_pairs_mut().extend_pairs(params.iter());
        }
        self.creds.sign(&mut req_url)?;

        log::debug!("Calling {method}");
        let resp = self
            .https_client
            .get(req_url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = resp.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = resp
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(0);
            return Err(FlickrError::ApiResponseTooManyRequests(retry_after));
        }

        let text = resp.text().await?;
        let body = match serde_json::from_str::<ResponseBody>(&text) {
            Ok(body) => body,
            Err(err) if status.is_success() => return Err(FlickrError::ApiResponseMalformed(err)),
            Err(_) => return Err(FlickrError::HttpStatus(status)),
        };
        if !body.is_ok() {
            let err = body.into_error();
            log::debug!("{method} failed: {err}");
            return Err(err);
        }

        serde_json::from_str::<T>(&text).map_err(|err| {
            log::warn!("Api Malformed Err for {method}: {err:?}");
            FlickrError::ApiResponseMalformed(err)
        })
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("api_origin", &self.api_origin)
            .field("creds", &self.creds)
            .finish()
    }
}
