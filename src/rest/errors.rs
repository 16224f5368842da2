/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use std::io;
use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum FlickrError {
    #[error("I/O error")]
    Io(#[from] io::Error),

    #[error("Request network error")]
    Request(#[from] reqwest::Error),

    #[error("Authorization error. {0}")]
    Auth(String),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),

    #[error("Configuration error. {0}")]
    Config(String),

    #[error("Client not found")]
    ClientNotFound(),

    #[error("Expected response missing")]
    ResponseMissing(),

    #[error("Required field missing: {0}")]
    MissingField(String),

    #[error("API Response was error: {0}, msg: {1}")]
    ApiResponse(u32, String),

    #[error("API Response is a too many requests error. Retry after {0} seconds")]
    ApiResponseTooManyRequests(u64),

    #[error("API Response is malformed: {0:?}")]
    ApiResponseMalformed(serde_json::Error),

    #[error("HTTP error {0}")]
    HttpStatus(reqwest::StatusCode),
}

impl FlickrError {
    /// True when the failure is due to credentials rather than the request itself
    pub fn is_auth(&self) -> bool {
        matches!(self, FlickrError::Auth(_))
    }
}
