/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::FlickrError;
use num_enum::TryFromPrimitive;
use serde::Deserialize;

// Root Flickr API
pub const API_ORIGIN: &str = "https://api.flickr.com";

// Every REST method is dispatched through this one endpoint
pub const REST_PATH: &str = "/services/rest/";

/// This can be filter types as well as other parameters the specific API method expects
pub type ApiParams<'a> = [(&'a str, &'a str)];

/// Error codes shared by all methods per the Flickr API site.
///
/// Codes below 95 are method specific and are reported as-is.
#[derive(Debug, TryFromPrimitive)]
#[repr(u32)]
pub enum ApiErrorCodes {
    SslRequired = 95,
    InvalidSignature = 96,
    MissingSignature = 97,
    LoginFailed = 98,
    InsufficientPermissions = 99,
    InvalidApiKey = 100,
    ServiceUnavailable = 105,
    WriteOperationFailed = 106,
    FormatNotFound = 111,
    MethodNotFound = 112,
    BadUrl = 116,
}

#[derive(Deserialize, Debug, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Stat {
    Ok,
    Fail,
}

// Status envelope wrapped around every JSON response from the API
#[derive(Deserialize, Debug)]
pub(crate) struct ResponseBody {
    pub(crate) stat: Stat,

    #[serde(default)]
    pub(crate) code: u32,

    #[serde(default)]
    pub(crate) message: String,
}

impl ResponseBody {
    pub(crate) fn is_ok(&self) -> bool {
        self.stat == Stat::Ok
    }

    /// Converts a failed response into the matching error
    pub(crate) fn into_error(self) -> FlickrError {
        use ApiErrorCodes as E;
        match ApiErrorCodes::try_from(self.code) {
            Ok(
                E::SslRequired
                | E::InvalidSignature
                | E::MissingSignature
                | E::LoginFailed
                | E::InsufficientPermissions
                | E::InvalidApiKey,
            ) => FlickrError::Auth(format!("{} (code {})", self.message, self.code)),
            _ => FlickrError::ApiResponse(self.code, self.message),
        }
    }
}
