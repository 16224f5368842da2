/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::reporter::{ReporterConfig, Strategy, UserIdentifier};
use crate::rest::{Creds, FlickrError};
use std::str::FromStr;

pub const API_KEY_VAR: &str = "FLICKR_API_KEY";
pub const API_SECRET_VAR: &str = "FLICKR_API_SECRET";
pub const ACCESS_TOKEN_VAR: &str = "FLICKR_ACCESS_TOKEN";
pub const TOKEN_SECRET_VAR: &str = "FLICKR_TOKEN_SECRET";
pub const USER_VAR: &str = "FLICKR_USER";
pub const STRATEGY_VAR: &str = "FLICKR_STRATEGY";
pub const CONCURRENCY_VAR: &str = "FLICKR_CONCURRENCY";

/// Account reported when no user is configured
pub const DEFAULT_USER: &str = "158890375@N08";

/// Everything needed for one report
#[derive(Debug, Clone)]
pub struct Config {
    pub creds: Creds,
    pub user: UserIdentifier,
    pub reporter: ReporterConfig,
}

impl Config {
    /// Reads the configuration from the process environment
    pub fn from_env() -> Result<Self, FlickrError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through `lookup`. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, FlickrError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = get(API_KEY_VAR)
            .ok_or_else(|| FlickrError::Config(format!("{API_KEY_VAR} is not set")))?;
        let api_secret = get(API_SECRET_VAR);
        let access_token = get(ACCESS_TOKEN_VAR);
        let token_secret = get(TOKEN_SECRET_VAR);
        let creds = Creds::from_tokens(
            &api_key,
            api_secret.as_deref(),
            access_token.as_deref(),
            token_secret.as_deref(),
        );

        let user = UserIdentifier::from(get(USER_VAR).as_deref().unwrap_or(DEFAULT_USER));

        let strategy = match get(STRATEGY_VAR) {
            Some(v) => Strategy::from_str(v.trim()).map_err(|_| {
                FlickrError::Config(format!(
                    "{STRATEGY_VAR} must be bulk or detail, got {v:?}"
                ))
            })?,
            None => Strategy::default(),
        };

        let concurrency = match get(CONCURRENCY_VAR) {
            Some(v) => match v.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(FlickrError::Config(format!(
                        "{CONCURRENCY_VAR} must be a positive number, got {v:?}"
                    )));
                }
            },
            None => 1,
        };

        Ok(Self {
            creds,
            user,
            reporter: ReporterConfig {
                strategy,
                concurrency,
            },
        })
    }
}
